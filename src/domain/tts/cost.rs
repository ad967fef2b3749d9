use std::collections::HashMap;

const COST_HEADERS: [&str; 6] = [
    "character-cost",
    "x-character-cost",
    "character_cost",
    "x-character_cost",
    "credits-used",
    "x-credits-used",
];

const CURRENCY_HEADERS: [&str; 6] = [
    "cost-currency",
    "x-cost-currency",
    "character-cost-currency",
    "x-character-cost-currency",
    "currency",
    "x-currency",
];

/// Response metadata from the speech provider. Keys are case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseHeaders(HashMap<String, String>);

impl ResponseHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl AsRef<str>, value: impl Into<String>) {
        self.0.insert(key.as_ref().to_ascii_lowercase(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(&key.to_ascii_lowercase()).map(String::as_str)
    }

    /// First non-empty value among `keys`, in order.
    pub fn first_of(&self, keys: &[&str]) -> Option<&str> {
        keys.iter()
            .filter_map(|key| self.get(key))
            .find(|value| !value.is_empty())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for ResponseHeaders {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Self::new();
        for (key, value) in iter {
            headers.insert(key, value);
        }
        headers
    }
}

impl From<&reqwest::header::HeaderMap> for ResponseHeaders {
    fn from(map: &reqwest::header::HeaderMap) -> Self {
        map.iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect()
    }
}

/// Format the request cost reported in provider headers.
///
/// `$<n>` for USD, `<n> <CURRENCY>` for another currency, `<n> credits`
/// without a currency, and `n/a` when the provider reported no cost.
pub fn extract_cost(headers: &ResponseHeaders) -> String {
    let Some(cost) = headers.first_of(&COST_HEADERS) else {
        return "n/a".to_string();
    };

    match headers.first_of(&CURRENCY_HEADERS) {
        Some(currency) => {
            let currency = currency.trim().to_uppercase();
            if currency == "USD" {
                format!("${}", cost)
            } else {
                format!("{} {}", cost, currency)
            }
        }
        None => format!("{} credits", cost),
    }
}
