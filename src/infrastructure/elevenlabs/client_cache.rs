use super::ElevenLabsClient;
use moka::future::Cache;
use std::sync::Arc;

/// One ElevenLabs client per API key, kept for the lifetime of the process.
///
/// Built once at startup and handed to the repository. The cache has no
/// capacity bound and no expiry, so entries are never evicted.
pub struct ElevenLabsClientCache {
    base_url: String,
    http_client: reqwest::Client,
    clients: Cache<String, Arc<ElevenLabsClient>>,
}

impl ElevenLabsClientCache {
    pub fn new(base_url: String) -> Self {
        Self::with_http_client(base_url, reqwest::Client::new())
    }

    pub fn with_http_client(base_url: String, http_client: reqwest::Client) -> Self {
        Self {
            base_url,
            http_client,
            clients: Cache::builder().build(),
        }
    }

    /// Client for `api_key`, created on first use.
    pub async fn client_for(&self, api_key: &str) -> Arc<ElevenLabsClient> {
        self.clients
            .get_with(api_key.to_string(), async {
                tracing::debug!("Creating ElevenLabs client for new API key");
                Arc::new(ElevenLabsClient::new(
                    api_key.to_string(),
                    self.base_url.clone(),
                    self.http_client.clone(),
                ))
            })
            .await
    }

    pub async fn len(&self) -> u64 {
        self.clients.run_pending_tasks().await;
        self.clients.entry_count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
