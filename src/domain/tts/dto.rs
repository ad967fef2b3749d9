use super::model::TtsModel;

pub const DEFAULT_VOICE_ID: &str = "pNInz6obpgDQGcFmaJgB";

/// One text-to-speech request as entered on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechRequest {
    pub text: String,
    pub model: TtsModel,
    pub voice_id: String,
    /// Overrides the configured key for this request only
    pub api_key: Option<String>,
}

impl SpeechRequest {
    /// Join command line words into the text to speak.
    pub fn from_words(words: &[String], model: TtsModel, voice_id: impl Into<String>) -> Self {
        Self {
            text: words.join(" ").trim().to_string(),
            model,
            voice_id: voice_id.into(),
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    /// Length of the text in characters.
    pub fn text_length(&self) -> usize {
        self.text.chars().count()
    }
}
