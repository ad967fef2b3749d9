use super::dto::SpeechRequest;
use super::error::TtsServiceError;
use super::SpeechStream;
use crate::infrastructure::repositories::TtsRepository;
use async_trait::async_trait;
use std::sync::Arc;

pub struct TtsService {
    tts_repo: Arc<dyn TtsRepository>,
    default_api_key: Option<String>,
}

impl TtsService {
    pub fn new(tts_repo: Arc<dyn TtsRepository>, default_api_key: Option<String>) -> Self {
        Self {
            tts_repo,
            default_api_key,
        }
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Start synthesizing speech for a request
    ///
    /// This operation:
    /// - Rejects empty text
    /// - Picks the request key, falling back to the configured one
    /// - Opens the provider stream without waiting for the audio body
    async fn stream_speech(&self, request: SpeechRequest) -> Result<SpeechStream, TtsServiceError>;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn stream_speech(&self, request: SpeechRequest) -> Result<SpeechStream, TtsServiceError> {
        if request.text.trim().is_empty() {
            return Err(TtsServiceError::EmptyText);
        }

        let api_key = self.api_key_for(&request)?;

        tracing::info!(
            model = %request.model,
            voice = %request.voice_id,
            text_length = request.text_length(),
            custom_key = request.api_key.is_some(),
            "TTS synthesis request"
        );

        let speech = self
            .tts_repo
            .stream_speech(&request.text, request.model, &request.voice_id, api_key)
            .await?;

        tracing::debug!(header_count = speech.headers.len(), "TTS stream opened");

        Ok(speech)
    }
}

impl TtsService {
    fn api_key_for<'a>(&'a self, request: &'a SpeechRequest) -> Result<&'a str, TtsServiceError> {
        request
            .api_key
            .as_deref()
            .or(self.default_api_key.as_deref())
            .filter(|key| !key.trim().is_empty())
            .ok_or(TtsServiceError::MissingApiKey)
    }
}
