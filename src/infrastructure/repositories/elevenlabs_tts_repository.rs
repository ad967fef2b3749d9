use super::tts_repository::TtsRepository;
use crate::domain::tts::{ResponseHeaders, SpeechStream, TtsModel, TtsServiceError};
use crate::infrastructure::elevenlabs::ElevenLabsClientCache;
use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt};
use std::sync::Arc;

/// ElevenLabs implementation of TTS repository
pub struct ElevenLabsTtsRepository {
    clients: Arc<ElevenLabsClientCache>,
}

impl ElevenLabsTtsRepository {
    pub fn new(clients: Arc<ElevenLabsClientCache>) -> Self {
        Self { clients }
    }
}

#[async_trait]
impl TtsRepository for ElevenLabsTtsRepository {
    async fn stream_speech(
        &self,
        text: &str,
        model: TtsModel,
        voice_id: &str,
        api_key: &str,
    ) -> Result<SpeechStream, TtsServiceError> {
        let start_time = std::time::Instant::now();

        tracing::info!(
            provider = "elevenlabs",
            model = %model,
            voice = voice_id,
            text_length = text.len(),
            text_preview = %text.chars().take(200).collect::<String>(),
            "Starting ElevenLabs TTS stream"
        );

        let client = self.clients.client_for(api_key).await;
        let response = client.stream_speech(text, model, voice_id).await?;
        let headers = ResponseHeaders::from(response.headers());

        tracing::info!(
            provider = "elevenlabs",
            model = %model,
            status = response.status().as_u16(),
            latency_ms = start_time.elapsed().as_millis(),
            "ElevenLabs response headers received"
        );

        let audio = response
            .bytes_stream()
            .map_err(|e| {
                tracing::error!(error = %e, "ElevenLabs audio stream failed");
                TtsServiceError::Dependency(format!("ElevenLabs audio stream failed: {}", e))
            })
            .boxed();

        Ok(SpeechStream { audio, headers })
    }
}
