pub mod client_cache;

pub use client_cache::ElevenLabsClientCache;

use crate::domain::tts::{TtsModel, TtsServiceError};
use serde::Serialize;

pub const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";
const API_KEY_HEADER: &str = "xi-api-key";
const STREAMING_LATENCY: u8 = 1;

#[derive(Debug, Serialize)]
pub struct StreamSpeechBody<'a> {
    pub text: &'a str,
    pub model_id: &'a str,
}

/// ElevenLabs API client bound to one API key.
pub struct ElevenLabsClient {
    api_key: String,
    base_url: String,
    http_client: reqwest::Client,
}

impl ElevenLabsClient {
    pub fn new(api_key: String, base_url: String, http_client: reqwest::Client) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    fn stream_url(&self, voice_id: &str) -> String {
        format!(
            "{}/v1/text-to-speech/{}/stream",
            self.base_url,
            urlencoding::encode(voice_id)
        )
    }

    /// Start a streaming synthesis and return the response once headers arrive.
    pub async fn stream_speech(
        &self,
        text: &str,
        model: TtsModel,
        voice_id: &str,
    ) -> Result<reqwest::Response, TtsServiceError> {
        let body = StreamSpeechBody {
            text,
            model_id: model.as_str(),
        };

        let mut request = self
            .http_client
            .post(self.stream_url(voice_id))
            .header(API_KEY_HEADER, self.api_key.as_str())
            .header("Accept", "audio/mpeg")
            .json(&body);

        if model.supports_latency_optimization() {
            request = request.query(&[("optimize_streaming_latency", STREAMING_LATENCY)]);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!(error = %e, model = %model, "ElevenLabs request failed");
            TtsServiceError::Dependency(format!("ElevenLabs request failed: {}", e))
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!(
                status = status.as_u16(),
                model = %model,
                voice = voice_id,
                "ElevenLabs rejected synthesis request"
            );
            return Err(TtsServiceError::Provider {
                status: status.as_u16(),
                message: error_text,
            });
        }

        Ok(response)
    }
}
