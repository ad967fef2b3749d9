use crate::domain::tts::{SpeechStream, TtsModel, TtsServiceError};
use async_trait::async_trait;

/// Repository for streaming TTS synthesis.
/// Abstracts the underlying TTS provider (ElevenLabs today).
///
/// Implementations are responsible for:
/// - Building the provider-specific request for the model and voice
/// - Returning as soon as response headers arrive, with the body still streaming
/// - Mapping provider failures to `TtsServiceError`
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Start synthesizing `text` and return the audio stream
    ///
    /// # Arguments
    /// * `text` - The text to speak, already trimmed
    /// * `model` - Provider model to synthesize with
    /// * `voice_id` - Provider voice identifier
    /// * `api_key` - Credential for this request
    ///
    /// # Errors
    /// Returns error if the provider rejects the request or cannot be reached
    async fn stream_speech(
        &self,
        text: &str,
        model: TtsModel,
        voice_id: &str,
        api_key: &str,
    ) -> Result<SpeechStream, TtsServiceError>;
}
