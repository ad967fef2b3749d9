pub mod cost;
pub mod dto;
pub mod error;
pub mod model;
pub mod service;

pub use cost::{extract_cost, ResponseHeaders};
pub use dto::{SpeechRequest, DEFAULT_VOICE_ID};
pub use error::TtsServiceError;
pub use model::TtsModel;
pub use service::{TtsService, TtsServiceApi};

use bytes::Bytes;
use futures::stream::BoxStream;

/// Audio chunks in the order the provider sent them.
pub type AudioStream = BoxStream<'static, Result<Bytes, TtsServiceError>>;

/// A started synthesis: the audio body still streaming in, plus the response headers.
pub struct SpeechStream {
    pub audio: AudioStream,
    pub headers: ResponseHeaders,
}

impl std::fmt::Debug for SpeechStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechStream")
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}
