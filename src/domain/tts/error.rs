#[derive(Debug, thiserror::Error)]
pub enum TtsServiceError {
    #[error("Missing API key. Set ELEVENLABS_API_KEY or pass --key <apiKey>")]
    MissingApiKey,
    #[error("No text provided. Pass text or run --players.")]
    EmptyText,
    #[error("Unsupported model: {0}. Run --help to see available models.")]
    UnsupportedModel(String),
    #[error("speech provider returned {status}: {message}")]
    Provider { status: u16, message: String },
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<reqwest::Error> for TtsServiceError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => TtsServiceError::Provider {
                status: status.as_u16(),
                message: err.to_string(),
            },
            None => TtsServiceError::Dependency(err.to_string()),
        }
    }
}

impl TtsServiceError {
    /// Whether the request was rejected before anything was sent to the provider.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::MissingApiKey | Self::EmptyText | Self::UnsupportedModel(_)
        )
    }
}
