use crate::domain::player::PlayerError;
use crate::domain::tts::TtsServiceError;

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Player(#[from] PlayerError),

    #[error(transparent)]
    Tts(#[from] TtsServiceError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Process exit code for this error: 2 for usage mistakes, 1 for everything else
    pub fn exit_code(&self) -> i32 {
        if self.is_usage_error() {
            2
        } else {
            1
        }
    }

    fn is_usage_error(&self) -> bool {
        match self {
            // nothing installed is an environment problem, not a usage one
            Self::Player(err) => {
                err.is_selection_error() && !matches!(err, PlayerError::NoPlayerAvailable)
            }
            Self::Tts(err) => err.is_invalid_input(),
            Self::Config(_) => true,
            Self::Internal(_) => false,
        }
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
