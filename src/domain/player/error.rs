use super::registry::PlayerName;

#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    #[error("Unsupported player: {0}. Run --players to see supported players.")]
    UnknownPlayer(String),

    #[error("Player {0} is not installed. Run --players to inspect availability.")]
    PlayerNotInstalled(PlayerName),

    #[error("No supported audio player found. Install {}.", PlayerName::install_hint())]
    NoPlayerAvailable,

    #[error("{player} could not be started: {source}")]
    SpawnFailed {
        player: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{player} exited with {}", describe_exit(.code))]
    PlayerExitedNonZero { player: String, code: Option<i32> },

    #[error("{player} stopped accepting audio: {source}")]
    PlayerIo {
        player: String,
        #[source]
        source: std::io::Error,
    },

    #[error("audio stream for {player} was interrupted: {message}")]
    StreamInterrupted { player: String, message: String },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("code {}", code),
        None => "a signal".to_string(),
    }
}

impl PlayerError {
    /// The exit code reported by the player, when the player ran and failed.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::PlayerExitedNonZero { code, .. } => *code,
            _ => None,
        }
    }

    /// Whether the failure comes from how the player was chosen rather than from running it.
    pub fn is_selection_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownPlayer(_) | Self::PlayerNotInstalled(_) | Self::NoPlayerAvailable
        )
    }
}
