use super::error::PlayerError;
use std::fmt;
use std::str::FromStr;

/// External players yap knows how to feed audio into.
///
/// Declaration order in [`PlayerName::ALL`] is the fallback preference order
/// used when no player is requested explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerName {
    Mpv,
    Ffplay,
    Cvlc,
    Mplayer,
    Mpg123,
}

/// Launch recipe for one player. Every recipe reads audio from stdin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerDefinition {
    pub name: PlayerName,
    pub command: &'static str,
    pub args: &'static [&'static str],
    pub description: &'static str,
}

impl PlayerName {
    pub const ALL: [PlayerName; 5] = [
        PlayerName::Mpv,
        PlayerName::Ffplay,
        PlayerName::Cvlc,
        PlayerName::Mplayer,
        PlayerName::Mpg123,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerName::Mpv => "mpv",
            PlayerName::Ffplay => "ffplay",
            PlayerName::Cvlc => "cvlc",
            PlayerName::Mplayer => "mplayer",
            PlayerName::Mpg123 => "mpg123",
        }
    }

    pub fn definition(self) -> PlayerDefinition {
        match self {
            PlayerName::Mpv => PlayerDefinition {
                name: self,
                command: "mpv",
                args: &["-"],
                description: "recommended",
            },
            PlayerName::Ffplay => PlayerDefinition {
                name: self,
                command: "ffplay",
                args: &["-autoexit", "-nodisp", "-"],
                description: "fallback",
            },
            PlayerName::Cvlc => PlayerDefinition {
                name: self,
                command: "cvlc",
                args: &["--play-and-exit", "-"],
                description: "vlc",
            },
            PlayerName::Mplayer => PlayerDefinition {
                name: self,
                command: "mplayer",
                args: &["-"],
                description: "legacy",
            },
            PlayerName::Mpg123 => PlayerDefinition {
                name: self,
                command: "mpg123",
                args: &["-"],
                description: "lightweight",
            },
        }
    }

    /// "mpv, ffplay, cvlc, mplayer, or mpg123"
    pub fn install_hint() -> String {
        let names: Vec<&str> = Self::ALL.iter().map(|name| name.as_str()).collect();
        match names.split_last() {
            Some((last, rest)) if !rest.is_empty() => format!("{}, or {}", rest.join(", "), last),
            Some((last, _)) => last.to_string(),
            None => String::new(),
        }
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayerName {
    type Err = PlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| PlayerError::UnknownPlayer(s.to_string()))
    }
}

/// All player definitions in preference order.
pub fn player_definitions() -> impl Iterator<Item = PlayerDefinition> {
    PlayerName::ALL.into_iter().map(PlayerName::definition)
}
