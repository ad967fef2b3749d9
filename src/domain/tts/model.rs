use super::error::TtsServiceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// ElevenLabs speech models yap accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TtsModel {
    #[serde(rename = "eleven_v3")]
    ElevenV3,
    #[serde(rename = "eleven_multilingual_v2")]
    MultilingualV2,
    #[serde(rename = "eleven_flash_v2_5")]
    FlashV2_5,
    #[serde(rename = "eleven_flash_v2")]
    FlashV2,
    #[serde(rename = "eleven_turbo_v2_5")]
    TurboV2_5,
    #[serde(rename = "eleven_turbo_v2")]
    TurboV2,
}

impl TtsModel {
    pub const ALL: [TtsModel; 6] = [
        TtsModel::ElevenV3,
        TtsModel::MultilingualV2,
        TtsModel::FlashV2_5,
        TtsModel::FlashV2,
        TtsModel::TurboV2_5,
        TtsModel::TurboV2,
    ];

    pub const DEFAULT: TtsModel = TtsModel::TurboV2_5;

    /// Model id as sent to the provider
    pub fn as_str(&self) -> &'static str {
        match self {
            TtsModel::ElevenV3 => "eleven_v3",
            TtsModel::MultilingualV2 => "eleven_multilingual_v2",
            TtsModel::FlashV2_5 => "eleven_flash_v2_5",
            TtsModel::FlashV2 => "eleven_flash_v2",
            TtsModel::TurboV2_5 => "eleven_turbo_v2_5",
            TtsModel::TurboV2 => "eleven_turbo_v2",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TtsModel::ElevenV3 => "expressive",
            TtsModel::MultilingualV2 => "high quality",
            TtsModel::FlashV2_5 => "ultra fast",
            TtsModel::FlashV2 => "fast",
            TtsModel::TurboV2_5 => "fastest",
            TtsModel::TurboV2 => "balanced",
        }
    }

    /// eleven_v3 rejects the streaming latency optimization parameter.
    pub fn supports_latency_optimization(&self) -> bool {
        !matches!(self, TtsModel::ElevenV3)
    }
}

impl Default for TtsModel {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for TtsModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TtsModel {
    type Err = TtsServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|model| model.as_str() == s)
            .ok_or_else(|| TtsServiceError::UnsupportedModel(s.to_string()))
    }
}
