use crate::domain::tts::{TtsModel, DEFAULT_VOICE_ID};
use crate::infrastructure::elevenlabs::DEFAULT_BASE_URL;
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    pub elevenlabs_api_key: Option<String>,
    pub elevenlabs_base_url: String,
    pub default_voice_id: String,
    pub default_model: String,
    pub default_player: Option<String>,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Config {
            elevenlabs_api_key: get("ELEVENLABS_API_KEY"),
            elevenlabs_base_url: get("ELEVENLABS_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            default_voice_id: get("YAP_VOICE_ID").unwrap_or_else(|| DEFAULT_VOICE_ID.to_string()),
            default_model: get("YAP_MODEL").unwrap_or_else(|| TtsModel::DEFAULT.to_string()),
            default_player: get("YAP_PLAYER"),
            log_format: get("LOG_FORMAT")
                .map(|s| match s.to_lowercase().as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })
                .unwrap_or(LogFormat::Pretty),
        }
    }
}
