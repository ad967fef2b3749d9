pub mod player;
pub mod tts;
