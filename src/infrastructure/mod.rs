pub mod cli;
pub mod config;
pub mod elevenlabs;
pub mod repositories;
