use anyhow::Result;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;
use yap::controllers::players::PlayersController;
use yap::controllers::speak::{SpeakCommand, SpeakController};
use yap::domain::player::{PlaybackEngine, PlayerResolver, SystemPathLocator};
use yap::domain::tts::TtsService;
use yap::infrastructure::elevenlabs::ElevenLabsClientCache;
use yap::infrastructure::repositories::ElevenLabsTtsRepository;

pub mod fake_provider;

pub use fake_provider::{FakeProvider, AUDIO_CHUNKS, REJECTED_KEY};

pub const CONFIGURED_KEY: &str = "env-key";

/// Fake provider plus a directory standing in for `PATH`
pub struct TestContext {
    pub provider: FakeProvider,
    pub bin_dir: TempDir,
}

impl TestContext {
    pub async fn new() -> Result<Self> {
        Ok(Self {
            provider: FakeProvider::start().await?,
            bin_dir: tempfile::tempdir()?,
        })
    }

    /// Install a player named `command` that copies its stdin to `played_path()`.
    pub fn install_recording_player(&self, command: &str) -> Result<()> {
        self.install_player(command, "cat > \"$(dirname \"$0\")/played.bin\"")
    }

    pub fn install_player(&self, command: &str, body: &str) -> Result<()> {
        let path = self.bin_dir.path().join(command);
        std::fs::write(&path, format!("#!/bin/sh\n{}\n", body))?;
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))?;
        Ok(())
    }

    pub fn played_path(&self) -> PathBuf {
        self.bin_dir.path().join("played.bin")
    }

    pub fn played_bytes(&self) -> Option<Vec<u8>> {
        std::fs::read(self.played_path()).ok()
    }

    pub fn resolver(&self) -> Arc<PlayerResolver> {
        resolver_for(self.bin_dir.path())
    }

    /// Same wiring as the binary, pointed at the fake provider and fake `PATH`.
    pub fn speak_controller(&self, configured_key: Option<&str>) -> SpeakController {
        let clients = Arc::new(ElevenLabsClientCache::new(self.provider.base_url.clone()));
        let tts_repo = Arc::new(ElevenLabsTtsRepository::new(clients));
        let tts_service = Arc::new(TtsService::new(
            tts_repo,
            configured_key.map(str::to_string),
        ));

        SpeakController::new(tts_service, self.resolver(), PlaybackEngine::new())
    }

    pub fn players_controller(&self) -> PlayersController {
        PlayersController::new(self.resolver())
    }
}

pub fn resolver_for(search_path: &Path) -> Arc<PlayerResolver> {
    Arc::new(PlayerResolver::new(Arc::new(
        SystemPathLocator::with_search_path(search_path),
    )))
}

pub fn speak_command(text: &str) -> SpeakCommand {
    SpeakCommand {
        words: text.split(' ').map(str::to_string).collect(),
        model: "eleven_turbo_v2_5".to_string(),
        voice_id: "pNInz6obpgDQGcFmaJgB".to_string(),
        player: None,
        api_key: None,
    }
}
