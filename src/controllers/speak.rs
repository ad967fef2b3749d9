use std::sync::Arc;
use std::time::Instant;

use super::report::PlaybackReport;
use crate::{
    domain::{
        player::{PlaybackEngine, PlayerResolver},
        tts::{extract_cost, SpeechRequest, TtsModel, TtsServiceApi, TtsServiceError},
    },
    error::AppResult,
};

/// Everything one `yap <text>` invocation asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeakCommand {
    pub words: Vec<String>,
    pub model: String,
    pub voice_id: String,
    pub player: Option<String>,
    pub api_key: Option<String>,
}

pub struct SpeakController {
    tts_service: Arc<dyn TtsServiceApi>,
    resolver: Arc<PlayerResolver>,
    engine: PlaybackEngine,
}

impl SpeakController {
    pub fn new(
        tts_service: Arc<dyn TtsServiceApi>,
        resolver: Arc<PlayerResolver>,
        engine: PlaybackEngine,
    ) -> Self {
        Self {
            tts_service,
            resolver,
            engine,
        }
    }

    /// Synthesize the text and play it, returning the playback report.
    ///
    /// The player is resolved before the provider is called so a missing
    /// player never costs credits.
    pub async fn speak(&self, command: SpeakCommand) -> AppResult<PlaybackReport> {
        if command.words.iter().all(|word| word.trim().is_empty()) {
            return Err(TtsServiceError::EmptyText.into());
        }

        let model: TtsModel = command.model.parse()?;
        let request = SpeechRequest::from_words(&command.words, model, command.voice_id)
            .with_api_key(command.api_key);

        let player = self.resolver.resolve(command.player.as_deref())?;

        let started_at = Instant::now();
        let speech = self.tts_service.stream_speech(request.clone()).await?;
        let cost = extract_cost(&speech.headers);

        let result = self.engine.play(speech.audio, player, started_at).await?;

        tracing::info!(
            player = %result.player,
            bytes = result.bytes,
            ttfb_ms = ?result.ttfb_ms(),
            total_ms = result.total_ms(),
            cost = %cost,
            "Playback finished"
        );

        Ok(PlaybackReport::new(&request, &result, cost))
    }
}
