use crate::domain::player::PlaybackResult;
use crate::domain::tts::SpeechRequest;
use std::fmt;

/// Summary of one playback, printed with `--verbose`
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackReport {
    pub model: String,
    pub voice: String,
    pub player: String,
    pub latency: String,
    pub total: String,
    pub bytes: u64,
    pub text_length: usize,
    pub cost: String,
}

impl PlaybackReport {
    pub fn new(request: &SpeechRequest, result: &PlaybackResult, cost: String) -> Self {
        Self {
            model: format!("{} ({})", request.model, request.model.description()),
            voice: request.voice_id.clone(),
            player: result.player.clone(),
            latency: result
                .ttfb_ms()
                .map(format_ms)
                .unwrap_or_else(|| "n/a".to_string()),
            total: format_ms(result.total_ms()),
            bytes: result.bytes,
            text_length: request.text_length(),
            cost,
        }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

fn format_ms(ms: f64) -> String {
    format!("{:.1}ms", ms)
}

impl fmt::Display for PlaybackReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "yap playback report")?;
        writeln!(f, "  {:<8} {}", "model", self.model)?;
        writeln!(f, "  {:<8} {}", "voice", self.voice)?;
        writeln!(f, "  {:<8} {}", "player", self.player)?;
        writeln!(f, "  {:<8} {}", "latency", self.latency)?;
        writeln!(f, "  {:<8} {}", "total", self.total)?;
        writeln!(f, "  {:<8} {}", "length", self.text_length)?;
        writeln!(f, "  {:<8} {}", "cost", self.cost)?;
        write!(f, "  {:<8} {}", "bytes", self.bytes)
    }
}
