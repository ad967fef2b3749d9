use crate::domain::player::player_definitions;
use crate::domain::tts::TtsModel;
use clap::{CommandFactory, FromArgMatches, Parser};

/// yap command line
#[derive(Parser, Debug, Clone, PartialEq)]
#[clap(
    name = "yap",
    version,
    about = "CLI to yap in the terminal with ElevenLabs TTS"
)]
pub struct Args {
    /// Text to speak
    #[clap(value_name = "TEXT")]
    pub text: Vec<String>,

    /// TTS model to use
    #[clap(short = 'm', long, help = "TTS model to use [default: eleven_turbo_v2_5]")]
    pub model: Option<String>,

    /// Audio player backend
    #[clap(short = 'p', long, help = "Audio player backend [default: first installed]")]
    pub player: Option<String>,

    /// List players available on this system
    #[clap(long)]
    pub players: bool,

    /// ElevenLabs API key override
    #[clap(short = 'k', long = "key", visible_alias = "api-key", value_name = "API_KEY")]
    pub key: Option<String>,

    /// ElevenLabs voice ID
    #[clap(short = 'v', long, value_name = "VOICE_ID")]
    pub voice: Option<String>,

    /// Show playback and latency details
    #[clap(long)]
    pub verbose: bool,

    /// Log debug details to stderr
    #[clap(long)]
    pub debug: bool,
}

impl Args {
    /// Parse the process arguments, exiting on `--help`, `--version` or usage errors.
    pub fn parse_with_help() -> Self {
        match Self::try_parse_with_help(std::env::args_os()) {
            Ok(args) => args,
            Err(e) => e.exit(),
        }
    }

    pub fn try_parse_with_help<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let mut command = Self::command().after_help(extra_help());
        let matches = command.try_get_matches_from_mut(argv)?;
        Self::from_arg_matches(&matches).map_err(|e| e.format(&mut command))
    }
}

fn extra_help() -> String {
    let examples = [
        "yap \"nah it's GGs\"",
        "yap -m eleven_flash_v2_5 \"fast mode\"",
        "yap -k elv_xxx \"use custom key\"",
        "yap -v JBFqnCBsd6RMkjVDRZzb \"custom voice\"",
        "yap -p ffplay \"force player\"",
        "yap --players",
    ];
    let models: Vec<String> = TtsModel::ALL
        .iter()
        .map(|model| format!("{} ({})", model, model.description()))
        .collect();
    let players: Vec<String> = player_definitions()
        .map(|player| format!("{} ({})", player.name, player.description))
        .collect();

    format!(
        "Examples:\n  {}\n\nAvailable models:\n  {}\n\nSupported players:\n  {}",
        examples.join("\n  "),
        models.join("\n  "),
        players.join("\n  ")
    )
}
