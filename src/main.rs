use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use yap::controllers::{
    players::PlayersController,
    speak::{SpeakCommand, SpeakController},
};
use yap::error::AppResult;
use yap::infrastructure::cli::Args;
use yap::infrastructure::config::{Config, LogFormat};

#[tokio::main]
async fn main() {
    let args = Args::parse_with_help();

    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config, args.debug);

    if let Err(err) = run(args, config).await {
        tracing::debug!(error = ?err, "yap failed");
        eprintln!("{}", err);
        std::process::exit(err.exit_code());
    }
}

async fn run(args: Args, config: Config) -> AppResult<()> {
    let resolver = Arc::new(yap::domain::player::PlayerResolver::system());

    if args.players {
        let players_controller = PlayersController::new(resolver);
        println!("{}", players_controller.list());
        return Ok(());
    }

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Provider clients, one per API key
    tracing::debug!(base_url = %config.elevenlabs_base_url, "Instantiating ElevenLabs client cache...");
    let clients = Arc::new(yap::infrastructure::elevenlabs::ElevenLabsClientCache::new(
        config.elevenlabs_base_url.clone(),
    ));

    // 2. Repositories
    let tts_repo = Arc::new(yap::infrastructure::repositories::ElevenLabsTtsRepository::new(clients));

    // 3. Services
    let tts_service = Arc::new(yap::domain::tts::TtsService::new(
        tts_repo,
        config.elevenlabs_api_key.clone(),
    ));

    // 4. Controllers
    let speak_controller = SpeakController::new(
        tts_service,
        resolver,
        yap::domain::player::PlaybackEngine::new(),
    );

    let command = SpeakCommand {
        words: args.text,
        model: args.model.unwrap_or(config.default_model),
        voice_id: args.voice.unwrap_or(config.default_voice_id),
        player: args.player.or(config.default_player),
        api_key: args.key,
    };

    let report = speak_controller.speak(command).await?;

    if args.verbose {
        println!("{}", report.render());
    }

    Ok(())
}

fn init_logging(config: &Config, debug: bool) {
    let default_filter = if debug { "yap=debug" } else { "yap=off" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    // stdout is reserved for the report
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }
}
