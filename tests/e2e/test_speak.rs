use crate::e2e::helpers;

use helpers::{speak_command, TestContext, AUDIO_CHUNKS, CONFIGURED_KEY, REJECTED_KEY};
use pretty_assertions::assert_eq;
use serde_json::json;
use yap::domain::player::PlayerError;
use yap::domain::tts::TtsServiceError;
use yap::error::AppError;

fn all_audio() -> Vec<u8> {
    AUDIO_CHUNKS.concat()
}

#[tokio::test]
async fn it_should_stream_provider_audio_into_the_player() {
    let ctx = TestContext::new().await.unwrap();
    ctx.install_recording_player("mpv").unwrap();

    let report = ctx
        .speak_controller(Some(CONFIGURED_KEY))
        .speak(speak_command("nah it's GGs"))
        .await
        .unwrap();

    assert_eq!(ctx.played_bytes(), Some(all_audio()));
    assert_eq!(report.player, "mpv");
    assert_eq!(report.bytes, all_audio().len() as u64);
    assert_eq!(report.cost, "120 credits");
    assert_eq!(report.text_length, 12);
    assert_eq!(report.voice, "pNInz6obpgDQGcFmaJgB");
    assert!(report.latency.ends_with("ms"));

    let requests = ctx.provider.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].voice_id, "pNInz6obpgDQGcFmaJgB");
    assert_eq!(requests[0].query.as_deref(), Some("optimize_streaming_latency=1"));
    assert_eq!(requests[0].api_key.as_deref(), Some(CONFIGURED_KEY));
    assert_eq!(requests[0].accept.as_deref(), Some("audio/mpeg"));
    assert_eq!(
        requests[0].body,
        json!({ "text": "nah it's GGs", "model_id": "eleven_turbo_v2_5" })
    );
}

#[tokio::test]
async fn it_should_fall_back_to_the_next_installed_player() {
    let ctx = TestContext::new().await.unwrap();
    ctx.install_recording_player("mplayer").unwrap();

    let report = ctx
        .speak_controller(Some(CONFIGURED_KEY))
        .speak(speak_command("hello"))
        .await
        .unwrap();

    assert_eq!(report.player, "mplayer");
    assert_eq!(ctx.played_bytes(), Some(all_audio()));
}

#[tokio::test]
async fn it_should_skip_latency_optimization_for_eleven_v3() {
    let ctx = TestContext::new().await.unwrap();
    ctx.install_recording_player("mpv").unwrap();

    let mut command = speak_command("expressive");
    command.model = "eleven_v3".to_string();
    command.voice_id = "JBFqnCBsd6RMkjVDRZzb".to_string();

    let report = ctx
        .speak_controller(Some(CONFIGURED_KEY))
        .speak(command)
        .await
        .unwrap();

    assert_eq!(report.model, "eleven_v3 (expressive)");

    let requests = ctx.provider.requests();
    assert_eq!(requests[0].voice_id, "JBFqnCBsd6RMkjVDRZzb");
    assert_eq!(requests[0].query, None);
    assert_eq!(requests[0].body["model_id"], "eleven_v3");
}

#[tokio::test]
async fn it_should_prefer_the_command_line_key() {
    let ctx = TestContext::new().await.unwrap();
    ctx.install_recording_player("mpv").unwrap();

    let mut command = speak_command("hello");
    command.api_key = Some("cli-key".to_string());

    ctx.speak_controller(Some(CONFIGURED_KEY))
        .speak(command)
        .await
        .unwrap();

    assert_eq!(ctx.provider.requests()[0].api_key.as_deref(), Some("cli-key"));
}

#[tokio::test]
async fn it_should_surface_provider_rejections() {
    let ctx = TestContext::new().await.unwrap();
    ctx.install_recording_player("mpv").unwrap();

    let mut command = speak_command("hello");
    command.api_key = Some(REJECTED_KEY.to_string());

    let err = ctx
        .speak_controller(None)
        .speak(command)
        .await
        .unwrap_err();

    match &err {
        AppError::Tts(TtsServiceError::Provider { status, message }) => {
            assert_eq!(*status, 401);
            assert!(message.contains("invalid_api_key"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(err.exit_code(), 1);
    assert_eq!(ctx.played_bytes(), None);
}

#[tokio::test]
async fn it_should_require_an_api_key() {
    let ctx = TestContext::new().await.unwrap();
    ctx.install_recording_player("mpv").unwrap();

    let err = ctx
        .speak_controller(None)
        .speak(speak_command("hello"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Tts(TtsServiceError::MissingApiKey)));
    assert_eq!(err.exit_code(), 2);
    assert!(ctx.provider.requests().is_empty());
}

#[tokio::test]
async fn it_should_not_call_the_provider_without_a_player() {
    let ctx = TestContext::new().await.unwrap();

    let err = ctx
        .speak_controller(Some(CONFIGURED_KEY))
        .speak(speak_command("hello"))
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "No supported audio player found. Install mpv, ffplay, cvlc, mplayer, or mpg123."
    );
    assert!(ctx.provider.requests().is_empty());
}

#[tokio::test]
async fn it_should_reject_a_requested_player_that_is_missing() {
    let ctx = TestContext::new().await.unwrap();
    ctx.install_recording_player("mpv").unwrap();

    let mut command = speak_command("hello");
    command.player = Some("cvlc".to_string());

    let err = ctx
        .speak_controller(Some(CONFIGURED_KEY))
        .speak(command)
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Player cvlc is not installed. Run --players to inspect availability."
    );
    assert!(ctx.provider.requests().is_empty());
}

#[tokio::test]
async fn it_should_report_a_failing_player() {
    let ctx = TestContext::new().await.unwrap();
    ctx.install_player("ffplay", "cat > /dev/null\nexit 3").unwrap();

    let err = ctx
        .speak_controller(Some(CONFIGURED_KEY))
        .speak(speak_command("hello"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::Player(PlayerError::PlayerExitedNonZero { code: Some(3), .. })
    ));
    assert_eq!(err.to_string(), "ffplay exited with code 3");
}
