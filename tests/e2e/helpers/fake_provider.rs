use anyhow::Result;
use axum::{
    body::Body,
    extract::{Path, RawQuery, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use bytes::Bytes;
use futures::stream;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub const REJECTED_KEY: &str = "rejected-key";

pub const AUDIO_CHUNKS: [&[u8]; 3] = [b"ID3\x04\x00", b"frame-one;", b"frame-two;"];

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub voice_id: String,
    pub query: Option<String>,
    pub api_key: Option<String>,
    pub accept: Option<String>,
    pub body: Value,
}

type Recorded = Arc<Mutex<Vec<RecordedRequest>>>;

/// In-process stand-in for the ElevenLabs streaming endpoint
pub struct FakeProvider {
    pub base_url: String,
    recorded: Recorded,
}

impl FakeProvider {
    pub async fn start() -> Result<Self> {
        let recorded: Recorded = Arc::default();

        let app = Router::new()
            .route("/v1/text-to-speech/:voice_id/stream", post(stream_speech))
            .with_state(recorded.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self {
            base_url: format!("http://{}", addr),
            recorded,
        })
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.recorded.lock().unwrap().clone()
    }
}

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

async fn stream_speech(
    State(recorded): State<Recorded>,
    Path(voice_id): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let api_key = header(&headers, "xi-api-key");
    recorded.lock().unwrap().push(RecordedRequest {
        voice_id,
        query,
        api_key: api_key.clone(),
        accept: header(&headers, "accept"),
        body,
    });

    if api_key.as_deref() == Some(REJECTED_KEY) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "detail": { "status": "invalid_api_key" } })),
        )
            .into_response();
    }

    let chunks = AUDIO_CHUNKS
        .into_iter()
        .map(|chunk| Ok::<_, std::io::Error>(Bytes::from_static(chunk)));

    Response::builder()
        .status(StatusCode::OK)
        .header("content-type", "audio/mpeg")
        .header("character-cost", "120")
        .body(Body::from_stream(stream::iter(chunks)))
        .unwrap()
}
