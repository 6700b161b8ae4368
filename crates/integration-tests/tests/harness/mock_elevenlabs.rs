//! Mock `ElevenLabs` speech-to-text backend for integration tests
//!
//! Records every upload it receives and answers with a canned transcript or
//! a configured failure

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use tokio_util::sync::CancellationToken;

/// One request as seen by the mock provider
#[derive(Debug, Clone, Default)]
pub struct ReceivedUpload {
    pub api_key: Option<String>,
    pub file_name: Option<String>,
    pub file_content_type: Option<String>,
    pub file_bytes: Vec<u8>,
    pub fields: HashMap<String, String>,
}

/// Mock provider that returns predictable responses
pub struct MockElevenLabs {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

struct MockState {
    received: Mutex<Vec<ReceivedUpload>>,
    /// Status and body to fail with instead of transcribing
    failure: Option<(StatusCode, String)>,
}

impl MockElevenLabs {
    /// Start a mock that transcribes successfully
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(None).await
    }

    /// Start a mock that answers every request with `status` and `body`
    pub async fn start_failing(status: StatusCode, body: &str) -> anyhow::Result<Self> {
        Self::start_inner(Some((status, body.to_owned()))).await
    }

    async fn start_inner(failure: Option<(StatusCode, String)>) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            received: Mutex::new(Vec::new()),
            failure,
        });

        let app = Router::new()
            .route("/v1/speech-to-text", routing::post(handle_speech_to_text))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the mock as the provider
    ///
    /// Includes `/v1` since the provider appends `/speech-to-text`
    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// Uploads received so far
    pub fn received(&self) -> Vec<ReceivedUpload> {
        self.state.received.lock().expect("mock state lock").clone()
    }

    /// Number of uploads received
    pub fn request_count(&self) -> usize {
        self.state.received.lock().expect("mock state lock").len()
    }
}

impl Drop for MockElevenLabs {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// Canned transcript in the provider's response shape
pub fn canned_transcript() -> serde_json::Value {
    serde_json::json!({
        "language_code": "eng",
        "language_probability": 0.98,
        "text": "Hello from mock scribe",
        "words": [
            {"text": "Hello", "start": 0.0, "end": 0.4, "type": "word", "speaker_id": "speaker_0"},
            {"text": " ", "start": 0.4, "end": 0.45, "type": "spacing", "speaker_id": "speaker_0"},
            {"text": "(laughs)", "start": 0.45, "end": 1.1, "type": "audio_event", "speaker_id": "speaker_0"}
        ]
    })
}

async fn handle_speech_to_text(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Response {
    let mut upload = ReceivedUpload {
        api_key: headers
            .get("xi-api-key")
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned),
        ..ReceivedUpload::default()
    };

    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or("").to_owned();

        if name == "file" {
            upload.file_name = field.file_name().map(str::to_owned);
            upload.file_content_type = field.content_type().map(str::to_owned);
            upload.file_bytes = field.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
        } else {
            let value = field.text().await.unwrap_or_default();
            upload.fields.insert(name, value);
        }
    }

    state.received.lock().expect("mock state lock").push(upload);

    match &state.failure {
        Some((status, body)) => (*status, body.clone()).into_response(),
        None => Json(canned_transcript()).into_response(),
    }
}
