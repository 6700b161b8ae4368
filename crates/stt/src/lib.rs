#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

mod error;
mod http_client;
mod provider;
mod request;
mod server;
mod staging;
mod types;

use std::{sync::Arc, time::Instant};

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, State},
    routing::post,
};
use scribe_telemetry::metrics::Outcome;

pub use error::{Result, SttError};
pub use provider::SttProvider;
pub use server::{Server, SttServerBuilder};
pub use types::{AudioUpload, ProviderRequest, TranscriptionForm, TranscriptionParams, TranscriptionResponse, parse_flag};
pub use scribe_config::TRANSCRIPTION_PATH;
use request::ExtractUpload;

/// Build the transcription server from configuration
///
/// # Errors
///
/// Returns an error if the server fails to initialize
pub fn build_server(config: &scribe_config::Config) -> anyhow::Result<Arc<Server>> {
    let server = Arc::new(
        SttServerBuilder::new(&config.stt)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to initialize STT server: {e}"))?,
    );
    Ok(server)
}

/// Create the endpoint router for transcription
///
/// The body limit comes from `server`, so the router must be given the same
/// state it was built from.
pub fn endpoint_router(server: &Server) -> Router<Arc<Server>> {
    Router::new().route(
        TRANSCRIPTION_PATH,
        post(transcribe).layer(DefaultBodyLimit::max(server.max_upload_bytes())),
    )
}

/// Handle transcription requests
async fn transcribe(
    State(server): State<Arc<Server>>,
    upload: std::result::Result<ExtractUpload, SttError>,
) -> Result<Json<TranscriptionResponse>> {
    let start = Instant::now();

    let result = match upload {
        Ok(ExtractUpload(upload)) => {
            tracing::debug!(
                "STT transcription handler called for {} ({} bytes)",
                upload.filename,
                upload.audio.len()
            );
            server.transcribe(upload).await
        }
        Err(rejection) => Err(rejection),
    };

    match result {
        Ok(response) => {
            server.metrics().record(start, Outcome::Success);
            tracing::debug!("Transcription complete");
            Ok(Json(response))
        }
        Err(e) => {
            server.metrics().record(start, Outcome::Error);
            Err(e)
        }
    }
}
