use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SttError>;

/// Transcription relay errors, each mapped to one HTTP status
#[derive(Debug, Error)]
pub enum SttError {
    /// The multipart body has no `file` part carrying a filename
    #[error("No file provided")]
    NoFileProvided,

    /// The `file` part has an empty filename
    #[error("No file selected")]
    NoFileSelected,

    /// The multipart body could not be parsed
    #[error("{0}")]
    InvalidRequest(String),

    /// The request body exceeds the configured upload limit
    #[error("Request body is too large, limit is {0} bytes")]
    PayloadTooLarge(usize),

    /// Writing or re-reading the staged upload failed
    #[error("Failed to stage upload: {0}")]
    Staging(#[from] std::io::Error),

    /// No provider API key was configured at startup
    #[error("ElevenLabs API key is not configured")]
    MissingApiKey,

    /// Network or connection error talking to the provider
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Provider API returned a non-success status
    #[error("Provider API error ({status}): {message}")]
    ProviderApiError { status: u16, message: String },

    /// Anything else that went wrong while handling the request
    #[error("{0}")]
    InternalError(String),
}

impl SttError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NoFileProvided | Self::NoFileSelected | Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Staging(_)
            | Self::MissingApiKey
            | Self::ConnectionError(_)
            | Self::ProviderApiError { .. }
            | Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error body returned for every failed request
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for SttError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Transcription failed: {self}");
        } else {
            tracing::debug!("Rejected transcription request: {self}");
        }

        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}
