use std::sync::Arc;

use axum::{
    body::Body,
    extract::{FromRequest, Multipart, multipart::Field},
    http::{self, StatusCode},
};

use crate::{
    error::SttError,
    server::Server,
    types::{AudioUpload, TranscriptionForm},
};

/// Extractor for the multipart audio upload
///
/// Rejects with [`SttError`], so validation failures render as the same
/// `{"error": ...}` body as every other failure.
pub struct ExtractUpload(pub AudioUpload);

impl FromRequest<Arc<Server>> for ExtractUpload {
    type Rejection = SttError;

    async fn from_request(request: http::Request<Body>, state: &Arc<Server>) -> Result<Self, Self::Rejection> {
        // Without a multipart body there cannot be a file part
        if !is_multipart(request.headers()) {
            return Err(SttError::NoFileProvided);
        }

        let limit = state.max_upload_bytes();

        let mut multipart = Multipart::from_request(request, state)
            .await
            .map_err(|e| SttError::InvalidRequest(format!("Failed to parse multipart form: {e}")))?;

        let mut file: Option<(String, Option<String>, Vec<u8>)> = None;
        let mut form = TranscriptionForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| multipart_error(&e, limit, "Failed to parse multipart form"))?
        {
            let field_name = field.name().unwrap_or("").to_string();

            match field_name.as_str() {
                // A `file` part without a filename is a plain form value
                "file" if file.is_none() && field.file_name().is_some() => {
                    let filename = field.file_name().unwrap_or_default().to_string();
                    let content_type = field.content_type().map(str::to_string);
                    let audio = field
                        .bytes()
                        .await
                        .map_err(|e| multipart_error(&e, limit, "Failed to read audio data"))?;

                    file = Some((filename, content_type, audio.to_vec()));
                }
                "model_id" => set_once(&mut form.model_id, field, limit).await?,
                "tag_audio_events" => set_once(&mut form.tag_audio_events, field, limit).await?,
                "language_code" => set_once(&mut form.language_code, field, limit).await?,
                "diarize" => set_once(&mut form.diarize, field, limit).await?,
                _ => {
                    // Skip unknown fields
                }
            }
        }

        let (filename, content_type, audio) = file.ok_or(SttError::NoFileProvided)?;

        if filename.is_empty() {
            return Err(SttError::NoFileSelected);
        }

        Ok(Self(AudioUpload {
            audio,
            filename,
            content_type,
            form,
        }))
    }
}

fn is_multipart(headers: &http::HeaderMap) -> bool {
    headers
        .get(http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.to_ascii_lowercase().starts_with("multipart/form-data"))
}

/// Keep the first value of a repeated text field
async fn set_once(slot: &mut Option<String>, field: Field<'_>, limit: usize) -> Result<(), SttError> {
    let name = field.name().unwrap_or("").to_string();
    let value = field
        .text()
        .await
        .map_err(|e| multipart_error(&e, limit, &format!("Failed to read {name} field")))?;

    if slot.is_none() {
        *slot = Some(value);
    }

    Ok(())
}

fn multipart_error(err: &axum::extract::multipart::MultipartError, limit: usize, context: &str) -> SttError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        SttError::PayloadTooLarge(limit)
    } else {
        SttError::InvalidRequest(format!("{context}: {err}"))
    }
}
