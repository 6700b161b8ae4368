use async_trait::async_trait;
use reqwest::{
    Client,
    multipart::{Form, Part},
};
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::{error::SttError, types::ProviderRequest};

use super::SttProvider;

const DEFAULT_ELEVENLABS_API_URL: &str = "https://api.elevenlabs.io/v1";

/// `ElevenLabs` speech-to-text provider
pub struct ElevenLabsProvider {
    client: Client,
    base_url: String,
    api_key: Option<SecretString>,
}

impl ElevenLabsProvider {
    pub fn new(client: Client, api_key: Option<SecretString>, base_url: Option<&Url>) -> Self {
        let base_url = base_url.map_or_else(
            || DEFAULT_ELEVENLABS_API_URL.to_string(),
            |url| url.as_str().trim_end_matches('/').to_string(),
        );

        Self {
            client,
            base_url,
            api_key,
        }
    }

    fn form(request: ProviderRequest) -> crate::error::Result<Form> {
        let mut file = Part::bytes(request.audio).file_name(request.filename);

        if let Some(content_type) = request.content_type {
            file = file
                .mime_str(&content_type)
                .map_err(|e| SttError::InternalError(format!("Invalid content type: {e}")))?;
        }

        let params = request.params;

        Ok(Form::new()
            .part("file", file)
            .text("model_id", params.model_id)
            .text("tag_audio_events", params.tag_audio_events.to_string())
            .text("language_code", params.language_code)
            .text("diarize", params.diarize.to_string()))
    }
}

#[async_trait]
impl SttProvider for ElevenLabsProvider {
    async fn transcribe(&self, request: ProviderRequest) -> crate::error::Result<serde_json::Value> {
        let api_key = self.api_key.as_ref().ok_or(SttError::MissingApiKey)?;
        let url = format!("{}/speech-to-text", self.base_url);

        tracing::debug!(
            "ElevenLabs transcription request: {} bytes, model_id={}, language_code={}, tag_audio_events={}, diarize={}",
            request.audio.len(),
            request.params.model_id,
            request.params.language_code,
            request.params.tag_audio_events,
            request.params.diarize,
        );

        let form = Self::form(request)?;

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", api_key.expose_secret())
            .header(reqwest::header::ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("ElevenLabs request failed: {e}");
                SttError::ConnectionError(format!("Failed to send request to ElevenLabs: {e}"))
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!("ElevenLabs API error ({status}): {error_text}");

            return Err(SttError::ProviderApiError {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let transcription: serde_json::Value = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse ElevenLabs response: {e}");
            SttError::InternalError(format!("Failed to parse ElevenLabs response: {e}"))
        })?;

        tracing::debug!("ElevenLabs transcription complete");

        Ok(transcription)
    }

    fn name(&self) -> &str {
        "elevenlabs"
    }
}
