use std::path::PathBuf;

use scribe_config::{SttConfig, TranscriptionDefaults};
use scribe_telemetry::metrics::TranscriptionMetrics;

use crate::{
    error::SttError,
    http_client::http_client,
    provider::{SttProvider, elevenlabs::ElevenLabsProvider},
    staging,
    types::{AudioUpload, ProviderRequest, TranscriptionResponse},
};

/// Request-handling state shared by every transcription request
///
/// Built once at startup and read-only afterwards.
pub struct Server {
    provider: Box<dyn SttProvider>,
    defaults: TranscriptionDefaults,
    staging_dir: Option<PathBuf>,
    max_upload_bytes: usize,
    metrics: TranscriptionMetrics,
}

impl Server {
    /// Stage the upload, call the provider, and wrap its result
    ///
    /// The staged file is removed before this returns, whatever the outcome.
    pub(crate) async fn transcribe(&self, upload: AudioUpload) -> crate::error::Result<TranscriptionResponse> {
        let AudioUpload {
            audio,
            filename,
            content_type,
            form,
        } = upload;

        let params = form.resolve(&self.defaults);

        tracing::debug!(
            "Transcribing {filename} via {} with model_id={}",
            self.provider.name(),
            params.model_id
        );

        let (staged, audio) = staging::stage(self.staging_dir.clone(), audio).await?;

        let result = self
            .provider
            .transcribe(ProviderRequest {
                audio,
                filename,
                content_type,
                params,
            })
            .await;

        staged.remove();

        Ok(TranscriptionResponse::new(result?))
    }

    /// Largest request body the upload route accepts
    pub const fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes
    }

    pub(crate) const fn metrics(&self) -> &TranscriptionMetrics {
        &self.metrics
    }
}

/// Builder for constructing the transcription server from configuration
pub struct SttServerBuilder<'a> {
    config: &'a SttConfig,
    provider: Option<Box<dyn SttProvider>>,
}

impl<'a> SttServerBuilder<'a> {
    pub const fn new(config: &'a SttConfig) -> Self {
        Self { config, provider: None }
    }

    /// Use `provider` instead of the `ElevenLabs` client
    #[must_use]
    pub fn provider(mut self, provider: Box<dyn SttProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn build(self) -> crate::error::Result<Server> {
        let provider = match self.provider {
            Some(provider) => provider,
            None => {
                let client = http_client()
                    .map_err(|e| SttError::InternalError(format!("Failed to build HTTP client: {e}")))?;

                Box::new(ElevenLabsProvider::new(
                    client,
                    self.config.api_key.clone(),
                    self.config.base_url.as_ref(),
                ))
            }
        };

        tracing::debug!("STT server initialized with provider {}", provider.name());

        Ok(Server {
            provider,
            defaults: self.config.defaults.clone(),
            staging_dir: self.config.staging_dir.clone(),
            max_upload_bytes: self.config.max_upload_bytes,
            metrics: TranscriptionMetrics::new(),
        })
    }
}
