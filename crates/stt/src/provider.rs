pub(crate) mod elevenlabs;

use async_trait::async_trait;

use crate::types::ProviderRequest;

/// A remote speech-to-text API
#[async_trait]
pub trait SttProvider: Send + Sync {
    /// Transcribe the audio, returning the provider's JSON result untouched
    async fn transcribe(&self, request: ProviderRequest) -> crate::error::Result<serde_json::Value>;

    /// Get the provider name
    fn name(&self) -> &str;
}
