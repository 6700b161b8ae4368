//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;
use std::path::Path;

use scribe_config::{Config, HealthConfig, ServerConfig, SttConfig, TranscriptionDefaults};
use secrecy::SecretString;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults and no API key
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig::default(),
                },
                stt: SttConfig::default(),
                telemetry: None,
            },
        }
    }

    /// Point the relay at a mock provider with a test API key
    pub fn with_provider(mut self, base_url: &str) -> Self {
        self.config.stt.api_key = Some(SecretString::from("test-key"));
        self.config.stt.base_url = Some(base_url.parse().expect("valid URL"));
        self
    }

    /// Point the relay at a provider URL but leave the API key unset
    pub fn with_provider_without_key(mut self, base_url: &str) -> Self {
        self.config.stt.base_url = Some(base_url.parse().expect("valid URL"));
        self
    }

    /// Stage uploads in `dir`
    pub fn with_staging_dir(mut self, dir: &Path) -> Self {
        self.config.stt.staging_dir = Some(dir.to_path_buf());
        self
    }

    /// Cap the upload body size
    pub fn with_max_upload_bytes(mut self, limit: usize) -> Self {
        self.config.stt.max_upload_bytes = limit;
        self
    }

    /// Replace the form field defaults
    pub fn with_defaults(mut self, defaults: TranscriptionDefaults) -> Self {
        self.config.stt.defaults = defaults;
        self
    }

    /// Serve the health endpoint on another path
    pub fn with_health_path(mut self, path: &str) -> Self {
        self.config.server.health.path = path.to_owned();
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
