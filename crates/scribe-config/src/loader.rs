use std::path::Path;

use secrecy::{ExposeSecret, SecretString};

use crate::{
    Config,
    stt::{API_KEY_ENV, TRANSCRIPTION_PATH},
};

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, deserializes,
    /// fills the API key from `ELEVENLABS_API_KEY` when the file leaves it
    /// out, then validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::parse(&raw)
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing, or validation fails
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let mut config: Self =
            toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.apply_env_fallbacks();
        config.validate()?;

        Ok(config)
    }

    /// Built-in defaults with the API key taken from the environment
    ///
    /// Used when no configuration file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();
        config.apply_env_fallbacks();
        config.validate()?;

        Ok(config)
    }

    /// Whether a usable provider API key is available
    pub fn has_api_key(&self) -> bool {
        self.stt.api_key.is_some()
    }

    fn apply_env_fallbacks(&mut self) {
        // An empty key (e.g. from `default("")`) counts as missing
        if self.stt.api_key.as_ref().is_some_and(|key| key.expose_secret().is_empty()) {
            self.stt.api_key = None;
        }

        if self.stt.api_key.is_none() {
            self.stt.api_key = std::env::var(API_KEY_ENV)
                .ok()
                .filter(|value| !value.is_empty())
                .map(SecretString::from);
        }
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the upload limit is zero or the health route
    /// is malformed or shadows the transcription route
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_stt_config()?;
        self.validate_health_config()?;
        Ok(())
    }

    fn validate_stt_config(&self) -> anyhow::Result<()> {
        if self.stt.max_upload_bytes == 0 {
            anyhow::bail!("stt.max_upload_bytes must be greater than 0");
        }

        if let Some(ref dir) = self.stt.staging_dir
            && dir.as_os_str().is_empty()
        {
            anyhow::bail!("stt.staging_dir must not be empty when set");
        }

        Ok(())
    }

    fn validate_health_config(&self) -> anyhow::Result<()> {
        let health = &self.server.health;

        if !health.enabled {
            return Ok(());
        }

        if !health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/': `{}`", health.path);
        }

        if health.path == TRANSCRIPTION_PATH {
            anyhow::bail!("server.health.path must not be the transcription route `{TRANSCRIPTION_PATH}`");
        }

        Ok(())
    }
}
