use std::path::PathBuf;

use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Environment variable consulted when no API key is configured
pub const API_KEY_ENV: &str = "ELEVENLABS_API_KEY";

/// Route served by the transcription endpoint
pub const TRANSCRIPTION_PATH: &str = "/api/speech-to-text";

/// Default cap on the size of an upload request body (32 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 32 << 20;

/// Speech-to-text relay configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SttConfig {
    /// `ElevenLabs` API key
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override for the provider API
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Maximum accepted request body size in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
    /// Directory for staged uploads, the system temp dir when unset
    #[serde(default)]
    pub staging_dir: Option<PathBuf>,
    /// Values used for form fields the client leaves out
    #[serde(default)]
    pub defaults: TranscriptionDefaults,
}

impl Default for SttConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            staging_dir: None,
            defaults: TranscriptionDefaults::default(),
        }
    }
}

/// Fallbacks for the optional transcription form fields
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TranscriptionDefaults {
    #[serde(default = "default_model_id")]
    pub model_id: String,
    #[serde(default = "default_language_code")]
    pub language_code: String,
    #[serde(default = "default_true")]
    pub tag_audio_events: bool,
    #[serde(default = "default_true")]
    pub diarize: bool,
}

impl Default for TranscriptionDefaults {
    fn default() -> Self {
        Self {
            model_id: default_model_id(),
            language_code: default_language_code(),
            tag_audio_events: true,
            diarize: true,
        }
    }
}

#[allow(clippy::missing_const_for_fn)]
fn default_max_upload_bytes() -> usize {
    DEFAULT_MAX_UPLOAD_BYTES
}

fn default_model_id() -> String {
    "scribe_v1".to_string()
}

fn default_language_code() -> String {
    "eng".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_true() -> bool {
    true
}
