use scribe_config::TranscriptionDefaults;
use serde::{Deserialize, Serialize};

/// An audio upload pulled out of the multipart form
#[derive(Debug)]
pub struct AudioUpload {
    /// Raw audio data
    pub audio: Vec<u8>,
    /// Filename supplied by the client
    pub filename: String,
    /// Content type of the `file` part, if the client sent one
    pub content_type: Option<String>,
    /// Optional form fields as received
    pub form: TranscriptionForm,
}

/// Optional form fields, unparsed
#[derive(Debug, Default)]
pub struct TranscriptionForm {
    pub model_id: Option<String>,
    pub tag_audio_events: Option<String>,
    pub language_code: Option<String>,
    pub diarize: Option<String>,
}

impl TranscriptionForm {
    /// Resolve every field, falling back to `defaults` for absent ones
    pub fn resolve(self, defaults: &TranscriptionDefaults) -> TranscriptionParams {
        TranscriptionParams {
            model_id: self.model_id.unwrap_or_else(|| defaults.model_id.clone()),
            tag_audio_events: parse_flag(self.tag_audio_events.as_deref(), defaults.tag_audio_events),
            language_code: self.language_code.unwrap_or_else(|| defaults.language_code.clone()),
            diarize: parse_flag(self.diarize.as_deref(), defaults.diarize),
        }
    }
}

/// Interpret a boolean form field
///
/// Only `"false"` (any case) turns a flag off; every other supplied
/// string turns it on.
pub fn parse_flag(value: Option<&str>, default: bool) -> bool {
    value.map_or(default, |value| !value.eq_ignore_ascii_case("false"))
}

/// Parameters forwarded to the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionParams {
    /// Provider model identifier (e.g. "`scribe_v1`")
    pub model_id: String,
    /// Annotate non-speech sounds such as laughter
    pub tag_audio_events: bool,
    /// Language hint (ISO 639-3, e.g. "eng")
    pub language_code: String,
    /// Label speakers in the transcript
    pub diarize: bool,
}

/// Request handed to a provider once the upload is staged
#[derive(Debug)]
pub struct ProviderRequest {
    pub audio: Vec<u8>,
    pub filename: String,
    pub content_type: Option<String>,
    pub params: TranscriptionParams,
}

/// Successful relay response
#[derive(Debug, Serialize, Deserialize)]
pub struct TranscriptionResponse {
    /// Provider result, passed through verbatim
    pub transcription: serde_json::Value,
    pub success: bool,
}

impl TranscriptionResponse {
    pub fn new(transcription: serde_json::Value) -> Self {
        Self {
            transcription,
            success: true,
        }
    }
}
