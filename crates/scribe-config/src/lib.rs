#![allow(clippy::must_use_candidate)]

mod env;
pub mod health;
mod loader;
pub mod server;
pub mod stt;
pub mod telemetry;

use serde::Deserialize;

pub use health::*;
pub use server::*;
pub use stt::*;
pub use telemetry::{LogFormat, TelemetryConfig};

/// Top-level relay configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Speech-to-text provider configuration
    #[serde(default)]
    pub stt: SttConfig,
    /// Telemetry configuration
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}
