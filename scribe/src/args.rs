use std::path::PathBuf;

use clap::Parser;

/// Speech-to-text relay
#[derive(Debug, Parser)]
#[command(name = "scribe", about = "Relay audio uploads to the ElevenLabs speech-to-text API")]
pub struct Args {
    /// Path to configuration file; built-in defaults are used if it does not exist
    #[arg(short, long, default_value = "scribe.toml", env = "SCRIBE_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "SCRIBE_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,

    /// Log filter directives (e.g. `info` or `stt=debug,info`)
    #[arg(long, default_value = "info", env = "SCRIBE_LOG")]
    pub log: String,
}
