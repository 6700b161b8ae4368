pub mod exporters;
pub mod metrics;
pub mod tracing;

use std::collections::HashMap;

use serde::Deserialize;

use self::{exporters::ExporterConfig, metrics::MetricsConfig, tracing::TracingConfig};

/// Telemetry configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TelemetryConfig {
    /// Service name for telemetry metadata
    #[serde(default = "default_service_name")]
    pub service_name: String,
    /// Additional resource attributes
    #[serde(default)]
    pub resource_attributes: HashMap<String, String>,
    /// Console log output format
    #[serde(default)]
    pub log_format: LogFormat,
    /// Default exporter configuration (shared by tracing and metrics)
    #[serde(default)]
    pub exporter: Option<ExporterConfig>,
    /// Tracing-specific configuration
    #[serde(default)]
    pub tracing: Option<TracingConfig>,
    /// Metrics-specific configuration
    #[serde(default)]
    pub metrics: Option<MetricsConfig>,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            resource_attributes: HashMap::new(),
            log_format: LogFormat::default(),
            exporter: None,
            tracing: None,
            metrics: None,
        }
    }
}

impl TelemetryConfig {
    /// Whether any OTLP exporter is configured
    pub fn has_exporter(&self) -> bool {
        self.exporter.is_some()
            || self.tracing.as_ref().is_some_and(|t| t.exporter.is_some())
            || self.metrics.as_ref().is_some_and(|m| m.exporter.is_some())
    }
}

/// Console log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

fn default_service_name() -> String {
    "scribe-relay".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_exporter() {
        let config: TelemetryConfig = toml::from_str("").unwrap();
        assert_eq!(config.service_name, "scribe-relay");
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(!config.has_exporter());
    }

    #[test]
    fn tracing_exporter_counts_as_exporter() {
        let toml = r#"
            log_format = "json"

            [tracing]
            sampling_rate = 0.5

            [tracing.exporter]
            endpoint = "http://localhost:4317"
        "#;

        let config: TelemetryConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.log_format, LogFormat::Json);
        assert!(config.has_exporter());
        assert!((config.tracing.unwrap().sampling_rate - 0.5).abs() < f64::EPSILON);
    }
}
