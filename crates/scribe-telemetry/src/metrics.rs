//! Metric names and the transcription instruments

use std::time::Instant;

use opentelemetry::{
    KeyValue, global,
    metrics::{Counter, Histogram},
};

pub const STT_REQUEST_DURATION: &str = "stt.request.duration";
pub const STT_REQUEST_COUNT: &str = "stt.request.count";

/// Outcome attribute attached to every transcription measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Error,
}

impl Outcome {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Instruments recorded once per transcription request
///
/// Created from the global meter provider, so they are no-ops unless
/// a metrics exporter was installed by [`crate::init`] beforehand.
#[derive(Clone)]
pub struct TranscriptionMetrics {
    requests: Counter<u64>,
    duration: Histogram<f64>,
}

impl TranscriptionMetrics {
    #[must_use]
    pub fn new() -> Self {
        let meter = global::meter("scribe");

        Self {
            requests: meter
                .u64_counter(STT_REQUEST_COUNT)
                .with_description("Transcription requests handled")
                .build(),
            duration: meter
                .f64_histogram(STT_REQUEST_DURATION)
                .with_description("Transcription request duration")
                .with_unit("s")
                .build(),
        }
    }

    /// Record one finished request that started at `start`
    pub fn record(&self, start: Instant, outcome: Outcome) {
        let attributes = [KeyValue::new("outcome", outcome.as_str())];

        self.requests.add(1, &attributes);
        self.duration.record(start.elapsed().as_secs_f64(), &attributes);
    }
}

impl Default for TranscriptionMetrics {
    fn default() -> Self {
        Self::new()
    }
}
