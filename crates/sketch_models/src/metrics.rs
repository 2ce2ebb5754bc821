//! Metrics for model API calls.
//!
//! Provides OpenTelemetry-based counters and latency histograms for the
//! description and image-generation calls.

use opentelemetry::{
    KeyValue, global,
    metrics::{Counter, Histogram, Meter},
};
use sketch_error::{SketchError, SketchErrorKind, SynthesisErrorKind, VisionErrorKind};
use std::sync::OnceLock;

static METRICS: OnceLock<ModelMetrics> = OnceLock::new();

/// Metrics for model API interactions, labelled by provider and model.
#[derive(Clone)]
pub struct ModelMetrics {
    /// Meter handle kept alive for metric instruments
    _meter: Meter,
    /// Successful model API requests
    pub requests: Counter<u64>,
    /// Failed model API requests
    pub errors: Counter<u64>,
    /// Model API call duration in seconds
    pub duration: Histogram<f64>,
}

impl ModelMetrics {
    fn init() -> Self {
        let meter = global::meter("sketch_realizer");

        Self {
            _meter: meter.clone(),
            requests: meter
                .u64_counter("model.requests")
                .with_description("Successful model API requests")
                .build(),
            errors: meter
                .u64_counter("model.errors")
                .with_description("Failed model API requests")
                .build(),
            duration: meter
                .f64_histogram("model.duration")
                .with_unit("seconds")
                .with_description("Model API call duration")
                .build(),
        }
    }

    /// Get the global model metrics instance.
    pub fn get() -> &'static Self {
        METRICS.get_or_init(Self::init)
    }

    /// Record a successful model API request.
    pub fn record_request(&self, provider: &str, model: &str, duration_secs: f64) {
        let labels = &[
            KeyValue::new("provider", provider.to_string()),
            KeyValue::new("model", model.to_string()),
        ];
        self.requests.add(1, labels);
        self.duration.record(duration_secs, labels);
    }

    /// Record a failed model API request.
    pub fn record_error(&self, provider: &str, model: &str, error_type: &str) {
        let labels = &[
            KeyValue::new("provider", provider.to_string()),
            KeyValue::new("model", model.to_string()),
            KeyValue::new("error_type", error_type.to_string()),
        ];
        self.errors.add(1, labels);
    }
}

/// Classify an error for metrics labeling.
///
/// Returns one of: "rate_limit", "auth", "timeout", "invalid_request",
/// "server", "network", "invalid_response", "missing_url", "image",
/// "config", "unknown".
pub fn classify_error(error: &SketchError) -> &'static str {
    match error.kind() {
        SketchErrorKind::Vision(e) => match &e.kind {
            VisionErrorKind::Transport(_) => "network",
            VisionErrorKind::Status { status, .. } => classify_status(*status),
            VisionErrorKind::MissingField(_) | VisionErrorKind::Parse(_) => "invalid_response",
        },
        SketchErrorKind::Synthesis(e) => match &e.kind {
            SynthesisErrorKind::Transport(_) => "network",
            SynthesisErrorKind::Status { status, .. } => classify_status(*status),
            SynthesisErrorKind::Parse(_) => "invalid_response",
            SynthesisErrorKind::MissingUrl => "missing_url",
        },
        SketchErrorKind::Builder(_) => "invalid_request",
        SketchErrorKind::Image(_) => "image",
        SketchErrorKind::Config(_) => "config",
        SketchErrorKind::Server(_) => "unknown",
    }
}

fn classify_status(status: u16) -> &'static str {
    match status {
        429 => "rate_limit",
        401 | 403 => "auth",
        408 | 504 => "timeout",
        400..=499 => "invalid_request",
        _ => "server",
    }
}
