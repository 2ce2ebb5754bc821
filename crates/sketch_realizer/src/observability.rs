//! Logging, tracing and metrics setup.

use opentelemetry::{KeyValue, global, trace::TracerProvider};
use opentelemetry_sdk::{Resource, metrics::SdkMeterProvider, trace::SdkTracerProvider};
use opentelemetry_stdout::{MetricExporter, SpanExporter};
use std::env;
use std::sync::OnceLock;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

static PROVIDERS: OnceLock<Providers> = OnceLock::new();

struct Providers {
    tracer: Option<SdkTracerProvider>,
    meter: Option<SdkMeterProvider>,
}

/// Configuration for logging and OpenTelemetry export.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Service name for telemetry attribution
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Log level filter (e.g., "info", "debug"), used when `RUST_LOG` is unset
    pub log_level: String,
    /// Enable JSON-formatted logs for structured logging
    pub json_logs: bool,
    /// Export spans to stdout
    pub export_spans: bool,
    /// Export request metrics to stdout
    pub export_metrics: bool,
}

impl ObservabilityConfig {
    /// Create a new configuration with the given service name.
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            json_logs: false,
            export_spans: false,
            export_metrics: false,
        }
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Enable JSON-formatted logs.
    pub fn with_json_logs(mut self, enabled: bool) -> Self {
        self.json_logs = enabled;
        self
    }

    /// Enable the stdout span exporter.
    pub fn with_span_export(mut self, enabled: bool) -> Self {
        self.export_spans = enabled;
        self
    }

    /// Enable the stdout metric exporter.
    pub fn with_metrics_export(mut self, enabled: bool) -> Self {
        self.export_metrics = enabled;
        self
    }
}

/// Initialize logging and, when enabled, OpenTelemetry export.
///
/// This sets up:
/// - An `EnvFilter` honoring `RUST_LOG`
/// - A text or JSON fmt layer
/// - A tracing bridge to a stdout span exporter (optional)
/// - A global meter provider with a stdout metric exporter (optional)
pub fn init_observability_with_config(
    config: ObservabilityConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let resource = Resource::builder()
        .with_service_name(config.service_name.clone())
        .with_attributes(vec![KeyValue::new(
            "service.version",
            config.service_version.clone(),
        )])
        .build();

    let tracer_provider = config.export_spans.then(|| {
        SdkTracerProvider::builder()
            .with_simple_exporter(SpanExporter::default())
            .with_resource(resource.clone())
            .build()
    });

    let meter_provider = config.export_metrics.then(|| {
        SdkMeterProvider::builder()
            .with_periodic_exporter(MetricExporter::default())
            .with_resource(resource)
            .build()
    });

    if let Some(provider) = &tracer_provider {
        global::set_tracer_provider(provider.clone());
    }
    if let Some(provider) = &meter_provider {
        global::set_meter_provider(provider.clone());
    }

    let otel_layer = tracer_provider.as_ref().map(|provider| {
        tracing_opentelemetry::layer().with_tracer(provider.tracer(config.service_name.clone()))
    });

    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.log_level))?;

    let fmt_layer = if config.json_logs {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_level(true)
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_level(true)
            .with_writer(std::io::stderr)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .with(otel_layer)
        .try_init()?;

    let _ = PROVIDERS.set(Providers {
        tracer: tracer_provider,
        meter: meter_provider,
    });

    Ok(())
}

/// Flush and shut down any exporters started by initialization.
pub fn shutdown_observability() {
    let Some(providers) = PROVIDERS.get() else {
        return;
    };
    if let Some(tracer) = &providers.tracer {
        if let Err(e) = tracer.shutdown() {
            eprintln!("Failed to shut down tracer provider: {}", e);
        }
    }
    if let Some(meter) = &providers.meter {
        if let Err(e) = meter.shutdown() {
            eprintln!("Failed to shut down meter provider: {}", e);
        }
    }
}
