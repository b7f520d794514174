use std::time::Duration;

use anyhow::{Context, Result};
use opentelemetry::global;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_otlp::{SpanExporterBuilder, TonicExporterBuilder, WithExportConfig};
use opentelemetry_sdk::propagation::TraceContextPropagator;
use opentelemetry_sdk::trace::{Config, TracerProvider};
use opentelemetry_sdk::{runtime, Resource};
use opentelemetry_semantic_conventions::resource::{SERVICE_NAME, SERVICE_VERSION};
use tracing_opentelemetry::{MetricsLayer, OpenTelemetryLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Registry;

/// Installs the global subscriber. Spans and metrics are exported over OTLP
/// only when a collector endpoint is configured.
pub fn init_telemetry(endpoint: &Option<String>, console: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or(EnvFilter::new("INFO"));

    let Some(endpoint) = endpoint else {
        Registry::default()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()?;
        return Ok(());
    };

    let service_resource = Resource::new(vec![
        KeyValue::new(SERVICE_NAME, env!("CARGO_PKG_NAME")),
        KeyValue::new(SERVICE_VERSION, env!("CARGO_PKG_VERSION")),
    ]);

    let span_exporter = SpanExporterBuilder::from(build_tonic_exporter(endpoint))
        .build_span_exporter()
        .context("Failed to build span exporter")?;
    let tracer_provider = TracerProvider::builder()
        .with_batch_exporter(span_exporter, runtime::Tokio)
        .with_config(Config::default().with_resource(service_resource.clone()))
        .build();
    let tracer = tracer_provider.tracer(env!("CARGO_PKG_NAME"));
    global::set_tracer_provider(tracer_provider);

    let meter = opentelemetry_otlp::new_pipeline()
        .metrics(runtime::Tokio)
        .with_exporter(build_tonic_exporter(endpoint))
        .with_resource(service_resource)
        .build()
        .context("Failed to install meter")?;

    global::set_text_map_propagator(TraceContextPropagator::new());
    let registry = Registry::default()
        .with(filter)
        .with(OpenTelemetryLayer::new(tracer))
        .with(MetricsLayer::new(meter));

    if console {
        registry.with(tracing_subscriber::fmt::layer()).try_init()?;
    } else {
        registry.try_init()?;
    }
    Ok(())
}

/// Flushes pending spans before exit.
pub fn shutdown_telemetry() {
    global::shutdown_tracer_provider();
}

fn build_tonic_exporter(endpoint: &str) -> TonicExporterBuilder {
    opentelemetry_otlp::new_exporter()
        .tonic()
        .with_timeout(Duration::from_secs(15))
        .with_endpoint(endpoint)
}
