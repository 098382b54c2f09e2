use std::error::Error;

use http::HeaderMap;
use opentelemetry::global;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_http::HeaderInjector;
use opentelemetry_otlp::SpanExporter;
use opentelemetry_sdk::trace::SdkTracerProvider;
use opentelemetry_sdk::{Resource, propagation::TraceContextPropagator};
use tracing_opentelemetry::OpenTelemetrySpanExt as _;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

/// Environment variable that switches on span export.
pub const OTLP_ENDPOINT: &str = "OTEL_EXPORTER_OTLP_ENDPOINT";

/// Initializes logging and, when an OTLP endpoint is configured, OpenTelemetry tracing.
///
/// Events are always written to stdout, filtered by `RUST_LOG` (default `info`).
/// If `OTEL_EXPORTER_OTLP_ENDPOINT` is set, spans are additionally exported to
/// backends like Jaeger and the returned provider must be shut down on exit.
pub fn init_tracer(
    service_name: &'static str,
) -> Result<Option<SdkTracerProvider>, Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt = tracing_subscriber::fmt::layer().with_target(false);

    let tracer_provider = if std::env::var_os(OTLP_ENDPOINT).is_some() {
        let span_exporter = SpanExporter::builder().with_tonic().build()?;
        let tracer_provider = SdkTracerProvider::builder()
            .with_resource(Resource::builder().with_service_name(service_name).build())
            .with_batch_exporter(span_exporter)
            .build();

        global::set_text_map_propagator(TraceContextPropagator::new());
        global::set_tracer_provider(tracer_provider.clone());
        Some(tracer_provider)
    } else {
        None
    };

    let telemetry = tracer_provider.as_ref().map(|provider| {
        let tracer = provider.tracer(service_name);
        tracing_opentelemetry::layer().with_tracer(tracer)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt)
        .with(telemetry)
        .try_init()?;

    Ok(tracer_provider)
}

/// Injects the current trace context into the headers of an outgoing request.
///
/// Without an installed propagator, or outside of a sampled span, the headers
/// are left untouched.
pub fn inject_trace_context(headers: &mut HeaderMap) {
    global::get_text_map_propagator(|propagator| {
        let context = ::tracing::Span::current().context();
        propagator.inject_context(&context, &mut HeaderInjector(headers));
    });
}
