//! Tracing setup.
//!
//! Logs go to stdout through the fmt layer, filtered by `RUST_LOG`. With the
//! `otel` feature, spans are also exported over OTLP/gRPC.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(feature = "otel")]
use opentelemetry_sdk::trace as sdktrace;

const DEFAULT_FILTER: &str = "info,cotacao_app=debug,cotacao_hex=debug";

/// Flushes exported spans on drop.
pub struct TelemetryGuard {
    #[cfg(feature = "otel")]
    provider: sdktrace::SdkTracerProvider,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        #[cfg(feature = "otel")]
        let _ = self.provider.shutdown();
    }
}

#[cfg(feature = "otel")]
fn init_tracer() -> anyhow::Result<(sdktrace::Tracer, sdktrace::SdkTracerProvider)> {
    use opentelemetry::global;
    use opentelemetry::trace::TracerProvider as _;
    use opentelemetry_sdk::propagation::TraceContextPropagator;

    global::set_text_map_propagator(TraceContextPropagator::new());

    // Use gRPC exporter with batch processing (non-blocking)
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .build()
        .map_err(|e| anyhow::anyhow!("failed to create OTLP span exporter: {}", e))?;

    let provider = sdktrace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .build();

    global::set_tracer_provider(provider.clone());

    Ok((provider.tracer("cotacao-server"), provider))
}

/// Installs the global subscriber.
pub fn init() -> anyhow::Result<TelemetryGuard> {
    let registry = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer());

    #[cfg(feature = "otel")]
    let guard = {
        let (otel_tracer, provider) = init_tracer()?;
        registry
            .with(tracing_opentelemetry::layer().with_tracer(otel_tracer))
            .init();
        TelemetryGuard { provider }
    };

    #[cfg(not(feature = "otel"))]
    let guard = {
        registry.init();
        TelemetryGuard {}
    };

    Ok(guard)
}
