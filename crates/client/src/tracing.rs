//! Subscriber setup and trace propagation.
//!
//! The CLI installs one global subscriber made of an `EnvFilter`, an
//! optional console formatter (text or JSON), and an optional OTLP export
//! layer. Outgoing requests carry the current span as a W3C `traceparent`
//! header so server-side slow logs can be correlated.
//!
//! ```rust,ignore
//! use esadmin_client::tracing::{LogFormat, TracingConfig};
//!
//! let guard = TracingConfig::new()
//!     .with_otlp_endpoint("http://localhost:4317")
//!     .with_format(LogFormat::Json)
//!     .init()?;
//! // ...
//! guard.shutdown();
//! ```

use std::time::Duration;

use opentelemetry::trace::TracerProvider;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the OTLP collector endpoint.
pub const ENV_OTLP_ENDPOINT: &str = "ESADMIN_OTLP_ENDPOINT";

const TRACER_NAME: &str = "esadmin-client";

/// Console output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
    /// No console output. Spans still reach the OTLP exporter if configured.
    Off,
}

/// Configuration for the global subscriber.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// OTLP gRPC endpoint (e.g. "http://localhost:4317").
    pub otlp_endpoint: Option<String>,
    pub service_name: String,
    pub service_version: String,
    pub format: LogFormat,
    /// Filter used when `RUST_LOG` is unset.
    pub default_filter: String,
    /// Export timeout for the OTLP exporter.
    pub timeout: Duration,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            otlp_endpoint: std::env::var(ENV_OTLP_ENDPOINT)
                .ok()
                .filter(|v| !v.trim().is_empty()),
            service_name: "esadmin".to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            format: LogFormat::Text,
            default_filter: "warn".to_string(),
            timeout: Duration::from_secs(5),
        }
    }
}

impl TracingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_otlp_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.otlp_endpoint = Some(endpoint.into());
        self
    }

    pub fn with_service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = name.into();
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_default_filter(mut self, filter: impl Into<String>) -> Self {
        self.default_filter = filter.into();
        self
    }

    /// Install the global subscriber.
    ///
    /// Hold the returned guard until exit and call [`TracingGuard::shutdown`]
    /// so batched spans are flushed.
    ///
    /// # Errors
    /// Returns an error if the OTLP exporter cannot be built or a global
    /// subscriber is already set.
    pub fn init(&self) -> Result<TracingGuard, TracingError> {
        use tracing_subscriber::fmt;

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.default_filter));

        let provider = match self.otlp_endpoint.as_deref() {
            Some(endpoint) => Some(self.build_provider(endpoint)?),
            None => None,
        };

        let otel_layer = provider.as_ref().map(|provider| {
            tracing_opentelemetry::layer().with_tracer(provider.tracer(TRACER_NAME))
        });

        let console_layer = match self.format {
            LogFormat::Text => Some(fmt::layer().with_writer(std::io::stderr).boxed()),
            LogFormat::Json => Some(fmt::layer().json().with_writer(std::io::stderr).boxed()),
            LogFormat::Off => None,
        };

        tracing_subscriber::registry()
            .with(env_filter)
            .with(otel_layer)
            .with(console_layer)
            .try_init()
            .map_err(|e| TracingError::InitError(e.to_string()))?;

        Ok(TracingGuard { provider })
    }

    fn build_provider(&self, endpoint: &str) -> Result<SdkTracerProvider, TracingError> {
        use opentelemetry_otlp::{Protocol, WithExportConfig};
        use opentelemetry_sdk::trace::{BatchSpanProcessor, Sampler};

        let exporter = opentelemetry_otlp::SpanExporter::builder()
            .with_tonic()
            .with_endpoint(endpoint)
            .with_timeout(self.timeout)
            .with_protocol(Protocol::Grpc)
            .build()
            .map_err(|e| TracingError::InitError(e.to_string()))?;

        let resource = opentelemetry_sdk::Resource::builder()
            .with_attributes(vec![
                opentelemetry::KeyValue::new("service.name", self.service_name.clone()),
                opentelemetry::KeyValue::new("service.version", self.service_version.clone()),
            ])
            .build();

        Ok(SdkTracerProvider::builder()
            .with_span_processor(BatchSpanProcessor::builder(exporter).build())
            .with_resource(resource)
            .with_sampler(Sampler::ParentBased(Box::new(Sampler::AlwaysOn)))
            .build())
    }
}

/// Keeps the tracer provider alive for the lifetime of the process.
pub struct TracingGuard {
    provider: Option<SdkTracerProvider>,
}

impl TracingGuard {
    /// Whether spans are being exported over OTLP.
    pub fn is_exporting(&self) -> bool {
        self.provider.is_some()
    }

    /// Flush pending spans and stop the exporter.
    pub fn shutdown(&self) {
        if let Some(provider) = &self.provider
            && let Err(e) = provider.shutdown()
        {
            eprintln!("failed to flush traces: {e}");
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Failed to initialize tracing: {0}")]
    InitError(String),
}

/// Attach the current span's context to an outgoing request as W3C trace
/// context headers. A request made outside any exported span is unchanged.
pub fn inject_trace_context(builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    use opentelemetry::propagation::TextMapPropagator;
    use opentelemetry_sdk::propagation::TraceContextPropagator;
    use std::collections::HashMap;
    use tracing_opentelemetry::OpenTelemetrySpanExt;

    let context = tracing::Span::current().context();
    let mut headers: HashMap<String, String> = HashMap::new();
    TraceContextPropagator::new().inject_context(&context, &mut headers);

    headers
        .into_iter()
        .fold(builder, |builder, (key, value)| builder.header(key, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_methods_override_defaults() {
        let config = TracingConfig::new()
            .with_otlp_endpoint("http://collector:4317")
            .with_service_name("esadmin-test")
            .with_format(LogFormat::Json)
            .with_default_filter("debug");

        assert_eq!(
            config.otlp_endpoint.as_deref(),
            Some("http://collector:4317")
        );
        assert_eq!(config.service_name, "esadmin-test");
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.default_filter, "debug");
    }

    #[test]
    fn inject_without_span_adds_no_traceparent() {
        let client = reqwest::Client::new();
        let request = inject_trace_context(client.get("http://localhost:9200/"))
            .build()
            .unwrap();
        assert!(request.headers().get("traceparent").is_none());
    }
}
