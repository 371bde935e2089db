use axum::{body::Body, http::Request, response::Response};
use opentelemetry::{
    global,
    trace::{SpanKind, TraceContextExt, Tracer},
    Context, KeyValue,
};
use opentelemetry_otlp::{WithExportConfig, WithTonicConfig};
use shared_types::AuthUser;
use std::{
    future::Future,
    pin::Pin,
    sync::OnceLock,
    task::{Context as TaskContext, Poll},
};
use tower::{Layer, Service};

use crate::auth::extractors::SessionUser;

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const TRACER_NAME: &str = "securedash";

/// Tokio runtime for the OTLP gRPC exporter. Tonic's `connect_lazy()`
/// calls `tokio::spawn`, and the init closure passed to `dioxus::serve`
/// may run before a runtime context is entered.
static OTEL_RUNTIME: OnceLock<tokio::runtime::Runtime> = OnceLock::new();

/// Set up the OpenTelemetry TracerProvider and register it globally.
///
/// Dioxus owns the tracing subscriber; this only configures the OTLP
/// trace exporter so HTTP spans from [`OtelTraceLayer`] reach a collector.
///
/// Reads config from environment:
///   - `OTEL_EXPORTER_OTLP_ENDPOINT`: collector gRPC address, e.g. `http://localhost:4317`
///   - `OTEL_SERVICE_NAME`: service name tag (default: `securedash`)
///   - `DEPLOY_ENV`: deployment environment tag (default: `development`)
pub fn init_telemetry() {
    let _ = dotenvy::dotenv();

    let endpoint = match std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT") {
        Ok(ep) if !ep.is_empty() => ep,
        _ => {
            tracing::warn!("OTEL_EXPORTER_OTLP_ENDPOINT not set, skipping OTLP telemetry");
            return;
        }
    };

    let service_name =
        std::env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| TRACER_NAME.to_string());
    let environment = std::env::var("DEPLOY_ENV").unwrap_or_else(|_| "development".to_string());

    let Some(rt) = otel_runtime() else {
        return;
    };
    let _guard = rt.enter();

    let mut builder = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(&endpoint);

    if endpoint.starts_with("https://") {
        builder = builder.with_tls_config(
            opentelemetry_otlp::tonic_types::transport::ClientTlsConfig::new().with_native_roots(),
        );
    }

    let exporter = match builder.build() {
        Ok(exporter) => exporter,
        Err(e) => {
            tracing::warn!(error = %e, "failed to create OTLP exporter, telemetry disabled");
            return;
        }
    };

    let resource = opentelemetry_sdk::Resource::builder()
        .with_service_name(service_name)
        .with_attribute(KeyValue::new("service.version", APP_VERSION))
        .with_attribute(KeyValue::new("deployment.environment", environment))
        .build();

    let provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .with_resource(resource)
        .build();

    global::set_tracer_provider(provider);

    tracing::info!(%endpoint, version = APP_VERSION, "telemetry initialized, traces exporting");
}

fn otel_runtime() -> Option<&'static tokio::runtime::Runtime> {
    if let Some(rt) = OTEL_RUNTIME.get() {
        return Some(rt);
    }
    match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .worker_threads(1)
        .build()
    {
        Ok(rt) => Some(OTEL_RUNTIME.get_or_init(|| rt)),
        Err(e) => {
            tracing::warn!(error = %e, "failed to create OTEL runtime, telemetry disabled");
            None
        }
    }
}

/// Span attributes describing who made the request.
fn session_attributes(user: Option<&AuthUser>) -> Vec<KeyValue> {
    match user {
        Some(user) => vec![
            KeyValue::new("user.id", user.id),
            KeyValue::new("user.name", user.username.clone()),
            KeyValue::new("user.role", user.role.clone()),
            KeyValue::new("auth.status", "authenticated"),
        ],
        None => vec![KeyValue::new("auth.status", "anonymous")],
    }
}

/// Span name for a request. Server function paths carry a trailing hash
/// that would explode span cardinality, so it is stripped.
fn span_name(method: &str, path: &str) -> String {
    let route = path.trim_end_matches(|c: char| c.is_ascii_digit());
    format!("{method} {route}")
}

/// Tower layer that creates an OpenTelemetry span for each HTTP request.
///
/// Captures: method, path, request ID, response status, and the session's
/// username and role (if signed in).
#[derive(Clone)]
pub struct OtelTraceLayer;

impl<S> Layer<S> for OtelTraceLayer {
    type Service = OtelTraceService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        OtelTraceService { inner }
    }
}

#[derive(Clone)]
pub struct OtelTraceService<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for OtelTraceService<S>
where
    S: Service<Request<Body>, Response = Response> + Send + Clone + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut TaskContext<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let tracer = global::tracer(TRACER_NAME);
        let method = req.method().to_string();
        let path = req.uri().path().to_string();

        let request_id = req
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        let mut attributes = vec![
            KeyValue::new("http.method", method.clone()),
            KeyValue::new("http.target", path.clone()),
            KeyValue::new("http.request_id", request_id),
        ];
        attributes.extend(session_attributes(
            req.extensions().get::<SessionUser>().map(|s| &s.0),
        ));

        let span = tracer
            .span_builder(span_name(&method, &path))
            .with_kind(SpanKind::Server)
            .with_attributes(attributes)
            .start(&tracer);

        let cx = Context::current_with_span(span);
        let mut inner = self.inner.clone();

        let guard = cx.clone().attach();
        let future = inner.call(req);
        drop(guard);

        Box::pin(async move {
            let response = future.await?;

            let span = cx.span();
            let status = response.status();
            span.set_attribute(KeyValue::new("http.status_code", status.as_u16() as i64));

            if status.is_server_error() {
                span.set_status(opentelemetry::trace::Status::error(status.to_string()));
            } else if status.is_client_error() {
                span.set_attribute(KeyValue::new("error.type", "client_error"));
            }

            Ok(response)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_request_is_tagged() {
        let attrs = session_attributes(None);
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs[0].key.as_str(), "auth.status");
    }

    #[test]
    fn session_user_name_and_role_are_recorded() {
        let user = AuthUser {
            id: 1,
            username: "admin1".into(),
            role: "admin".into(),
        };
        let attrs = session_attributes(Some(&user));
        let keys: Vec<_> = attrs.iter().map(|kv| kv.key.as_str().to_string()).collect();
        assert_eq!(keys, vec!["user.id", "user.name", "user.role", "auth.status"]);
    }

    #[test]
    fn span_name_strips_trailing_digits() {
        assert_eq!(span_name("GET", "/api/session"), "GET /api/session");
        assert_eq!(
            span_name("POST", "/api/get_current_user1234"),
            "POST /api/get_current_user"
        );
    }
}
