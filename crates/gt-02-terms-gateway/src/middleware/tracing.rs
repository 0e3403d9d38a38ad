//! Request tracing middleware.
//!
//! Opens one span per request and logs its outcome. A W3C `traceparent`
//! header, when present, is recorded on the span so gateway logs can be joined
//! with the calling UI's traces.

use axum::{
    body::Body,
    http::{Request, Response},
};
use std::task::{Context, Poll};
use std::time::Instant;
use tower::{Layer, Service};
use tracing::{info, info_span, warn, Instrument, Span};

/// Tracing layer that creates spans for each request
#[derive(Clone, Default)]
pub struct TracingLayer;

impl TracingLayer {
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for TracingLayer {
    type Service = TracingService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        TracingService { inner }
    }
}

/// Tracing service
#[derive(Clone)]
pub struct TracingService<S> {
    inner: S,
}

impl<S, ResBody> Service<Request<Body>> for TracingService<S>
where
    S: Service<Request<Body>, Response = Response<ResBody>> + Clone + Send + 'static,
    S::Future: Send,
    ResBody: Send + 'static,
{
    type Response = Response<ResBody>;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let mut inner = self.inner.clone();

        let span = info_span!(
            "terms_request",
            http.method = %req.method(),
            http.target = %req.uri().path(),
            trace_id = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
        );

        if let Some(trace_id) = extract_trace_id(&req) {
            span.record("trace_id", trace_id);
        }

        Box::pin(
            async move {
                let started = Instant::now();
                let result = inner.call(req).await;
                let elapsed_ms = started.elapsed().as_millis() as u64;

                if let Ok(response) = &result {
                    let status = response.status();
                    Span::current().record("http.status_code", status.as_u16());

                    if status.is_client_error() || status.is_server_error() {
                        warn!(status = status.as_u16(), elapsed_ms, "Request failed");
                    } else {
                        info!(status = status.as_u16(), elapsed_ms, "Request completed");
                    }
                }

                result
            }
            .instrument(span),
        )
    }
}

/// Trace id from a W3C `traceparent` header (`version-trace_id-parent_id-flags`).
fn extract_trace_id<B>(req: &Request<B>) -> Option<&str> {
    let traceparent = req.headers().get("traceparent")?.to_str().ok()?;

    let parts: Vec<&str> = traceparent.split('-').collect();
    if parts.len() != 4 || parts[1].len() != 32 {
        return None;
    }

    Some(parts[1])
}
