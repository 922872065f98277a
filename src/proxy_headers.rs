//! Middleware recording reverse-proxy headers on the request span.
//!
//! `X-Forwarded-Proto`, `X-Forwarded-Port` and the first hop of
//! `X-Forwarded-For` become `url.scheme`, `server.port` and `client.address`
//! on the current tracing span, so exported HTTP spans describe the original
//! request rather than the proxy hop.

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    response::Response,
};
use std::task::{Context, Poll};
use tower::{Layer, Service};

#[derive(Clone)]
pub struct ForwardedHeadersLayer;

impl<S> Layer<S> for ForwardedHeadersLayer {
    type Service = ForwardedHeadersService<S>;

    fn layer(&self, service: S) -> Self::Service {
        ForwardedHeadersService { inner: service }
    }
}

#[derive(Clone)]
pub struct ForwardedHeadersService<S> {
    inner: S,
}

/// Attributes taken from proxy headers
#[derive(Debug, Default, PartialEq)]
struct Forwarded {
    scheme: Option<String>,
    port: Option<i64>,
    client: Option<String>,
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v: &HeaderValue| v.to_str().ok())
}

fn forwarded(headers: &HeaderMap) -> Forwarded {
    Forwarded {
        scheme: header_str(headers, "x-forwarded-proto").map(str::to_owned),
        port: header_str(headers, "x-forwarded-port").and_then(|s| s.trim().parse().ok()),
        client: header_str(headers, "x-forwarded-for")
            .and_then(|s| s.split(',').next())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned),
    }
}

impl<S, B> Service<Request<B>> for ForwardedHeadersService<S>
where
    S: Service<Request<B>, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<B>) -> Self::Future {
        let attrs = forwarded(req.headers());
        let span = tracing::Span::current();

        if let Some(scheme) = attrs.scheme {
            span.record("url.scheme", &scheme);
        }

        if let Some(port) = attrs.port {
            span.record("server.port", port);
        }

        if let Some(client) = attrs.client {
            span.record("client.address", &client);
        }

        self.inner.call(req)
    }
}
