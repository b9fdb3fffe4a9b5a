use std::time::Duration;

use axum::{body::Body, extract::Request, response::Response};
use tracing::{Level, Span};

pub fn make_span_with_request_id(request: &Request<Body>) -> Span {
    let request_id = uuid::Uuid::new_v4();
    tracing::span!(
        Level::INFO,
        "[REQUEST]",
        method = tracing::field::display(request.method()),
        uri = tracing::field::display(request.uri()),
        version = tracing::field::debug(request.version()),
        request_id = tracing::field::display(request_id),
    )
}

pub fn on_request(_request: &Request<Body>, _span: &Span) {
    tracing::event!(Level::INFO, "[REQUEST START]");
}

pub fn on_response(response: &Response, latency: Duration, _span: &Span) {
    let status = response.status();

    // 4xx is the expected answer to a bad sign-in, so only 5xx is an error
    if status.is_server_error() {
        tracing::event!(Level::ERROR, latency = ?latency, status = status.as_u16(), "[REQUEST END]");
    } else {
        tracing::event!(Level::INFO, latency = ?latency, status = status.as_u16(), "[REQUEST END]");
    }
}
