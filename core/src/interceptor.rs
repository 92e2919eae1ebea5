//! Response interceptors.
//!
//! Interceptors observe traffic flowing through `ApiClient`. They receive
//! shared references only, so a response or an error always reaches the
//! caller exactly as it was produced.

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

pub trait Interceptor: Send + Sync {
    /// Called for every HTTP response received, before it is parsed.
    fn on_response(&self, _request: &HttpRequest, _response: &HttpResponse) {}

    /// Called once for every failed call. `request` is `None` when the
    /// request body could not be encoded, so nothing was sent.
    fn on_failure(&self, _request: Option<&HttpRequest>, _error: &ApiError) {}
}

/// Logs each failed call at `ERROR`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFailures;

impl Interceptor for LogFailures {
    fn on_failure(&self, request: Option<&HttpRequest>, error: &ApiError) {
        tracing::error!(
            method = request.map(|r| r.method.as_str()),
            url = request.map(|r| r.url.as_str()),
            status = ?error.status(),
            error = %error,
            "words api request failed"
        );
    }
}
