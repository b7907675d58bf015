//! Request timing log.

use std::time::{Duration, Instant};

use axum::{
    extract::Request,
    http::{Method, Uri},
    middleware::Next,
    response::Response,
};

use crate::observability::metrics;

/// `"[<METHOD>] <path?query>"`, the key both timing events are logged under.
pub fn log_label(method: &Method, uri: &Uri) -> String {
    let target = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    format!("[{}] {}", method.as_str().to_uppercase(), target)
}

/// Measures one pass through the remaining stages.
#[derive(Debug)]
pub struct RequestTimer {
    label: String,
    start: Instant,
}

impl RequestTimer {
    pub fn start(label: String) -> Self {
        tracing::trace!(label = %label, "Request started");
        Self {
            label,
            start: Instant::now(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Log the elapsed time and return it.
    pub fn finish(self) -> Duration {
        let elapsed = self.start.elapsed();
        tracing::info!(
            label = %self.label,
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            "{}: {:.3}ms",
            self.label,
            elapsed.as_secs_f64() * 1000.0
        );
        elapsed
    }
}

/// Time the rest of the chain. The log line is written only after the
/// handler has produced its response.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let timer = RequestTimer::start(log_label(request.method(), request.uri()));
    let response = next.run(request).await;
    timer.finish();
    response
}

pub async fn record_metrics(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let response = next.run(request).await;
    metrics::record_request(method.as_str(), response.status().as_u16(), start);
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_includes_query() {
        let uri: Uri = "/projects?title=Node".parse().unwrap();
        assert_eq!(log_label(&Method::GET, &uri), "[GET] /projects?title=Node");

        let uri: Uri = "/projects/abc".parse().unwrap();
        assert_eq!(log_label(&Method::DELETE, &uri), "[DELETE] /projects/abc");
    }

    #[test]
    fn test_label_uppercases_extension_methods() {
        let method = Method::from_bytes(b"purge").unwrap();
        let uri: Uri = "/".parse().unwrap();
        assert_eq!(log_label(&method, &uri), "[PURGE] /");
    }

    #[test]
    fn test_timer_covers_work_done_before_finish() {
        let timer = RequestTimer::start("[GET] /".into());
        assert_eq!(timer.label(), "[GET] /");
        std::thread::sleep(Duration::from_millis(20));
        assert!(timer.finish() >= Duration::from_millis(20));
    }
}
