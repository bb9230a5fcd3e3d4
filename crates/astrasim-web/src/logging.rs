use std::time::Instant;

use axum::extract::Request;
use axum::http::{HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the level is `debug` in debug mode
/// and `info` elsewhere. Calling this twice is harmless.
pub fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("astrasim={default_level},tower_http=info")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

/// Middleware that tags each response with a request id and logs it.
pub async fn log_request(request: Request, next: Next) -> Response {
    let started = Instant::now();
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let mut response = next.run(request).await;

    let latency_ms = started.elapsed().as_secs_f64() * 1000.0;
    tracing::info!(
        target: "astrasim::http",
        %request_id,
        "{method} {path} -> {} ({latency_ms:.2} ms)",
        response.status().as_u16(),
    );

    if let Ok(value) = HeaderValue::from_str(&request_id.hyphenated().to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
