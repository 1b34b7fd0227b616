//! Request-scoped middleware

use axum::{
    extract::Request,
    http::{HeaderValue, header::HeaderName},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::info;
use uuid::Uuid;

/// Response header carrying the generated request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Tag every request with a fresh id, log its start and completion, and
/// echo the id back on the response.
pub async fn request_id(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    info!(%request_id, %method, %path, "Request started");
    let start = Instant::now();

    let mut response = next.run(request).await;

    info!(
        %request_id,
        status = %response.status(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Request completed"
    );

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }

    response
}
