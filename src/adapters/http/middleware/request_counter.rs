//! Request counting middleware.
//!
//! Increments the process-wide counter once per inbound request and logs the
//! ordinal. The counter lives in shared state, is never persisted, and
//! resets on restart.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use std::sync::atomic::Ordering;

use super::super::GatewayState;

pub async fn count_requests(
    State(state): State<GatewayState>,
    request: Request,
    next: Next,
) -> Response {
    let ordinal = state.request_count.fetch_add(1, Ordering::Relaxed) + 1;
    tracing::info!(
        request = ordinal,
        method = %request.method(),
        path = %request.uri().path(),
        "inbound request"
    );
    next.run(request).await
}
