//! Service routes: request count and the feature listing.

use axum::extract::{Json, State};
use axum::routing::get;
use axum::Router;
use serde::Serialize;
use std::sync::atomic::Ordering;

use super::chat::CHAT_ROUTE_PATH;
use super::passthrough::STATELESS_ROUTES;
use super::GatewayState;

/// Path of the request-count endpoint.
pub const REQUEST_COUNT_PATH: &str = "/request-count";

/// Path of the feature listing endpoint.
pub const FEATURES_PATH: &str = "/cek";

#[derive(Debug, Clone, Serialize)]
pub struct RequestCountResponse {
    pub count: u64,
    pub msg: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeatureListResponse {
    pub list_fitur: Vec<String>,
    pub total_fitur: usize,
}

/// All public route paths, derived from the route tables.
pub fn feature_paths() -> Vec<String> {
    let mut paths = vec![CHAT_ROUTE_PATH.to_string()];
    paths.extend(STATELESS_ROUTES.iter().map(|route| route.path.to_string()));
    paths.push(REQUEST_COUNT_PATH.to_string());
    paths
}

/// GET /request-count
pub async fn request_count(State(state): State<GatewayState>) -> Json<RequestCountResponse> {
    let count = state.request_count.load(Ordering::Relaxed);
    Json(RequestCountResponse {
        count,
        msg: format!("Requests received so far: {count}"),
    })
}

/// GET /cek
pub async fn feature_list() -> Json<FeatureListResponse> {
    let list_fitur = feature_paths();
    let total_fitur = list_fitur.len();
    Json(FeatureListResponse {
        list_fitur,
        total_fitur,
    })
}

pub fn routes() -> Router<GatewayState> {
    Router::new()
        .route(REQUEST_COUNT_PATH, get(request_count))
        .route(FEATURES_PATH, get(feature_list))
}
