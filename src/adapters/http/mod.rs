//! HTTP adapter - axum routes, envelopes, middleware and shared state.

pub mod chat;
pub mod dto;
pub mod middleware;
pub mod passthrough;
pub mod service;

use std::sync::atomic::AtomicU64;
use std::sync::Arc;

use axum::http::StatusCode;
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::application::handlers::ChatTurnHandler;
use crate::ports::{ChatProvider, HistoryStore};

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct GatewayState {
    pub store: Arc<dyn HistoryStore>,
    pub provider: Arc<dyn ChatProvider>,
    /// Shared client for the stateless pass-through upstreams.
    pub http: reqwest::Client,
    /// Bound on stored turns per user before the history is wiped.
    pub max_turns: usize,
    /// Process-wide inbound request counter; reset on restart.
    pub request_count: Arc<AtomicU64>,
}

impl GatewayState {
    pub fn new(
        store: Arc<dyn HistoryStore>,
        provider: Arc<dyn ChatProvider>,
        http: reqwest::Client,
        max_turns: usize,
    ) -> Self {
        Self {
            store,
            provider,
            http,
            max_turns,
            request_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn chat_turn_handler(&self) -> ChatTurnHandler {
        ChatTurnHandler::new(self.store.clone(), self.provider.clone(), self.max_turns)
    }
}

/// Assembles the full gateway router.
///
/// The fallback is registered before the layers so that requests to
/// unmatched paths still pass through the counter middleware.
pub fn router(state: GatewayState) -> Router {
    Router::new()
        .merge(chat::routes())
        .merge(passthrough::routes())
        .merge(service::routes())
        .fallback(not_found)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::request_counter::count_requests,
        ))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> (StatusCode, Json<dto::ErrorResponse>) {
    (StatusCode::NOT_FOUND, Json(dto::ErrorResponse::not_found()))
}
