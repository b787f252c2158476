//! Route definitions for the stateful chat endpoint.

use axum::routing::get;
use axum::Router;

use super::super::GatewayState;
use super::handlers::{chat_turn_json, chat_turn_query};

/// Path of the history-bearing chat route.
pub const CHAT_ROUTE_PATH: &str = "/ai/groq";

/// Create the chat router.
///
/// # Endpoints
///
/// - `GET /ai/groq?q=...&userId=...` - chat turn via query string
/// - `POST /ai/groq` - chat turn via JSON body
pub fn routes() -> Router<GatewayState> {
    Router::new().route(CHAT_ROUTE_PATH, get(chat_turn_query).post(chat_turn_json))
}
