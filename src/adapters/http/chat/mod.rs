//! Stateful chat route - the history-bearing proxy path.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::{routes, CHAT_ROUTE_PATH};
