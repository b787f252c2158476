//! Stateless pass-through routes.
//!
//! Each route is one entry in a declarative table (path, required
//! parameters, upstream request builder, response extraction) served by a
//! single generic handler. No history, no state: validate, call upstream
//! once, reshape, envelope.

pub mod handlers;
pub mod table;

pub use handlers::routes;
pub use table::{Extract, StatelessRoute, UpstreamRequest, STATELESS_ROUTES};
