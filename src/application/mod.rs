//! Application layer - request orchestration over the ports.

pub mod handlers;
