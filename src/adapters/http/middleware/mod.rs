//! HTTP middleware.

pub mod request_counter;
