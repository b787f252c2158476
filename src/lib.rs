//! Lana Gateway - HTTP gateway for conversational AI providers
//!
//! This crate forwards user queries to several third-party AI backends and
//! normalizes their responses into one JSON envelope. Its only stateful
//! responsibility is per-user conversation history for the multi-turn
//! provider, persisted to a flat file.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
