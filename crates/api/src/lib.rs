//! HTTP API: product document routes, response envelopes, service wiring.

pub mod app;
pub mod config;
