//! HTTP API: server, routing, and request/response mapping.

pub mod app;
pub mod bootstrap;
pub mod config;
pub mod middleware;
