//! HTTP Inbound Adapter
//!
//! Axum-based HTTP server that drives the validation service.

mod handlers;
mod server;

pub use handlers::AppState;
pub use server::{DEFAULT_BASE_PATH, HttpServer};
