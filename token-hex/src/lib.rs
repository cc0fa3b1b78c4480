//! # Token Hex
//!
//! Validation service and HTTP adapter for the link token verifier.
//!
//! ## Architecture
//!
//! - `service/` - Application service (reads the clock, runs the verifier, logs)
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service is generic over `C: Clock`, so tests can pin the current time.

pub mod inbound;
pub mod service;


pub use service::ValidationService;
