//! # Token Types
//!
//! Domain types and port traits for the link token verifier.
//! This crate has no IO dependencies - only data structures,
//! verification outcomes, and trait definitions.
//!
//! ## Architecture
//!
//! - `domain/` - Secret, grants, rejections and verification results
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for the HTTP boundary
//! - `error/` - Domain error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{Grant, Rejection, Secret, VerificationResult, format_utc};
pub use dto::*;
pub use error::DomainError;
pub use ports::{Clock, FixedClock, SystemClock};
