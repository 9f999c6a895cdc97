//! # OTP Gateway Core
//!
//! Core domain layer for the OTP gateway.
//! This crate contains the OTP record entity, delivery channel and operation types,
//! the repository interface with an in-memory implementation, the notification
//! dispatcher and the `OtpService` that drives the send and verify flows.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
