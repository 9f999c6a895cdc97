//! # Infrastructure Layer
//!
//! Concrete implementations of the collaborators the OTP service depends on.
//!
//! ## Architecture
//!
//! - **Storage**: DynamoDB and Redis implementations of `OtpRepository`
//!   (the in-memory one lives in `otp_core`)
//! - **Notification**: AWS SNS for SMS, AWS SES for email, and mock providers
//!   that log instead of sending
//!
//! ## Features
//!
//! - `aws`: Enable the DynamoDB store and the SNS / SES providers (default)
//! - `redis-store`: Enable the Redis store (default)

// Re-export core types for convenience
pub use otp_core::errors::*;

/// AWS SDK configuration shared by every AWS client
#[cfg(feature = "aws")]
pub mod aws;

/// Notification module - SMS and email providers
pub mod notification;

/// Storage module - OTP record stores
pub mod storage;

pub use notification::{create_notifiers, DeliveredMessage, MockEmailService, MockSmsService, Notifiers};
pub use storage::create_otp_repository;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Redis connection error
    #[cfg(feature = "redis-store")]
    #[error("Cache error: {0}")]
    Redis(#[from] redis::RedisError),
}
