//! Shared utilities and common types for the OTP gateway
//!
//! This crate provides functionality used across all server crates:
//! - Configuration types and layered loading
//! - Log-safe masking of phone numbers and email addresses

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AwsConfig, ConfigError, Environment, LoggingConfig, NotificationConfig,
    NotificationProvider, OtpConfig, ServerConfig, StorageBackend, StorageConfig,
};
pub use utils::mask_identifier;
