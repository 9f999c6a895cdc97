//! Domain-specific error types.
//!
//! Every variant is terminal for the request that raised it. The API layer maps
//! each one to a fixed status code and message; the `Display` text here is for
//! logs only and is never returned to callers.

use std::fmt;
use thiserror::Error;

use crate::domain::value_objects::DeliveryMethod;

/// Which side of the store failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageOperation {
    /// Inserting a new record
    Write,
    /// Looking up the latest record
    Read,
}

impl fmt::Display for StorageOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageOperation::Write => write!(f, "write"),
            StorageOperation::Read => write!(f, "read"),
        }
    }
}

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Malformed request: {message}")]
    MalformedRequest { message: String },

    #[error("Storage {operation} failed: {message}")]
    Storage {
        operation: StorageOperation,
        message: String,
    },

    #[error("Invalid delivery method: {method:?}")]
    InvalidChannel { method: String },

    #[error("Failed to dispatch OTP via {channel}: {message}")]
    Dispatch {
        channel: DeliveryMethod,
        message: String,
    },

    #[error("No OTP found")]
    NotFound,

    #[error("OTP expired ({age_seconds}s old)")]
    Expired { age_seconds: i64 },

    #[error("OTP mismatch")]
    Mismatch,

    #[error("Unknown operation: {path}")]
    UnknownOperation { path: String },
}

impl DomainError {
    /// Storage write failure
    pub fn storage_write(message: impl Into<String>) -> Self {
        DomainError::Storage {
            operation: StorageOperation::Write,
            message: message.into(),
        }
    }

    /// Storage read failure
    pub fn storage_read(message: impl Into<String>) -> Self {
        DomainError::Storage {
            operation: StorageOperation::Read,
            message: message.into(),
        }
    }

    /// Malformed request payload
    pub fn malformed(message: impl Into<String>) -> Self {
        DomainError::MalformedRequest {
            message: message.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
