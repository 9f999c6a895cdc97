//! Logical operations exposed by the gateway and the paths that reach them.

use std::fmt;

use crate::errors::{DomainError, DomainResult};

/// Operation selected by the request path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Generate, store and deliver a new OTP
    Send,
    /// Check a submitted OTP against the latest stored one
    Verify,
}

impl Operation {
    /// Every routable operation
    pub const ALL: [Operation; 2] = [Operation::Send, Operation::Verify];

    /// Request path of the operation
    pub fn path(&self) -> &'static str {
        match self {
            Operation::Send => "/send-otp",
            Operation::Verify => "/verify-otp",
        }
    }

    /// Resolve a request path, failing with `UnknownOperation` for anything else
    pub fn from_path(path: &str) -> DomainResult<Self> {
        Self::ALL
            .into_iter()
            .find(|operation| operation.path() == path)
            .ok_or_else(|| DomainError::UnknownOperation {
                path: path.to_string(),
            })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Send => write!(f, "send"),
            Operation::Verify => write!(f, "verify"),
        }
    }
}
