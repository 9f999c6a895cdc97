//! Channel used to deliver an OTP.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Delivery channel for an OTP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMethod {
    /// Text message to a phone number
    Sms,
    /// Email to an address
    Email,
}

impl DeliveryMethod {
    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryMethod::Sms => "sms",
            DeliveryMethod::Email => "email",
        }
    }
}

impl fmt::Display for DeliveryMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeliveryMethod {
    type Err = DomainError;

    /// Only the exact lowercase values `sms` and `email` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sms" => Ok(DeliveryMethod::Sms),
            "email" => Ok(DeliveryMethod::Email),
            other => Err(DomainError::InvalidChannel {
                method: other.to_string(),
            }),
        }
    }
}
