use serde::{de::DeserializeOwned, Deserialize, Serialize};
use validator::Validate;

use otp_core::errors::DomainError;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendOtpRequest {
    /// Phone number or email address; not format-checked
    #[validate(length(min = 1))]
    pub identifier: String,

    /// Delivery channel, "sms" or "email"
    pub method: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    #[validate(length(min = 1))]
    pub identifier: String,

    /// Code as typed by the user
    pub otp: String,
}

/// Decode and validate a JSON request body
///
/// Any decoding or validation failure becomes `DomainError::MalformedRequest`.
pub fn parse_request<T>(body: &[u8]) -> Result<T, DomainError>
where
    T: DeserializeOwned + Validate,
{
    let request: T = serde_json::from_slice(body).map_err(|e| DomainError::malformed(e.to_string()))?;
    request
        .validate()
        .map_err(|e| DomainError::malformed(e.to_string()))?;
    Ok(request)
}
