//! Configuration for the OTP service

use otp_shared::config::OtpConfig;

use crate::domain::entities::DEFAULT_EXPIRY_SECONDS;

/// Configuration for the OTP service
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Seconds after creation during which a code verifies
    pub expiry_seconds: i64,
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            expiry_seconds: DEFAULT_EXPIRY_SECONDS,
        }
    }
}

impl From<&OtpConfig> for OtpServiceConfig {
    fn from(config: &OtpConfig) -> Self {
        Self {
            expiry_seconds: config.expiry_seconds,
        }
    }
}
