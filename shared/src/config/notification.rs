//! Notification (SMS / email) and AWS configuration

use serde::{Deserialize, Serialize};

/// Default sender address for OTP emails
pub const DEFAULT_SENDER_ADDRESS: &str = "notifications.otp@evacrane.com";

/// Provider used to deliver OTPs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationProvider {
    /// Log messages instead of sending them
    #[default]
    Mock,
    /// AWS SNS for SMS, AWS SES for email
    Aws,
}

impl std::fmt::Display for NotificationProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationProvider::Mock => write!(f, "mock"),
            NotificationProvider::Aws => write!(f, "aws"),
        }
    }
}

/// Notification configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Delivery provider
    pub provider: NotificationProvider,

    /// `From` address of OTP emails
    pub sender_address: String,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            provider: NotificationProvider::default(),
            sender_address: String::from(DEFAULT_SENDER_ADDRESS),
        }
    }
}

/// AWS settings shared by DynamoDB, SNS and SES clients
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AwsConfig {
    /// AWS region (e.g. "us-east-1")
    pub region: String,

    /// Static access key id; the default credential chain is used when unset
    pub access_key_id: Option<String>,

    /// Static secret access key
    pub secret_access_key: Option<String>,
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            region: String::from("us-east-1"),
            access_key_id: None,
            secret_access_key: None,
        }
    }
}

impl AwsConfig {
    /// Static credentials, if both halves are configured
    pub fn static_credentials(&self) -> Option<(&str, &str)> {
        match (&self.access_key_id, &self.secret_access_key) {
            (Some(key), Some(secret)) if !key.is_empty() && !secret.is_empty() => {
                Some((key.as_str(), secret.as_str()))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_credentials_need_both_halves() {
        let mut aws = AwsConfig::default();
        assert!(aws.static_credentials().is_none());

        aws.access_key_id = Some("AKIA".to_string());
        assert!(aws.static_credentials().is_none());

        aws.secret_access_key = Some("secret".to_string());
        assert_eq!(aws.static_credentials(), Some(("AKIA", "secret")));
    }
}
