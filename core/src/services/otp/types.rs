//! Types for OTP service results

use crate::domain::entities::OtpRecord;
use crate::domain::value_objects::DeliveryMethod;

/// Result of sending an OTP
#[derive(Debug, Clone)]
pub struct SendOtpResult {
    /// The record that was stored
    pub record: OtpRecord,
    /// Channel the code went out on
    pub method: DeliveryMethod,
    /// Message id from the delivery provider
    pub message_id: String,
}

/// Result of a successful verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyOtpResult {
    /// Creation time of the matched record
    pub created_at: i64,
    /// Age of the matched record at verification time
    pub age_seconds: i64,
}
