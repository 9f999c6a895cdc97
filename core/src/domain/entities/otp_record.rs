//! OTP record entity persisted by the OTP store.

use constant_time_eq::constant_time_eq;
use serde::{Deserialize, Serialize};

/// Length of a one-time passcode
pub const OTP_LENGTH: usize = 6;

/// Seconds after creation during which an OTP can be verified
pub const DEFAULT_EXPIRY_SECONDS: i64 = 300;

/// A one-time passcode issued to an identifier
///
/// Records are immutable once created. Several records may exist for the
/// same identifier; only the most recent one is ever verified against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpRecord {
    /// Phone number or email address the code was sent to (not format-validated)
    pub identifier: String,

    /// The zero-padded 6-digit code
    pub otp: String,

    /// Unix epoch seconds at creation time
    pub created_at: i64,
}

impl OtpRecord {
    /// Creates a new record
    ///
    /// # Arguments
    ///
    /// * `identifier` - Phone number or email address
    /// * `otp` - The generated code
    /// * `created_at` - Creation time in Unix epoch seconds
    pub fn new(identifier: impl Into<String>, otp: impl Into<String>, created_at: i64) -> Self {
        Self {
            identifier: identifier.into(),
            otp: otp.into(),
            created_at,
        }
    }

    /// Seconds elapsed between creation and `now`
    pub fn age_seconds(&self, now: i64) -> i64 {
        now.saturating_sub(self.created_at)
    }

    /// Checks whether the record has expired at `now`
    ///
    /// A record aged exactly `expiry_seconds` is still valid; it expires once
    /// its age is strictly greater.
    pub fn is_expired_at(&self, now: i64, expiry_seconds: i64) -> bool {
        self.age_seconds(now) > expiry_seconds
    }

    /// Exact, case-sensitive comparison against a submitted code
    ///
    /// Runs in constant time for equal-length inputs.
    pub fn matches(&self, submitted: &str) -> bool {
        constant_time_eq(self.otp.as_bytes(), submitted.as_bytes())
    }
}
