//! OTP service module
//!
//! This module provides the complete one-time passcode workflow:
//! - Code generation from an injected random source
//! - Storage through an `OtpRepository`
//! - Delivery over SMS or email through the notification dispatcher
//! - Verification against the most recent record with a fixed expiry window

mod clock;
mod config;
mod dispatcher;
mod generator;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::OtpServiceConfig;
pub use dispatcher::{otp_message, NotificationDispatcher, EMAIL_SUBJECT};
pub use generator::{FixedRandomSource, OsRandomSource, OtpGenerator, RandomSource};
pub use service::OtpService;
pub use traits::{EmailServiceTrait, SmsServiceTrait};
pub use types::{SendOtpResult, VerifyOtpResult};
