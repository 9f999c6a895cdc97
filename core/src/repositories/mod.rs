//! Repository interfaces for OTP persistence.

pub mod otp;

pub use otp::{InMemoryOtpRepository, OtpRepository};
