//! Business services containing domain logic and use cases.

pub mod otp;

// Re-export commonly used types
pub use otp::{
    Clock, EmailServiceTrait, FixedRandomSource, ManualClock, NotificationDispatcher,
    OsRandomSource, OtpGenerator, OtpService, OtpServiceConfig, RandomSource, SendOtpResult,
    SmsServiceTrait, SystemClock, VerifyOtpResult,
};
