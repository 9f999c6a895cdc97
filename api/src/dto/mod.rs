pub mod otp;

pub use otp::{parse_request, SendOtpRequest, VerifyOtpRequest};
