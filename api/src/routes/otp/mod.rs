//! OTP route handlers
//!
//! - `POST /send-otp`: issue a code and deliver it
//! - `POST /verify-otp`: check a code against the latest record

pub mod send_otp;
pub mod verify_otp;

use std::sync::Arc;

use otp_core::repositories::OtpRepository;
use otp_core::services::{EmailServiceTrait, OtpService, SmsServiceTrait};

pub use send_otp::send_otp;
pub use verify_otp::verify_otp;

/// Application state that holds shared services
pub struct AppState<R, S, E>
where
    R: OtpRepository,
    S: SmsServiceTrait,
    E: EmailServiceTrait,
{
    pub otp_service: Arc<OtpService<R, S, E>>,
}

impl<R, S, E> AppState<R, S, E>
where
    R: OtpRepository,
    S: SmsServiceTrait,
    E: EmailServiceTrait,
{
    pub fn new(otp_service: Arc<OtpService<R, S, E>>) -> Self {
        Self { otp_service }
    }
}
