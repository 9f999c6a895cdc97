//! Notification dispatcher over the closed set of delivery channels

use std::sync::Arc;

use crate::domain::value_objects::DeliveryMethod;
use crate::errors::{DomainError, DomainResult};

use super::traits::{EmailServiceTrait, SmsServiceTrait};

/// Subject line of OTP emails
pub const EMAIL_SUBJECT: &str = "Your OTP";

/// Text delivered on every channel
pub fn otp_message(otp: &str) -> String {
    format!("Your OTP is: {}", otp)
}

/// Sends an OTP over SMS or email
pub struct NotificationDispatcher<S: SmsServiceTrait, E: EmailServiceTrait> {
    sms_service: Arc<S>,
    email_service: Arc<E>,
    /// `From` address of OTP emails
    sender_address: String,
}

impl<S: SmsServiceTrait, E: EmailServiceTrait> NotificationDispatcher<S, E> {
    /// Create a dispatcher
    ///
    /// # Arguments
    ///
    /// * `sms_service` - SMS delivery implementation
    /// * `email_service` - Email delivery implementation
    /// * `sender_address` - Fixed sender of OTP emails
    pub fn new(sms_service: Arc<S>, email_service: Arc<E>, sender_address: impl Into<String>) -> Self {
        Self {
            sms_service,
            email_service,
            sender_address: sender_address.into(),
        }
    }

    /// Deliver `otp` to `identifier` over `channel`
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Provider message id
    /// * `Err(DomainError::Dispatch)` - The provider rejected or failed the send
    pub async fn send(&self, channel: DeliveryMethod, identifier: &str, otp: &str) -> DomainResult<String> {
        let body = otp_message(otp);

        let result = match channel {
            DeliveryMethod::Sms => self.sms_service.send_sms(identifier, &body).await,
            DeliveryMethod::Email => {
                self.email_service
                    .send_email(&self.sender_address, identifier, EMAIL_SUBJECT, &body)
                    .await
            }
        };

        result.map_err(|message| DomainError::Dispatch { channel, message })
    }
}
