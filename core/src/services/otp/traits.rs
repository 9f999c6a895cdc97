//! Traits for SMS and email delivery integration

use async_trait::async_trait;

/// Trait for SMS service integration
#[async_trait]
pub trait SmsServiceTrait: Send + Sync {
    /// Send a text message to a phone number, returning the provider message id
    async fn send_sms(&self, phone: &str, message: &str) -> Result<String, String>;
}

/// Trait for email service integration
#[async_trait]
pub trait EmailServiceTrait: Send + Sync {
    /// Send a plain-text email, returning the provider message id
    async fn send_email(
        &self,
        from: &str,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<String, String>;
}

#[async_trait]
impl<T: SmsServiceTrait + ?Sized> SmsServiceTrait for Box<T> {
    async fn send_sms(&self, phone: &str, message: &str) -> Result<String, String> {
        (**self).send_sms(phone, message).await
    }
}

#[async_trait]
impl<T: EmailServiceTrait + ?Sized> EmailServiceTrait for Box<T> {
    async fn send_email(
        &self,
        from: &str,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<String, String> {
        (**self).send_email(from, to, subject, body).await
    }
}
