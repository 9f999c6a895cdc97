//! Mock notification providers
//!
//! Both providers log the message instead of delivering it and keep a copy of
//! everything they were asked to send, so development setups and tests can
//! read the code back.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

use otp_core::services::{EmailServiceTrait, SmsServiceTrait};
use otp_shared::mask_identifier;

/// A message captured by a mock provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveredMessage {
    /// Sender address (email only)
    pub from: Option<String>,
    /// Recipient phone number or email address
    pub to: String,
    /// Subject line (email only)
    pub subject: Option<String>,
    /// Message text
    pub body: String,
}

/// State shared by clones of a mock provider
#[derive(Default)]
struct Outbox {
    messages: Mutex<Vec<DeliveredMessage>>,
    count: AtomicU64,
    simulate_failure: AtomicBool,
    console_output: AtomicBool,
}

impl Outbox {
    fn new(console_output: bool) -> Arc<Self> {
        let outbox = Self::default();
        outbox.console_output.store(console_output, Ordering::SeqCst);
        Arc::new(outbox)
    }

    async fn push(&self, message: DeliveredMessage) -> u64 {
        self.messages.lock().await.push(message);
        self.count.fetch_add(1, Ordering::SeqCst) + 1
    }
}

/// Mock SMS service for development and testing
#[derive(Clone)]
pub struct MockSmsService {
    outbox: Arc<Outbox>,
}

impl MockSmsService {
    /// Create a mock service that prints each message to the console
    pub fn new() -> Self {
        Self {
            outbox: Outbox::new(true),
        }
    }

    /// Create a mock service with configurable options
    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        let service = Self {
            outbox: Outbox::new(console_output),
        };
        service.set_simulate_failure(simulate_failure);
        service
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&self, simulate: bool) {
        self.outbox.simulate_failure.store(simulate, Ordering::SeqCst);
    }

    /// Total number of messages sent
    pub fn message_count(&self) -> u64 {
        self.outbox.count.load(Ordering::SeqCst)
    }

    /// Every message sent so far, oldest first
    pub async fn messages(&self) -> Vec<DeliveredMessage> {
        self.outbox.messages.lock().await.clone()
    }

    /// The most recent message, if any
    pub async fn last_message(&self) -> Option<DeliveredMessage> {
        self.outbox.messages.lock().await.last().cloned()
    }
}

impl Default for MockSmsService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SmsServiceTrait for MockSmsService {
    async fn send_sms(&self, phone: &str, message: &str) -> Result<String, String> {
        let masked_phone = mask_identifier(phone);

        if self.outbox.simulate_failure.load(Ordering::SeqCst) {
            warn!(
                provider = "mock",
                phone = %masked_phone,
                "Mock SMS service simulating failure"
            );
            return Err("Simulated SMS sending failure".to_string());
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self
            .outbox
            .push(DeliveredMessage {
                from: None,
                to: phone.to_string(),
                subject: None,
                body: message.to_string(),
            })
            .await;

        if self.outbox.console_output.load(Ordering::SeqCst) {
            println!("\n{}", "=".repeat(60));
            println!("MOCK SMS SERVICE - MESSAGE #{}", count);
            println!("{}", "=".repeat(60));
            println!("To: {}", phone);
            println!("Message ID: {}", message_id);
            println!("Content: {}", message);
            println!("{}\n", "=".repeat(60));
        }

        info!(
            provider = "mock",
            phone = %masked_phone,
            message_id = %message_id,
            message_length = message.len(),
            "SMS sent successfully (mock)"
        );

        Ok(message_id)
    }
}

/// Mock email service for development and testing
#[derive(Clone)]
pub struct MockEmailService {
    outbox: Arc<Outbox>,
}

impl MockEmailService {
    /// Create a mock service that prints each message to the console
    pub fn new() -> Self {
        Self {
            outbox: Outbox::new(true),
        }
    }

    /// Create a mock service with configurable options
    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        let service = Self {
            outbox: Outbox::new(console_output),
        };
        service.set_simulate_failure(simulate_failure);
        service
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&self, simulate: bool) {
        self.outbox.simulate_failure.store(simulate, Ordering::SeqCst);
    }

    /// Total number of messages sent
    pub fn message_count(&self) -> u64 {
        self.outbox.count.load(Ordering::SeqCst)
    }

    /// Every message sent so far, oldest first
    pub async fn messages(&self) -> Vec<DeliveredMessage> {
        self.outbox.messages.lock().await.clone()
    }

    /// The most recent message, if any
    pub async fn last_message(&self) -> Option<DeliveredMessage> {
        self.outbox.messages.lock().await.last().cloned()
    }
}

impl Default for MockEmailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailServiceTrait for MockEmailService {
    async fn send_email(
        &self,
        from: &str,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<String, String> {
        let masked_to = mask_identifier(to);

        if self.outbox.simulate_failure.load(Ordering::SeqCst) {
            warn!(
                provider = "mock",
                to = %masked_to,
                "Mock email service simulating failure"
            );
            return Err("Simulated email sending failure".to_string());
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self
            .outbox
            .push(DeliveredMessage {
                from: Some(from.to_string()),
                to: to.to_string(),
                subject: Some(subject.to_string()),
                body: body.to_string(),
            })
            .await;

        if self.outbox.console_output.load(Ordering::SeqCst) {
            println!("\n{}", "=".repeat(60));
            println!("MOCK EMAIL SERVICE - MESSAGE #{}", count);
            println!("{}", "=".repeat(60));
            println!("From: {}", from);
            println!("To: {}", to);
            println!("Subject: {}", subject);
            println!("Message ID: {}", message_id);
            println!("Content: {}", body);
            println!("{}\n", "=".repeat(60));
        }

        info!(
            provider = "mock",
            to = %masked_to,
            message_id = %message_id,
            "Email sent successfully (mock)"
        );

        Ok(message_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_sms_send_success() {
        let service = MockSmsService::with_options(false, false);
        let message_id = service.send_sms("+15551234567", "Your OTP is: 123456").await.unwrap();

        assert!(message_id.starts_with("mock_"));
        assert_eq!(service.message_count(), 1);

        let sent = service.last_message().await.unwrap();
        assert_eq!(sent.to, "+15551234567");
        assert_eq!(sent.body, "Your OTP is: 123456");
        assert!(sent.from.is_none());
    }

    #[tokio::test]
    async fn test_mock_sms_simulate_failure() {
        let service = MockSmsService::with_options(false, true);

        assert!(service.send_sms("+15551234567", "Test").await.is_err());
        assert_eq!(service.message_count(), 0);

        service.set_simulate_failure(false);
        assert!(service.send_sms("+15551234567", "Test").await.is_ok());
    }

    #[tokio::test]
    async fn test_clones_share_outbox() {
        let service = MockSmsService::with_options(false, false);
        let clone = service.clone();

        clone.send_sms("+15551234567", "one").await.unwrap();
        clone.send_sms("+15551234567", "two").await.unwrap();

        let bodies: Vec<String> = service.messages().await.into_iter().map(|m| m.body).collect();
        assert_eq!(bodies, vec!["one", "two"]);
    }

    #[tokio::test]
    async fn test_mock_email_records_envelope() {
        let service = MockEmailService::with_options(false, false);
        service
            .send_email("noreply@example.com", "jane@example.com", "Your OTP", "Your OTP is: 000007")
            .await
            .unwrap();

        let sent = service.last_message().await.unwrap();
        assert_eq!(sent.from.as_deref(), Some("noreply@example.com"));
        assert_eq!(sent.to, "jane@example.com");
        assert_eq!(sent.subject.as_deref(), Some("Your OTP"));
        assert_eq!(sent.body, "Your OTP is: 000007");
    }

    #[tokio::test]
    async fn test_mock_email_simulate_failure() {
        let service = MockEmailService::with_options(false, true);
        let result = service
            .send_email("noreply@example.com", "jane@example.com", "Your OTP", "body")
            .await;

        assert!(result.is_err());
        assert!(service.messages().await.is_empty());
    }
}
