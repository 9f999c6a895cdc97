//! AWS SES email provider

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_ses::{
    error::DisplayErrorContext,
    types::{Body, Content, Destination, Message},
    Client as SesClient,
};
use tracing::{error, info};

use otp_core::services::EmailServiceTrait;
use otp_shared::mask_identifier;

/// AWS SES email service implementation
pub struct AwsSesEmailService {
    client: SesClient,
}

impl AwsSesEmailService {
    /// Create a new AWS SES email service
    pub fn new(sdk_config: &SdkConfig) -> Self {
        info!(region = ?sdk_config.region(), "AWS SES email service initialized");
        Self {
            client: SesClient::new(sdk_config),
        }
    }
}

/// Plain-text SES message with the given subject and body
pub fn build_message(subject: &str, body: &str) -> Result<Message, String> {
    let subject = Content::builder()
        .data(subject)
        .build()
        .map_err(|e| format!("Invalid email subject: {}", e))?;
    let text = Content::builder()
        .data(body)
        .build()
        .map_err(|e| format!("Invalid email body: {}", e))?;

    Ok(Message::builder()
        .subject(subject)
        .body(Body::builder().text(text).build())
        .build())
}

#[async_trait]
impl EmailServiceTrait for AwsSesEmailService {
    async fn send_email(
        &self,
        from: &str,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<String, String> {
        let masked_to = mask_identifier(to);

        let response = self
            .client
            .send_email()
            .source(from)
            .destination(Destination::builder().to_addresses(to).build())
            .message(build_message(subject, body)?)
            .send()
            .await
            .map_err(|e| {
                error!(
                    provider = "aws-ses",
                    to = %masked_to,
                    "Failed to send email: {}",
                    DisplayErrorContext(&e)
                );
                format!("AWS SES send failed: {}", DisplayErrorContext(&e))
            })?;

        let message_id = response.message_id().to_string();

        info!(
            provider = "aws-ses",
            to = %masked_to,
            message_id = %message_id,
            "Email sent successfully"
        );

        Ok(message_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_message_carries_subject_and_text() {
        let message = build_message("Your OTP", "Your OTP is: 000007").unwrap();
        let rendered = format!("{:?}", message);

        assert!(rendered.contains("Your OTP is: 000007"));
        assert!(rendered.contains("Your OTP"));
    }
}
