//! AWS SNS SMS provider
//!
//! Sends each OTP as a single transactional SMS through `Publish`. Failures
//! are returned to the caller as-is; there is no retry.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_sns::{error::DisplayErrorContext, types::MessageAttributeValue, Client as SnsClient};
use std::collections::HashMap;
use tracing::{error, info};

use otp_core::services::SmsServiceTrait;
use otp_shared::mask_identifier;

/// SMS type attribute understood by SNS
const SMS_TYPE_ATTRIBUTE: &str = "AWS.SNS.SMS.SMSType";

/// OTPs are always transactional
const SMS_TYPE_TRANSACTIONAL: &str = "Transactional";

/// AWS SNS SMS service implementation
pub struct AwsSnsSmsService {
    client: SnsClient,
}

impl AwsSnsSmsService {
    /// Create a new AWS SNS SMS service
    pub fn new(sdk_config: &SdkConfig) -> Self {
        info!(region = ?sdk_config.region(), "AWS SNS SMS service initialized");
        Self {
            client: SnsClient::new(sdk_config),
        }
    }

    fn sms_attributes() -> Result<HashMap<String, MessageAttributeValue>, String> {
        let sms_type = MessageAttributeValue::builder()
            .data_type("String")
            .string_value(SMS_TYPE_TRANSACTIONAL)
            .build()
            .map_err(|e| format!("Invalid SNS message attribute: {}", e))?;

        Ok(HashMap::from([(SMS_TYPE_ATTRIBUTE.to_string(), sms_type)]))
    }
}

#[async_trait]
impl SmsServiceTrait for AwsSnsSmsService {
    async fn send_sms(&self, phone: &str, message: &str) -> Result<String, String> {
        let masked_phone = mask_identifier(phone);

        let response = self
            .client
            .publish()
            .phone_number(phone)
            .message(message)
            .set_message_attributes(Some(Self::sms_attributes()?))
            .send()
            .await
            .map_err(|e| {
                error!(
                    provider = "aws-sns",
                    phone = %masked_phone,
                    "Failed to send SMS: {}",
                    DisplayErrorContext(&e)
                );
                format!("AWS SNS publish failed: {}", DisplayErrorContext(&e))
            })?;

        let message_id = response.message_id().unwrap_or("unknown").to_string();

        info!(
            provider = "aws-sns",
            phone = %masked_phone,
            message_id = %message_id,
            "SMS sent successfully"
        );

        Ok(message_id)
    }
}
