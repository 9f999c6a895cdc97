//! Notification Module
//!
//! SMS and email providers for delivering OTPs.
//!
//! - **Mock**: logs and records messages instead of sending them
//! - **AWS**: SNS for SMS, SES for email (feature `aws`)

use tracing::{info, warn};

use otp_core::services::{EmailServiceTrait, SmsServiceTrait};
use otp_shared::{AwsConfig, NotificationConfig, NotificationProvider};

use crate::InfrastructureError;

pub mod mock;

#[cfg(feature = "aws")]
pub mod aws_ses;
#[cfg(feature = "aws")]
pub mod aws_sns;

pub use mock::{DeliveredMessage, MockEmailService, MockSmsService};

#[cfg(feature = "aws")]
pub use aws_ses::AwsSesEmailService;
#[cfg(feature = "aws")]
pub use aws_sns::AwsSnsSmsService;

/// The pair of providers selected by configuration
pub struct Notifiers {
    pub sms: Box<dyn SmsServiceTrait>,
    pub email: Box<dyn EmailServiceTrait>,
}

/// Create the SMS and email providers selected by configuration
///
/// # Arguments
///
/// * `notification` - Provider selection
/// * `aws` - AWS settings, used by the `aws` provider
pub async fn create_notifiers(
    notification: &NotificationConfig,
    aws: &AwsConfig,
) -> Result<Notifiers, InfrastructureError> {
    match notification.provider {
        NotificationProvider::Mock => {
            warn!("Using mock notification providers; OTPs are printed, not delivered");
            Ok(Notifiers {
                sms: Box::new(MockSmsService::new()),
                email: Box::new(MockEmailService::new()),
            })
        }
        NotificationProvider::Aws => {
            #[cfg(feature = "aws")]
            {
                let sdk_config = crate::aws::load_sdk_config(aws).await;
                info!(
                    sender = %notification.sender_address,
                    "Using AWS SNS / SES notification providers"
                );
                Ok(Notifiers {
                    sms: Box::new(AwsSnsSmsService::new(&sdk_config)),
                    email: Box::new(AwsSesEmailService::new(&sdk_config)),
                })
            }
            #[cfg(not(feature = "aws"))]
            {
                let _ = aws;
                Err(InfrastructureError::Config(
                    "aws notification provider requires the `aws` feature".to_string(),
                ))
            }
        }
    }
}
