//! Loading of the AWS SDK configuration

use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::Credentials;
use tracing::info;

use otp_shared::AwsConfig;

/// Build the SDK configuration for the configured region
///
/// Static credentials are used when both halves are configured; otherwise the
/// default AWS credential chain (environment, profile, instance role) applies.
pub async fn load_sdk_config(config: &AwsConfig) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()));

    if let Some((access_key_id, secret_access_key)) = config.static_credentials() {
        loader = loader.credentials_provider(Credentials::new(
            access_key_id,
            secret_access_key,
            None,
            None,
            "otp_gateway_static",
        ));
        info!(region = %config.region, "Using static AWS credentials");
    } else {
        info!(region = %config.region, "Using default AWS credential chain");
    }

    loader.load().await
}
