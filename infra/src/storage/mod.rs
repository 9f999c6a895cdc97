//! OTP record stores
//!
//! - **DynamoDB**: table keyed by `Identifier` (partition) and `CreatedAt` (sort)
//! - **Redis**: one sorted set per identifier scored by creation time
//! - **Memory**: `otp_core::InMemoryOtpRepository`, for development

use tracing::{info, warn};

use otp_core::repositories::{InMemoryOtpRepository, OtpRepository};
use otp_shared::{AwsConfig, StorageBackend, StorageConfig};

use crate::InfrastructureError;

#[cfg(feature = "aws")]
pub mod dynamodb;

#[cfg(feature = "redis-store")]
pub mod redis_store;

#[cfg(feature = "aws")]
pub use dynamodb::DynamoDbOtpRepository;

#[cfg(feature = "redis-store")]
pub use redis_store::RedisOtpRepository;

/// Create the OTP repository selected by configuration
///
/// # Arguments
///
/// * `storage` - Storage backend settings
/// * `aws` - AWS settings, used by the DynamoDB backend
///
/// # Returns
///
/// A boxed repository, or a configuration error when the backend is not
/// compiled in or cannot be reached
pub async fn create_otp_repository(
    storage: &StorageConfig,
    aws: &AwsConfig,
) -> Result<Box<dyn OtpRepository>, InfrastructureError> {
    match storage.backend {
        StorageBackend::Memory => {
            warn!("Using in-memory OTP storage; records are lost on restart");
            Ok(Box::new(InMemoryOtpRepository::new()))
        }
        StorageBackend::DynamoDb => {
            #[cfg(feature = "aws")]
            {
                let sdk_config = crate::aws::load_sdk_config(aws).await;
                info!(table = %storage.table_name, "Using DynamoDB OTP storage");
                Ok(Box::new(DynamoDbOtpRepository::new(&sdk_config, &storage.table_name)))
            }
            #[cfg(not(feature = "aws"))]
            {
                let _ = aws;
                Err(InfrastructureError::Config(
                    "dynamodb storage requires the `aws` feature".to_string(),
                ))
            }
        }
        StorageBackend::Redis => {
            #[cfg(feature = "redis-store")]
            {
                let repository = RedisOtpRepository::connect(&storage.redis_url).await?;
                info!("Using Redis OTP storage");
                Ok(Box::new(repository))
            }
            #[cfg(not(feature = "redis-store"))]
            {
                Err(InfrastructureError::Config(
                    "redis storage requires the `redis-store` feature".to_string(),
                ))
            }
        }
    }
}
