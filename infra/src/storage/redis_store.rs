//! Redis OTP store
//!
//! Each identifier owns a sorted set at `otp:records:{identifier}`. Members are
//! JSON-encoded records scored by `created_at`, so the latest record is the
//! highest-scored member.

use async_trait::async_trait;
use redis::{aio::MultiplexedConnection, AsyncCommands, Client};
use tracing::{debug, error, info};

use otp_core::domain::entities::OtpRecord;
use otp_core::errors::DomainError;
use otp_core::repositories::OtpRepository;
use otp_shared::mask_identifier;

use crate::InfrastructureError;

const KEY_PREFIX: &str = "otp:records";

/// Redis implementation of `OtpRepository`
#[derive(Clone)]
pub struct RedisOtpRepository {
    connection: MultiplexedConnection,
}

impl RedisOtpRepository {
    /// Connect to the Redis server at `url`
    pub async fn connect(url: &str) -> Result<Self, InfrastructureError> {
        let client = Client::open(url)?;
        let connection = client.get_multiplexed_async_connection().await?;
        info!("Connected to Redis");
        Ok(Self { connection })
    }
}

/// Sorted-set key holding every record for `identifier`
pub fn records_key(identifier: &str) -> String {
    format!("{}:{}", KEY_PREFIX, identifier)
}

/// Set member stored for a record
pub fn encode_member(record: &OtpRecord) -> Result<String, DomainError> {
    serde_json::to_string(record)
        .map_err(|e| DomainError::storage_write(format!("Failed to encode OTP record: {}", e)))
}

/// Parse a set member back into a record
pub fn decode_member(member: &str) -> Result<OtpRecord, DomainError> {
    serde_json::from_str(member)
        .map_err(|e| DomainError::storage_read(format!("Failed to decode OTP record: {}", e)))
}

#[async_trait]
impl OtpRepository for RedisOtpRepository {
    async fn insert(&self, record: &OtpRecord) -> Result<(), DomainError> {
        let member = encode_member(record)?;
        let mut conn = self.connection.clone();

        let _: () = conn
            .zadd(records_key(&record.identifier), member, record.created_at)
            .await
            .map_err(|e| {
                error!(identifier = %mask_identifier(&record.identifier), "Redis ZADD failed: {}", e);
                DomainError::storage_write(format!("Redis ZADD failed: {}", e))
            })?;

        debug!(identifier = %mask_identifier(&record.identifier), "Stored OTP record");
        Ok(())
    }

    async fn lookup_latest(&self, identifier: &str) -> Result<Option<OtpRecord>, DomainError> {
        let mut conn = self.connection.clone();

        let members: Vec<String> = conn
            .zrevrange(records_key(identifier), 0, 0)
            .await
            .map_err(|e| {
                error!(identifier = %mask_identifier(identifier), "Redis ZREVRANGE failed: {}", e);
                DomainError::storage_read(format!("Redis ZREVRANGE failed: {}", e))
            })?;

        members.first().map(|member| decode_member(member)).transpose()
    }
}
