//! DynamoDB OTP store
//!
//! Table layout:
//! - `Identifier` (S) - partition key
//! - `CreatedAt` (N) - sort key, Unix epoch seconds
//! - `OTP` (S) - the code
//!
//! Two inserts for the same identifier in the same second share a key, so the
//! later `PutItem` replaces the earlier one.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_dynamodb::{error::DisplayErrorContext, types::AttributeValue, Client as DynamoDbClient};
use std::collections::HashMap;
use tracing::{debug, error};

use otp_core::domain::entities::OtpRecord;
use otp_core::errors::DomainError;
use otp_core::repositories::OtpRepository;
use otp_shared::mask_identifier;

/// Partition key attribute
pub const ATTR_IDENTIFIER: &str = "Identifier";
/// Sort key attribute
pub const ATTR_CREATED_AT: &str = "CreatedAt";
/// Code attribute
pub const ATTR_OTP: &str = "OTP";

/// DynamoDB implementation of `OtpRepository`
pub struct DynamoDbOtpRepository {
    client: DynamoDbClient,
    table_name: String,
}

impl DynamoDbOtpRepository {
    /// Create a repository over `table_name`
    pub fn new(sdk_config: &SdkConfig, table_name: impl Into<String>) -> Self {
        Self::with_client(DynamoDbClient::new(sdk_config), table_name)
    }

    /// Create a repository from an existing client
    pub fn with_client(client: DynamoDbClient, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Table this repository reads and writes
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

/// Attribute map written for a record
pub fn item_from_record(record: &OtpRecord) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (
            ATTR_IDENTIFIER.to_string(),
            AttributeValue::S(record.identifier.clone()),
        ),
        (
            ATTR_CREATED_AT.to_string(),
            AttributeValue::N(record.created_at.to_string()),
        ),
        (ATTR_OTP.to_string(), AttributeValue::S(record.otp.clone())),
    ])
}

/// Parse a queried item back into a record
///
/// A missing or unparsable `OTP` or `CreatedAt` attribute is a read failure.
pub fn record_from_item(
    identifier: &str,
    item: &HashMap<String, AttributeValue>,
) -> Result<OtpRecord, DomainError> {
    let otp = item
        .get(ATTR_OTP)
        .and_then(|value| value.as_s().ok())
        .ok_or_else(|| DomainError::storage_read(format!("item is missing string attribute {}", ATTR_OTP)))?;

    let created_at = item
        .get(ATTR_CREATED_AT)
        .and_then(|value| value.as_n().ok())
        .and_then(|value| value.parse::<i64>().ok())
        .ok_or_else(|| {
            DomainError::storage_read(format!("item has no integer attribute {}", ATTR_CREATED_AT))
        })?;

    let identifier = item
        .get(ATTR_IDENTIFIER)
        .and_then(|value| value.as_s().ok())
        .map(String::as_str)
        .unwrap_or(identifier);

    Ok(OtpRecord::new(identifier, otp.as_str(), created_at))
}

#[async_trait]
impl OtpRepository for DynamoDbOtpRepository {
    async fn insert(&self, record: &OtpRecord) -> Result<(), DomainError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item_from_record(record)))
            .send()
            .await
            .map_err(|e| {
                error!(
                    table = %self.table_name,
                    identifier = %mask_identifier(&record.identifier),
                    "DynamoDB PutItem failed: {}",
                    DisplayErrorContext(&e)
                );
                DomainError::storage_write(format!("DynamoDB PutItem failed: {}", DisplayErrorContext(&e)))
            })?;

        debug!(
            table = %self.table_name,
            identifier = %mask_identifier(&record.identifier),
            "Stored OTP record"
        );
        Ok(())
    }

    async fn lookup_latest(&self, identifier: &str) -> Result<Option<OtpRecord>, DomainError> {
        let output = self
            .client
            .query()
            .table_name(&self.table_name)
            .key_condition_expression("#id = :id")
            .expression_attribute_names("#id", ATTR_IDENTIFIER)
            .expression_attribute_values(":id", AttributeValue::S(identifier.to_string()))
            .scan_index_forward(false)
            .limit(1)
            .send()
            .await
            .map_err(|e| {
                error!(
                    table = %self.table_name,
                    identifier = %mask_identifier(identifier),
                    "DynamoDB Query failed: {}",
                    DisplayErrorContext(&e)
                );
                DomainError::storage_read(format!("DynamoDB Query failed: {}", DisplayErrorContext(&e)))
            })?;

        output
            .items()
            .first()
            .map(|item| record_from_item(identifier, item))
            .transpose()
    }
}
