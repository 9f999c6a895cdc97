//! OTP repository trait defining the interface for OTP record persistence.

use async_trait::async_trait;

use crate::domain::entities::OtpRecord;
use crate::errors::DomainError;

/// Repository trait for OtpRecord persistence operations
///
/// Records are append-only: there is no update or delete. Implementations
/// report backend failures as `DomainError::Storage` with the matching
/// `StorageOperation`.
///
/// No ordering is guaranteed between concurrent inserts that share a
/// `created_at`; which one `lookup_latest` returns is backend-defined.
#[async_trait]
pub trait OtpRepository: Send + Sync {
    /// Append a new record
    ///
    /// # Arguments
    /// * `record` - The record to persist
    ///
    /// # Returns
    /// * `Ok(())` - Record durably written
    /// * `Err(DomainError::Storage)` - Backend unreachable or write rejected
    async fn insert(&self, record: &OtpRecord) -> Result<(), DomainError>;

    /// Find the record with the greatest `created_at` for an identifier
    ///
    /// # Arguments
    /// * `identifier` - Phone number or email address
    ///
    /// # Returns
    /// * `Ok(Some(OtpRecord))` - Most recent record
    /// * `Ok(None)` - No record was ever stored for the identifier
    /// * `Err(DomainError::Storage)` - Backend failure
    async fn lookup_latest(&self, identifier: &str) -> Result<Option<OtpRecord>, DomainError>;
}

#[async_trait]
impl<T: OtpRepository + ?Sized> OtpRepository for Box<T> {
    async fn insert(&self, record: &OtpRecord) -> Result<(), DomainError> {
        (**self).insert(record).await
    }

    async fn lookup_latest(&self, identifier: &str) -> Result<Option<OtpRecord>, DomainError> {
        (**self).lookup_latest(identifier).await
    }
}
