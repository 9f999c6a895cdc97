//! In-memory implementation of OtpRepository for development and testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::OtpRecord;
use crate::errors::DomainError;

use super::repository::OtpRepository;

/// Process-local OTP store
///
/// Records are kept per identifier in insertion order. When two records share
/// the greatest `created_at`, the one inserted last wins.
#[derive(Clone, Default)]
pub struct InMemoryOtpRepository {
    records: Arc<RwLock<HashMap<String, Vec<OtpRecord>>>>,
}

impl InMemoryOtpRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// All records stored for an identifier, oldest insert first
    pub async fn records_for(&self, identifier: &str) -> Vec<OtpRecord> {
        let records = self.records.read().await;
        records.get(identifier).cloned().unwrap_or_default()
    }

    /// Total number of stored records across identifiers
    pub async fn len(&self) -> usize {
        let records = self.records.read().await;
        records.values().map(Vec::len).sum()
    }

    /// Whether nothing has been stored yet
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl OtpRepository for InMemoryOtpRepository {
    async fn insert(&self, record: &OtpRecord) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        records
            .entry(record.identifier.clone())
            .or_default()
            .push(record.clone());
        Ok(())
    }

    async fn lookup_latest(&self, identifier: &str) -> Result<Option<OtpRecord>, DomainError> {
        let records = self.records.read().await;
        // `max_by_key` returns the last maximum, so ties go to the latest insert
        Ok(records
            .get(identifier)
            .and_then(|list| list.iter().max_by_key(|record| record.created_at))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lookup_missing_identifier() {
        let repo = InMemoryOtpRepository::new();
        assert!(repo.lookup_latest("+15551234567").await.unwrap().is_none());
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_lookup_returns_greatest_created_at() {
        let repo = InMemoryOtpRepository::new();
        repo.insert(&OtpRecord::new("a@example.com", "222222", 200)).await.unwrap();
        repo.insert(&OtpRecord::new("a@example.com", "111111", 100)).await.unwrap();
        repo.insert(&OtpRecord::new("b@example.com", "333333", 300)).await.unwrap();

        let latest = repo.lookup_latest("a@example.com").await.unwrap().unwrap();
        assert_eq!(latest.otp, "222222");
        assert_eq!(latest.created_at, 200);
        assert_eq!(repo.len().await, 3);
    }

    #[tokio::test]
    async fn test_ties_resolve_to_last_insert() {
        let repo = InMemoryOtpRepository::new();
        repo.insert(&OtpRecord::new("+15551234567", "111111", 100)).await.unwrap();
        repo.insert(&OtpRecord::new("+15551234567", "222222", 100)).await.unwrap();

        let latest = repo.lookup_latest("+15551234567").await.unwrap().unwrap();
        assert_eq!(latest.otp, "222222");
    }

    #[tokio::test]
    async fn test_records_are_never_removed() {
        let repo = InMemoryOtpRepository::new();
        for (i, otp) in ["000001", "000002", "000003"].iter().enumerate() {
            repo.insert(&OtpRecord::new("+15551234567", *otp, i as i64)).await.unwrap();
        }

        let records = repo.records_for("+15551234567").await;
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].otp, "000001");
    }
}
