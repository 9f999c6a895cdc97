//! Unit tests for the OTP service

use std::sync::Arc;

use crate::domain::entities::{OtpRecord, OTP_LENGTH};
use crate::domain::value_objects::DeliveryMethod;
use crate::errors::{DomainError, StorageOperation};
use crate::repositories::{InMemoryOtpRepository, OtpRepository};
use crate::services::otp::{
    FixedRandomSource, ManualClock, NotificationDispatcher, OtpGenerator, OtpService,
    OtpServiceConfig,
};

use super::mocks::{FailingOtpRepository, MockEmailService, MockSmsService};

const PHONE: &str = "+15551234567";
const EMAIL: &str = "jane@example.com";
const START: i64 = 1_700_000_000;

struct Harness<R: OtpRepository> {
    service: OtpService<R, MockSmsService, MockEmailService>,
    repository: Arc<R>,
    sms: Arc<MockSmsService>,
    email: Arc<MockEmailService>,
    clock: Arc<ManualClock>,
}

fn harness_with<R: OtpRepository>(repository: R, random: &[u32], sms_fails: bool) -> Harness<R> {
    let repository = Arc::new(repository);
    let sms = Arc::new(MockSmsService::new(sms_fails));
    let email = Arc::new(MockEmailService::new(false));
    let clock = Arc::new(ManualClock::new(START));

    let dispatcher = NotificationDispatcher::new(sms.clone(), email.clone(), "notifications.otp@evacrane.com");
    let service = OtpService::new(repository.clone(), dispatcher, OtpServiceConfig::default())
        .with_clock(clock.clone())
        .with_generator(OtpGenerator::new(Arc::new(FixedRandomSource::new(random.to_vec()))));

    Harness {
        service,
        repository,
        sms,
        email,
        clock,
    }
}

fn harness(random: &[u32]) -> Harness<InMemoryOtpRepository> {
    harness_with(InMemoryOtpRepository::new(), random, false)
}

#[tokio::test]
async fn test_send_otp_sms_stores_and_dispatches_same_code() {
    let h = harness(&[7]);

    let result = h.service.send_otp(PHONE, DeliveryMethod::Sms).await.unwrap();

    assert_eq!(result.record, OtpRecord::new(PHONE, "000007", START));
    assert_eq!(result.method, DeliveryMethod::Sms);
    assert_eq!(result.message_id, "mock-sms-1");

    let stored = h.repository.records_for(PHONE).await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].otp.len(), OTP_LENGTH);

    let sent = h.sms.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, PHONE);
    assert_eq!(sent[0].body, format!("Your OTP is: {}", stored[0].otp));
}

#[tokio::test]
async fn test_send_otp_email() {
    let h = harness(&[123_456]);

    h.service.send_otp(EMAIL, DeliveryMethod::Email).await.unwrap();

    let sent = h.email.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, EMAIL);
    assert_eq!(sent[0].subject.as_deref(), Some("Your OTP"));
    assert_eq!(sent[0].body, "Your OTP is: 123456");
    assert!(h.sms.sent().is_empty());
}

#[tokio::test]
async fn test_send_otp_storage_failure_skips_dispatch() {
    let h = harness_with(
        FailingOtpRepository {
            fail_insert: true,
            fail_lookup: false,
        },
        &[1],
        false,
    );

    match h.service.send_otp(PHONE, DeliveryMethod::Sms).await {
        Err(DomainError::Storage { operation, .. }) => assert_eq!(operation, StorageOperation::Write),
        other => panic!("Expected storage write error, got {:?}", other),
    }
    assert!(h.sms.sent().is_empty());
}

#[tokio::test]
async fn test_dispatch_failure_keeps_record_verifiable() {
    let h = harness_with(InMemoryOtpRepository::new(), &[654_321], true);

    let result = h.service.send_otp(PHONE, DeliveryMethod::Sms).await;
    assert!(matches!(result, Err(DomainError::Dispatch { .. })));

    assert_eq!(h.repository.records_for(PHONE).await.len(), 1);
    assert!(h.service.verify_otp(PHONE, "654321").await.is_ok());
}

#[tokio::test]
async fn test_verify_correct_and_incorrect_code() {
    let h = harness(&[42]);
    h.service.send_otp(PHONE, DeliveryMethod::Sms).await.unwrap();
    h.clock.advance(120);

    let verified = h.service.verify_otp(PHONE, "000042").await.unwrap();
    assert_eq!(verified.created_at, START);
    assert_eq!(verified.age_seconds, 120);

    assert!(matches!(
        h.service.verify_otp(PHONE, "000043").await,
        Err(DomainError::Mismatch)
    ));
}

#[tokio::test]
async fn test_verify_does_not_consume_record() {
    let h = harness(&[42]);
    h.service.send_otp(PHONE, DeliveryMethod::Sms).await.unwrap();

    assert!(h.service.verify_otp(PHONE, "000042").await.is_ok());
    assert!(h.service.verify_otp(PHONE, "000042").await.is_ok());
}

#[tokio::test]
async fn test_verify_expiry_boundary() {
    let h = harness(&[42]);
    h.service.send_otp(PHONE, DeliveryMethod::Sms).await.unwrap();

    h.clock.set(START + 300);
    assert!(h.service.verify_otp(PHONE, "000042").await.is_ok());

    h.clock.set(START + 301);
    match h.service.verify_otp(PHONE, "000042").await {
        Err(DomainError::Expired { age_seconds }) => assert_eq!(age_seconds, 301),
        other => panic!("Expected expired error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_expiry_checked_before_match() {
    let h = harness(&[42]);
    h.service.send_otp(PHONE, DeliveryMethod::Sms).await.unwrap();
    h.clock.advance(1_000);

    assert!(matches!(
        h.service.verify_otp(PHONE, "999999").await,
        Err(DomainError::Expired { .. })
    ));
}

#[tokio::test]
async fn test_verify_unknown_identifier() {
    let h = harness(&[42]);
    h.service.send_otp(PHONE, DeliveryMethod::Sms).await.unwrap();

    assert!(matches!(
        h.service.verify_otp("+15550000000", "000042").await,
        Err(DomainError::NotFound)
    ));
}

#[tokio::test]
async fn test_only_latest_record_is_checked() {
    let h = harness(&[111_111, 222_222]);

    h.service.send_otp(PHONE, DeliveryMethod::Sms).await.unwrap();
    h.clock.advance(10);
    h.service.send_otp(PHONE, DeliveryMethod::Sms).await.unwrap();

    assert_eq!(h.repository.records_for(PHONE).await.len(), 2);
    assert!(matches!(
        h.service.verify_otp(PHONE, "111111").await,
        Err(DomainError::Mismatch)
    ));
    assert!(h.service.verify_otp(PHONE, "222222").await.is_ok());
}

#[tokio::test]
async fn test_expired_latest_record_shadows_older_records() {
    let h = harness(&[7]);
    h.repository
        .insert(&OtpRecord::new(PHONE, "000001", START - 1_000))
        .await
        .unwrap();
    h.repository
        .insert(&OtpRecord::new(PHONE, "000002", START - 400))
        .await
        .unwrap();

    assert!(matches!(
        h.service.verify_otp(PHONE, "000002").await,
        Err(DomainError::Expired { age_seconds: 400 })
    ));
}

#[tokio::test]
async fn test_verify_lookup_failure_is_read_error() {
    let h = harness_with(
        FailingOtpRepository {
            fail_insert: false,
            fail_lookup: true,
        },
        &[1],
        false,
    );

    match h.service.verify_otp(PHONE, "000001").await {
        Err(DomainError::Storage { operation, message }) => {
            assert_eq!(operation, StorageOperation::Read);
            assert_eq!(message, "connection refused");
        }
        other => panic!("Expected storage read error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_custom_expiry_window() {
    let repository = Arc::new(InMemoryOtpRepository::new());
    let clock = Arc::new(ManualClock::new(START));
    let dispatcher = NotificationDispatcher::new(
        Arc::new(MockSmsService::new(false)),
        Arc::new(MockEmailService::new(false)),
        "sender@example.com",
    );
    let service = OtpService::new(repository, dispatcher, OtpServiceConfig { expiry_seconds: 60 })
        .with_clock(clock.clone())
        .with_generator(OtpGenerator::new(Arc::new(FixedRandomSource::new(vec![5]))));

    service.send_otp(PHONE, DeliveryMethod::Sms).await.unwrap();
    clock.advance(61);

    assert!(matches!(
        service.verify_otp(PHONE, "000005").await,
        Err(DomainError::Expired { .. })
    ));
}
