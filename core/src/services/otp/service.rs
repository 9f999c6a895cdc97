//! Main OTP service implementation

use std::sync::Arc;

use otp_shared::mask_identifier;

use crate::domain::entities::OtpRecord;
use crate::domain::value_objects::DeliveryMethod;
use crate::errors::{DomainError, DomainResult, StorageOperation};
use crate::repositories::OtpRepository;

use super::clock::{Clock, SystemClock};
use super::config::OtpServiceConfig;
use super::dispatcher::NotificationDispatcher;
use super::generator::OtpGenerator;
use super::traits::{EmailServiceTrait, SmsServiceTrait};
use super::types::{SendOtpResult, VerifyOtpResult};

/// OTP service for issuing and verifying one-time passcodes
pub struct OtpService<R: OtpRepository, S: SmsServiceTrait, E: EmailServiceTrait> {
    /// Record storage
    repository: Arc<R>,
    /// SMS / email delivery
    dispatcher: NotificationDispatcher<S, E>,
    /// Code generator
    generator: OtpGenerator,
    /// Wall clock
    clock: Arc<dyn Clock>,
    /// Service configuration
    config: OtpServiceConfig,
}

impl<R: OtpRepository, S: SmsServiceTrait, E: EmailServiceTrait> OtpService<R, S, E> {
    /// Create a new OTP service using the system clock and the OS random source
    ///
    /// # Arguments
    ///
    /// * `repository` - OTP record store
    /// * `dispatcher` - Notification dispatcher
    /// * `config` - Service configuration
    pub fn new(
        repository: Arc<R>,
        dispatcher: NotificationDispatcher<S, E>,
        config: OtpServiceConfig,
    ) -> Self {
        Self {
            repository,
            dispatcher,
            generator: OtpGenerator::default(),
            clock: Arc::new(SystemClock),
            config,
        }
    }

    /// Replace the clock
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the code generator
    pub fn with_generator(mut self, generator: OtpGenerator) -> Self {
        self.generator = generator;
        self
    }

    /// Issue a new OTP and deliver it
    ///
    /// This method:
    /// 1. Generates a new 6-digit code
    /// 2. Stores `{identifier, otp, now}`
    /// 3. Sends the code over the requested channel
    ///
    /// A record that was stored stays stored when delivery fails; it remains
    /// verifiable for its full expiry window.
    ///
    /// # Returns
    ///
    /// * `Ok(SendOtpResult)` - The stored record and the provider message id
    /// * `Err(DomainError::Storage)` - The record could not be written; nothing was sent
    /// * `Err(DomainError::Dispatch)` - The record was written but delivery failed
    pub async fn send_otp(&self, identifier: &str, method: DeliveryMethod) -> DomainResult<SendOtpResult> {
        let masked = mask_identifier(identifier);

        let otp = self.generator.generate();
        let record = OtpRecord::new(identifier, otp, self.clock.now());

        tracing::info!(
            identifier = %masked,
            method = %method,
            created_at = record.created_at,
            event = "otp_generated",
            "Generated new OTP"
        );

        self.repository
            .insert(&record)
            .await
            .map_err(|e| as_storage_error(StorageOperation::Write, e))
            .map_err(|e| {
                tracing::error!(
                    identifier = %masked,
                    error = %e,
                    event = "otp_storage_failed",
                    "Failed to store OTP"
                );
                e
            })?;

        let message_id = self
            .dispatcher
            .send(method, identifier, &record.otp)
            .await
            .map_err(|e| {
                tracing::error!(
                    identifier = %masked,
                    method = %method,
                    error = %e,
                    event = "otp_dispatch_failed",
                    "Failed to send OTP; stored record is left in place"
                );
                e
            })?;

        tracing::info!(
            identifier = %masked,
            method = %method,
            message_id = %message_id,
            event = "otp_sent",
            "OTP sent"
        );

        Ok(SendOtpResult {
            record,
            method,
            message_id,
        })
    }

    /// Verify a submitted OTP against the most recent record for an identifier
    ///
    /// This method:
    /// 1. Fetches the latest record for the identifier
    /// 2. Rejects it if older than the expiry window
    /// 3. Compares the submitted code with the stored one
    ///
    /// Verification never consumes the record.
    ///
    /// # Returns
    ///
    /// * `Ok(VerifyOtpResult)` - The code matched
    /// * `Err(DomainError::Storage)` - The lookup failed
    /// * `Err(DomainError::NotFound)` - No record exists for the identifier
    /// * `Err(DomainError::Expired)` - The latest record is too old
    /// * `Err(DomainError::Mismatch)` - The code does not match the latest record
    pub async fn verify_otp(&self, identifier: &str, otp: &str) -> DomainResult<VerifyOtpResult> {
        let masked = mask_identifier(identifier);

        let record = self
            .repository
            .lookup_latest(identifier)
            .await
            .map_err(|e| as_storage_error(StorageOperation::Read, e))
            .map_err(|e| {
                tracing::error!(
                    identifier = %masked,
                    error = %e,
                    event = "otp_lookup_failed",
                    "Failed to retrieve OTP"
                );
                e
            })?
            .ok_or_else(|| {
                tracing::warn!(identifier = %masked, event = "otp_not_found", "No OTP found");
                DomainError::NotFound
            })?;

        let now = self.clock.now();
        let age_seconds = record.age_seconds(now);

        if record.is_expired_at(now, self.config.expiry_seconds) {
            tracing::warn!(
                identifier = %masked,
                age_seconds = age_seconds,
                event = "otp_expired",
                "OTP expired"
            );
            return Err(DomainError::Expired { age_seconds });
        }

        if !record.matches(otp) {
            tracing::warn!(
                identifier = %masked,
                event = "otp_verification_failed",
                "Submitted OTP does not match"
            );
            return Err(DomainError::Mismatch);
        }

        tracing::info!(
            identifier = %masked,
            age_seconds = age_seconds,
            event = "otp_verified_success",
            "OTP verified"
        );

        Ok(VerifyOtpResult {
            created_at: record.created_at,
            age_seconds,
        })
    }
}

/// Normalise a repository failure into a storage error for `operation`
fn as_storage_error(operation: StorageOperation, error: DomainError) -> DomainError {
    match error {
        DomainError::Storage { message, .. } => DomainError::Storage { operation, message },
        other => DomainError::Storage {
            operation,
            message: other.to_string(),
        },
    }
}
