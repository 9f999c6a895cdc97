//! Mapping of domain errors to HTTP responses
//!
//! Every response body is a bare JSON string. Internal error detail is logged
//! here and never sent to the caller.

use actix_web::{http::StatusCode, HttpResponse};

use otp_core::errors::{DomainError, StorageOperation};

pub const SEND_SUCCESS_MESSAGE: &str = "OTP sent successfully";
pub const VERIFY_SUCCESS_MESSAGE: &str = "OTP verified successfully";

/// Status code and public message for a domain error
pub fn status_and_message(error: &DomainError) -> (StatusCode, &'static str) {
    match error {
        DomainError::MalformedRequest { .. } => (StatusCode::BAD_REQUEST, "Invalid request body"),
        DomainError::Storage {
            operation: StorageOperation::Write,
            ..
        } => (StatusCode::INTERNAL_SERVER_ERROR, "Failed to store OTP"),
        DomainError::Storage {
            operation: StorageOperation::Read,
            ..
        } => (StatusCode::INTERNAL_SERVER_ERROR, "Failed to retrieve OTP"),
        DomainError::InvalidChannel { .. } => (StatusCode::BAD_REQUEST, "Invalid method"),
        DomainError::Dispatch { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "Failed to send OTP"),
        DomainError::NotFound => (StatusCode::BAD_REQUEST, "No OTP found"),
        DomainError::Expired { .. } => (StatusCode::BAD_REQUEST, "OTP expired"),
        DomainError::Mismatch => (StatusCode::BAD_REQUEST, "Invalid OTP"),
        DomainError::UnknownOperation { .. } => (StatusCode::NOT_FOUND, "Not Found"),
    }
}

/// Response whose body is `message` encoded as a JSON string
pub fn message_response(status: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(status).json(message)
}

/// Handle domain errors and convert them to the matching HTTP response
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let (status, message) = status_and_message(error);

    if status.is_server_error() {
        log::error!("Domain Error: {}", error);
    } else {
        log::warn!("Domain Error: {}", error);
    }

    message_response(status, message)
}
