use actix_web::{http::StatusCode, web, HttpResponse};
use uuid::Uuid;

use crate::dto::{parse_request, VerifyOtpRequest};
use crate::handlers::error::{handle_domain_error, message_response, VERIFY_SUCCESS_MESSAGE};

use otp_core::repositories::OtpRepository;
use otp_core::services::{EmailServiceTrait, SmsServiceTrait};
use otp_shared::mask_identifier;

use super::AppState;

/// Handler for POST /verify-otp
///
/// # Request Body
///
/// ```json
/// {
///     "identifier": "+15551234567",
///     "otp": "123456"
/// }
/// ```
///
/// # Responses
///
/// - 200 `"OTP verified successfully"`
/// - 400 `"Invalid request body"` / `"No OTP found"` / `"OTP expired"` / `"Invalid OTP"`
/// - 500 `"Failed to retrieve OTP"`
pub async fn verify_otp<R, S, E>(state: web::Data<AppState<R, S, E>>, body: web::Bytes) -> HttpResponse
where
    R: OtpRepository + 'static,
    S: SmsServiceTrait + 'static,
    E: EmailServiceTrait + 'static,
{
    let request_id = Uuid::new_v4();

    let request: VerifyOtpRequest = match parse_request(&body) {
        Ok(request) => request,
        Err(error) => {
            log::warn!("[{}] Rejected verify_otp request body", request_id);
            return handle_domain_error(&error);
        }
    };

    let masked = mask_identifier(&request.identifier);
    log::info!("[{}] Processing verify_otp request for: {}", request_id, masked);

    match state.otp_service.verify_otp(&request.identifier, &request.otp).await {
        Ok(result) => {
            log::info!(
                "[{}] OTP verified for: {}, age: {}s",
                request_id,
                masked,
                result.age_seconds
            );
            message_response(StatusCode::OK, VERIFY_SUCCESS_MESSAGE)
        }
        Err(error) => {
            log::warn!("[{}] Verification failed for: {}", request_id, masked);
            handle_domain_error(&error)
        }
    }
}
