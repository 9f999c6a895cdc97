use actix_web::{http::StatusCode, web, HttpResponse};
use uuid::Uuid;

use crate::dto::{parse_request, SendOtpRequest};
use crate::handlers::error::{handle_domain_error, message_response, SEND_SUCCESS_MESSAGE};

use otp_core::domain::value_objects::DeliveryMethod;
use otp_core::repositories::OtpRepository;
use otp_core::services::{EmailServiceTrait, SmsServiceTrait};
use otp_shared::mask_identifier;

use super::AppState;

/// Handler for POST /send-otp
///
/// # Request Body
///
/// ```json
/// {
///     "identifier": "+15551234567",
///     "method": "sms"
/// }
/// ```
///
/// # Responses
///
/// - 200 `"OTP sent successfully"`
/// - 400 `"Invalid request body"` / `"Invalid method"`
/// - 500 `"Failed to store OTP"` / `"Failed to send OTP"`
pub async fn send_otp<R, S, E>(state: web::Data<AppState<R, S, E>>, body: web::Bytes) -> HttpResponse
where
    R: OtpRepository + 'static,
    S: SmsServiceTrait + 'static,
    E: EmailServiceTrait + 'static,
{
    let request_id = Uuid::new_v4();

    let request: SendOtpRequest = match parse_request(&body) {
        Ok(request) => request,
        Err(error) => {
            log::warn!("[{}] Rejected send_otp request body", request_id);
            return handle_domain_error(&error);
        }
    };

    let masked = mask_identifier(&request.identifier);

    // Unknown channels are rejected before anything is generated or stored
    let method: DeliveryMethod = match request.method.parse() {
        Ok(method) => method,
        Err(error) => {
            log::warn!(
                "[{}] Invalid delivery method {:?} for: {}",
                request_id,
                request.method,
                masked
            );
            return handle_domain_error(&error);
        }
    };

    log::info!(
        "[{}] Processing send_otp request for: {}, method: {}",
        request_id,
        masked,
        method
    );

    match state.otp_service.send_otp(&request.identifier, method).await {
        Ok(result) => {
            log::info!(
                "[{}] OTP sent to: {}, message_id: {}",
                request_id,
                masked,
                result.message_id
            );
            message_response(StatusCode::OK, SEND_SUCCESS_MESSAGE)
        }
        Err(error) => {
            log::error!("[{}] Failed to send OTP to: {}", request_id, masked);
            handle_domain_error(&error)
        }
    }
}
