//! Application factory
//!
//! Builds the actix-web application around an `AppState`.

use actix_web::{http::StatusCode, middleware::Logger, web, App, HttpRequest, HttpResponse};

use crate::handlers::error::{handle_domain_error, message_response};
use crate::routes::otp::{send_otp, verify_otp, AppState};

use otp_core::domain::value_objects::Operation;
use otp_core::repositories::OtpRepository;
use otp_core::services::{EmailServiceTrait, SmsServiceTrait};

/// Create and configure the application with all dependencies
pub fn create_app<R, S, E>(
    app_state: web::Data<AppState<R, S, E>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    R: OtpRepository + 'static,
    S: SmsServiceTrait + 'static,
    E: EmailServiceTrait + 'static,
{
    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        .route("/health", web::get().to(health_check))
        .route(Operation::Send.path(), web::post().to(send_otp::<R, S, E>))
        .route(Operation::Verify.path(), web::post().to(verify_otp::<R, S, E>))
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "otp-gateway",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default handler for paths no operation claims
async fn not_found(req: HttpRequest) -> HttpResponse {
    match Operation::from_path(req.path()) {
        Err(error) => handle_domain_error(&error),
        // Known path reached with a method other than POST
        Ok(_) => message_response(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed"),
    }
}
