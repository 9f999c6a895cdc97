use actix_web::{web, HttpServer};
use anyhow::Context;
use dotenvy::dotenv;
use log::info;
use std::sync::Arc;

use otp_api::app::create_app;
use otp_api::routes::otp::AppState;
use otp_core::services::{NotificationDispatcher, OtpService};
use otp_infra::{create_notifiers, create_otp_repository};
use otp_shared::{AppConfig, Environment};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables, the per-environment file first so it wins
    dotenvy::from_filename(Environment::from_env().env_file()).ok();
    dotenv().ok();

    let config = AppConfig::load().context("failed to load configuration")?;

    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(config.logging.level_or_default()),
    );

    info!("Starting OTP gateway ({} environment)", config.environment);

    let repository = create_otp_repository(&config.storage, &config.aws)
        .await
        .context("failed to create OTP store")?;
    let notifiers = create_notifiers(&config.notification, &config.aws)
        .await
        .context("failed to create notification providers")?;

    let dispatcher = NotificationDispatcher::new(
        Arc::new(notifiers.sms),
        Arc::new(notifiers.email),
        config.notification.sender_address.clone(),
    );
    let otp_service = OtpService::new(Arc::new(repository), dispatcher, (&config.otp).into());

    let app_state = web::Data::new(AppState::new(Arc::new(otp_service)));

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    Ok(())
}
