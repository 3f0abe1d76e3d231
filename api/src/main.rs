use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::info;

use tk_api::config::{init_tracing, load_config};
use tk_api::{create_app, AppState};
use tk_core::services::{
    AuthServiceConfig, CodeVerificationService, EmailAuthService, VerificationServiceConfig,
    VerificationSweeper,
};
use tk_infra::{create_mail_service, MailServiceAdapter};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config()?;
    init_tracing(&config.logging)?;

    info!(
        environment = %config.environment,
        mail_provider = %config.mail.provider,
        "Starting toolkit API server"
    );

    let mail_sender = Arc::new(MailServiceAdapter::new(create_mail_service(&config.mail)));
    info!("Mail provider: {}", mail_sender.provider_name());

    let verification_service = Arc::new(CodeVerificationService::in_memory(
        VerificationServiceConfig::from(&config.verification),
    ));

    Arc::new(VerificationSweeper::new(
        verification_service.clone(),
        config.sweeper.clone(),
    ))
    .start_background_task();

    let auth_service = Arc::new(EmailAuthService::new(
        verification_service,
        mail_sender,
        AuthServiceConfig::default(),
    ));
    let app_state = web::Data::new(AppState { auth_service });

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let cors_config = config.cors.clone();
    let environment = config.environment;

    let mut server = HttpServer::new(move || create_app(app_state.clone(), &cors_config, environment));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await
        .context("Server terminated with an error")
}
