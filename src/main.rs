mod config;
mod controller;
mod data;
mod error;
mod middleware;
mod model;
mod router;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use crate::{
    config::Config, error::AppError, scheduler::reminders, service::notification::NotificationService,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client();

    let notifier =
        NotificationService::new(http_client.clone(), config.notification_webhook_url.clone());

    tracing::info!("Starting server");

    // Start the reminder sweep (J-7 / J-1 / day-of waves)
    let scheduler_db = db.clone();
    let scheduler_notifier = notifier.clone();
    tokio::spawn(async move {
        if let Err(e) = reminders::start_scheduler(scheduler_db, scheduler_notifier).await {
            tracing::error!("Reminder scheduler error: {}", e);
        }
    });

    let app = router::router()
        .with_state(AppState::new(db, http_client, notifier))
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to bind {}: {}", config.bind_addr, e)))?;

    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::InternalError(format!("Server error: {}", e)))?;

    Ok(())
}
