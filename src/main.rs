use std::sync::Arc;

use anyhow::Context;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use barberbook::config::AppConfig;
use barberbook::handlers;
use barberbook::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    tracing::info!(
        business = %config.business_name,
        open = config.open_hour,
        close = config.close_hour,
        trim_last_slot = config.trim_last_slot,
        "loaded booking config"
    );

    let port = config.port;
    let state = Arc::new(AppState::from_config(config).context("invalid booking configuration")?);

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/", get(handlers::booking::booking_page))
        .route("/api/booking/form", get(handlers::booking::get_form))
        .route("/api/booking/phone", post(handlers::booking::phone_input))
        .route("/api/booking/service", post(handlers::booking::service_change))
        .route("/api/booking/field", post(handlers::booking::field_input))
        .route("/api/booking/submit", post(handlers::booking::submit))
        .route("/text", get(handlers::text::text_barber))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{port}");
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
