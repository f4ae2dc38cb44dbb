use std::sync::{Arc, Mutex};

use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use slotbook::config::AppConfig;
use slotbook::db;
use slotbook::handlers;
use slotbook::services::artifact::qr::QrCodeProvider;
use slotbook::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    tracing::info!(
        capacity = config.slot_capacity,
        quota = config.department_quota,
        sessions = config.sessions.len(),
        "slot configuration loaded"
    );

    let conn = db::init_db(&config.database_url)?;

    let state = Arc::new(AppState {
        db: Arc::new(Mutex::new(conn)),
        config: config.clone(),
        artifacts: Box::new(QrCodeProvider),
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/slots", get(handlers::availability::list_slots))
        .route("/api/check-booking", get(handlers::bookings::check_booking))
        .route("/api/check-status", get(handlers::bookings::check_status))
        .route("/api/book", post(handlers::bookings::create_booking))
        .route(
            "/api/update-booking-date",
            put(handlers::bookings::reschedule_booking),
        )
        .route("/api/booking", delete(handlers::bookings::cancel_booking))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
