use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use dotenv::dotenv;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{self, TraceLayer};
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod router;

use appointment_cell::handlers::AppointmentCellState;
use appointment_cell::{
    AvailabilityService, BookingService, LedgerConsistencyService, SmsLogNotifier,
};
use doctor_cell::handlers::DoctorCellState;
use doctor_cell::CatalogService;
use shared_config::AppConfig;
use shared_storage::JsonFileStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Loading Env Vars
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting HealthLine booking API server");

    // Load configuration
    let config = AppConfig::from_env();

    // The store is created once so every request shares the same ledger
    // write lock.
    let store = Arc::new(JsonFileStore::new(&config));
    let notifier = Arc::new(SmsLogNotifier);

    let doctor_state = DoctorCellState {
        catalog: Arc::new(CatalogService::new(store.clone())),
    };
    let appointment_state = AppointmentCellState {
        availability: Arc::new(AvailabilityService::new(
            store.clone(),
            config.horizon_days,
            config.daily_capacity,
        )),
        booking: Arc::new(BookingService::new(
            store.clone(),
            notifier,
            config.daily_capacity,
        )),
        consistency: Arc::new(LedgerConsistencyService::new(store)),
    };

    // Set up CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the application router
    let app = router::create_router(doctor_state, appointment_state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(trace::DefaultMakeSpan::new().level(Level::INFO))
                .on_response(trace::DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors);

    // Run the server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
