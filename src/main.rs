//! TourHub Server — tourism marketplace backend
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use tourhub_auth::access::ResourceKind;
use tourhub_core::config::AppConfig;
use tourhub_core::error::AppError;
use tourhub_core::traits::{CacheProvider, Notifier};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path =
        std::env::var("TOURHUB_CONFIG").unwrap_or_else(|_| "config/default.toml".to_string());

    let env = std::env::var("TOURHUB_ENV").unwrap_or_else(|_| "development".to_string());
    let overlay_path = format!("config/{env}.toml");
    let overlay = std::path::Path::new(&overlay_path)
        .exists()
        .then_some(overlay_path.as_str());

    AppConfig::load_layered(&config_path, overlay)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting TourHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Database connection + migrations ─────────────────────────
    let db_pool = tourhub_database::connection::create_pool(&config.database).await?;
    tourhub_database::migration::run_migrations(&db_pool).await?;

    // ── Cache ────────────────────────────────────────────────────
    let cache: Arc<dyn CacheProvider> = Arc::new(tourhub_cache::MemoryCache::new(&config.cache));

    // ── Repositories ─────────────────────────────────────────────
    let user_repo = Arc::new(tourhub_database::repositories::user::UserRepository::new(
        db_pool.clone(),
    ));
    let session_repo = Arc::new(
        tourhub_database::repositories::session::SessionRepository::new(db_pool.clone()),
    );
    let event_repo = Arc::new(tourhub_database::repositories::event::EventRepository::new(
        db_pool.clone(),
    ));
    let venue_repo = Arc::new(tourhub_database::repositories::venue::VenueRepository::new(
        db_pool.clone(),
    ));
    let booking_repo = Arc::new(
        tourhub_database::repositories::booking::BookingRepository::new(db_pool.clone()),
    );
    let appointment_repo = Arc::new(
        tourhub_database::repositories::appointment::AppointmentRepository::new(db_pool.clone()),
    );

    // ── Auth system ──────────────────────────────────────────────
    let password_hasher = Arc::new(tourhub_auth::password::PasswordHasher::new());
    let password_validator = Arc::new(tourhub_auth::password::PasswordValidator::new(&config.auth));
    let jwt_encoder = Arc::new(tourhub_auth::jwt::JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(tourhub_auth::jwt::JwtDecoder::new(
        &config.auth,
        Arc::clone(&cache),
    ));
    let session_manager = Arc::new(tourhub_auth::session::SessionManager::new(
        Arc::clone(&session_repo),
        &config.auth,
    ));

    // ── Notifier ─────────────────────────────────────────────────
    let notifier: Arc<dyn Notifier> = Arc::new(tourhub_service::notify::LogNotifier::new());

    // ── Services ─────────────────────────────────────────────────
    let auth_service = Arc::new(tourhub_service::auth::AuthService::new(
        Arc::clone(&user_repo),
        Arc::clone(&session_manager),
        Arc::clone(&jwt_encoder),
        Arc::clone(&jwt_decoder),
        Arc::clone(&password_hasher),
        Arc::clone(&password_validator),
    ));
    let event_service = Arc::new(tourhub_service::event::EventService::new(
        Arc::clone(&event_repo),
        Arc::clone(&cache),
    ));
    let venue_service = Arc::new(tourhub_service::venue::VenueService::new(
        Arc::clone(&venue_repo),
        Arc::clone(&cache),
    ));
    let event_moderation = Arc::new(tourhub_service::moderation::ModerationService::new(
        Arc::clone(&event_repo),
        Arc::clone(&cache),
        Arc::clone(&notifier),
        ResourceKind::Event,
    ));
    let venue_moderation = Arc::new(tourhub_service::moderation::ModerationService::new(
        Arc::clone(&venue_repo),
        Arc::clone(&cache),
        Arc::clone(&notifier),
        ResourceKind::Venue,
    ));
    let booking_service = Arc::new(tourhub_service::booking::BookingService::new(
        Arc::clone(&booking_repo),
        Arc::clone(&event_repo),
        Arc::clone(&cache),
        Arc::clone(&notifier),
    ));
    let appointment_service = Arc::new(tourhub_service::appointment::AppointmentService::new(
        Arc::clone(&appointment_repo),
        Arc::clone(&user_repo),
    ));
    let admin_user_service = Arc::new(tourhub_service::user::AdminUserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&password_validator),
    ));
    let report_service = Arc::new(tourhub_service::report::ReportService::new(
        Arc::clone(&booking_repo),
        Arc::clone(&event_repo),
        Arc::clone(&venue_repo),
        Arc::clone(&user_repo),
    ));

    // ── HTTP server ──────────────────────────────────────────────
    let app_state = tourhub_api::state::AppState {
        config: Arc::new(config.clone()),
        db_pool: db_pool.clone(),
        jwt_decoder: Arc::clone(&jwt_decoder),
        session_manager: Arc::clone(&session_manager),
        auth_service,
        event_service,
        venue_service,
        event_moderation,
        venue_moderation,
        booking_service,
        appointment_service,
        admin_user_service,
        report_service,
    };

    let app = tourhub_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("TourHub server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("TourHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
