//! # Shiftboard API
//!
//! HTTP surface for the shiftboard scheduling service: staff and
//! task-type administration, shift planning, day-off requests, the daily
//! task board, and schedule summaries.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic
//! - **Middleware**: Cross-cutting concerns — tenant selection and error
//!   mapping
//! - **Config**: Environment configuration
//!
//! The API uses Axum as the web framework; persistence goes through the
//! core repository facade, backed here by PostgreSQL via SQLx.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Middleware for tenant selection and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use axum::Router;
use eyre::Result;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tracing::info;
use tracing_subscriber::FmtSubscriber;
use uuid::Uuid;

use shiftboard_core::assignment::Clipboard;
use shiftboard_core::rules::ScheduleRules;

/// Shared application state accessible to all request handlers.
pub struct ApiState {
    /// PostgreSQL connection pool for database operations
    pub db_pool: PgPool,
    /// Tenant used when requests carry no X-Tenant-Id header
    pub default_tenant: Uuid,
    /// Facility scheduling policy
    pub rules: ScheduleRules,
    /// Copy/paste holding area for day templates; one per server
    /// session, last copy wins
    pub clipboard: RwLock<Clipboard>,
}

impl ApiState {
    pub fn new(db_pool: PgPool, default_tenant: Uuid, rules: ScheduleRules) -> Self {
        Self {
            db_pool,
            default_tenant,
            rules,
            clipboard: RwLock::new(Clipboard::new()),
        }
    }
}

/// Starts the API server with the provided configuration and database
/// connection.
pub async fn start_server(config: config::ApiConfig, db_pool: PgPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Create shared state with dependencies
    let state = Arc::new(ApiState::new(
        db_pool,
        config.default_tenant,
        config.rules.clone(),
    ));

    // Build the application router with all routes
    let app = Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Staff administration endpoints
        .merge(routes::staff::routes())
        // Task-type administration endpoints
        .merge(routes::task_types::routes())
        // Shift planning and summary endpoints
        .merge(routes::schedule::routes())
        // Task board endpoints
        .merge(routes::assignments::routes())
        .merge(routes::board::routes())
        // Attach shared state to all routes
        .with_state(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins = origins
            .iter()
            .filter_map(|origin| origin.parse::<axum::http::HeaderValue>().ok())
            .collect::<Vec<_>>();
        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PUT,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
                axum::http::HeaderName::from_static(middleware::tenant::TENANT_HEADER),
            ])
            .allow_origin(origins)
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(
        tower::ServiceBuilder::new()
            .layer(axum::error_handling::HandleErrorLayer::new(
                |_: axum::BoxError| async { axum::http::StatusCode::REQUEST_TIMEOUT },
            ))
            .timeout(std::time::Duration::from_secs(config.request_timeout)),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
