//! Router setup with all API routes and middleware.
//!
//! Configures the axum Router with permissive CORS (the dashboard
//! frontend may be served from anywhere), request tracing, and a body
//! size limit.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create the axum Router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/chat", post(handlers::chat))
        .route("/analytics/advanced", post(handlers::advanced_analytics))
        .route(
            "/salespersons",
            get(handlers::list_salespersons).post(handlers::create_salesperson),
        )
        .route("/salespersons/{id}", get(handlers::get_salesperson))
        .route(
            "/dealers",
            get(handlers::list_dealers).post(handlers::create_dealer),
        )
        .route("/dealers/{id}", get(handlers::get_dealer))
        .route(
            "/meetings",
            get(handlers::list_meetings).post(handlers::create_meeting),
        )
        .route(
            "/leads",
            get(handlers::list_leads).post(handlers::create_lead),
        )
        .route(
            "/login-sessions",
            get(handlers::list_login_sessions).post(handlers::create_login_session),
        )
        .route(
            "/login-sessions/{id}/logout",
            put(handlers::logout_login_session),
        )
        .route(
            "/sales-records",
            get(handlers::list_sales_records).post(handlers::create_sales_record),
        )
        .route("/dashboard/charts", get(handlers::dashboard_charts))
        .layer(DefaultBodyLimit::max(1024 * 1024)) // 1MB global limit
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the HTTP server on the configured port.
pub async fn start_server(
    state: AppState,
) -> Result<(), salescope_core::error::SalescopeError> {
    let port = state.config.general.port;
    let addr = format!("0.0.0.0:{}", port);

    let router = create_router(state);

    tracing::info!("Starting API server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| salescope_core::error::SalescopeError::Api(format!("Failed to bind: {}", e)))?;

    axum::serve(listener, router)
        .await
        .map_err(|e| salescope_core::error::SalescopeError::Api(format!("Server error: {}", e)))?;

    Ok(())
}
