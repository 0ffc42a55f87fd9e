//! # regmap-api: Read-only Regulation Map Service
//!
//! JSON endpoints over one regulation dataset loaded at startup.
//!
//! ## API Surface
//!
//! | Prefix | Module | Purpose |
//! |--------|--------|---------|
//! | `/v1/places/*` | [`routes::places`] | Ancestor chains, applicable regulations |
//! | `/v1/regulations/*`, `/v1/scopes` | [`routes::regulations`] | Targets, search, scope groups |
//! | `/v1/pins`, `/v1/sidebar` | [`routes::map`] | Map pins, filter sidebar |
//! | `/health/*` | this module | Liveness and readiness checks |
//!
//! Every handler delegates to `regmap-engine`; errors map to structured
//! JSON bodies via [`AppError`].

pub mod error;
pub mod routes;
pub mod state;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

pub use error::AppError;
pub use state::{AppConfig, AppState};

/// Assemble the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness))
        .merge(routes::places::router())
        .merge(routes::regulations::router())
        .merge(routes::map::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness check - always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness check - ready once the location tables are built.
async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    if state.engine.hierarchy().is_empty() || state.engine.coordinates().is_empty() {
        return (StatusCode::SERVICE_UNAVAILABLE, "location tables unavailable").into_response();
    }
    (StatusCode::OK, "ready").into_response()
}
