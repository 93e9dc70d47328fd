//! Route definitions for the Paddy Damage Analysis Platform

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Damage analysis
        .nest("/damage", damage_routes())
}

/// Damage analysis routes
fn damage_routes() -> Router<AppState> {
    Router::new()
        .route("/analyze", post(handlers::analyze_damage))
        .route("/footprint", post(handlers::preview_footprint))
}
