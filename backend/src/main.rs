//! Paddy Damage Analysis Platform - Backend Server
//!
//! Estimates rice yield loss for a farm plot from damage regions supplied
//! as explicit ground polygons or as drone camera poses, and converts the
//! loss into plant counts and harvest-weight predictions.

use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod external;
mod handlers;
mod models;
mod routes;
mod services;

pub use config::Config;

use crate::external::elevation::ElevationClient;
use crate::services::damage::DamageAnalysisService;
use crate::services::footprint::FootprintService;
use crate::services::pest::FixedPestRisk;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub damage: DamageAnalysisService,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pda_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Paddy Damage Analysis Server");
    tracing::info!("Environment: {}", config.environment);

    // Wire up the analysis pipeline
    let elevation = ElevationClient::new(&config.elevation);
    let footprint = FootprintService::new(elevation, config.analysis.min_height_above_ground_m);
    let damage = DamageAnalysisService::new(
        footprint,
        Arc::new(FixedPestRisk(config.analysis.default_pest_risk)),
        config.analysis,
    );

    // Create application state
    let state = AppState {
        config: Arc::new(config.clone()),
        damage,
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Paddy Damage Analysis Platform API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
