//! HTTP handlers for damage analysis endpoints

use axum::{extract::State, Json};

use shared::models::DronePose;

use crate::error::AppResult;
use crate::services::damage::{AnalyzeDamageInput, DamageAnalysisReport, FootprintPreview};
use crate::AppState;

/// Analyze damage regions and predict the yield impact
pub async fn analyze_damage(
    State(state): State<AppState>,
    Json(input): Json<AnalyzeDamageInput>,
) -> AppResult<Json<DamageAnalysisReport>> {
    let report = state.damage.analyze(input).await?;
    Ok(Json(report))
}

/// Preview the ground footprint derived from a single drone pose
pub async fn preview_footprint(
    State(state): State<AppState>,
    Json(pose): Json<DronePose>,
) -> AppResult<Json<FootprintPreview>> {
    let preview = state.damage.preview_footprint(&pose).await?;
    Ok(Json(preview))
}
