//! Damage analysis service
//!
//! Resolves each damage region to a geographic polygon, measures it on the
//! local tangent plane, and propagates the lost area through the yield
//! model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use shared::geo::polygon_area_m2;
use shared::models::{
    fertility_score, growth_stage_factor, pest_factor, variety_factor, DamageRegion, DronePose,
    FarmModel, SoilReading, YieldEstimate, YieldFactors,
};
use shared::types::GeoPoint;
use shared::validation::{
    validate_damage_region, validate_drone_pose, validate_farm_model, validate_pest_risk_score,
};

use crate::config::AnalysisConfig;
use crate::error::{AppError, AppResult};
use crate::services::footprint::FootprintService;
use crate::services::pest::PestRiskProvider;

/// Damage analysis service
#[derive(Clone)]
pub struct DamageAnalysisService {
    footprint: FootprintService,
    pest: Arc<dyn PestRiskProvider>,
    analysis: AnalysisConfig,
}

/// Input for a damage analysis
#[derive(Debug, Deserialize)]
pub struct AnalyzeDamageInput {
    pub farm: FarmModel,
    pub damage_regions: Vec<DamageRegion>,
    pub soil: Option<SoilReading>,
    /// Externally assessed pest risk on a 0-1 scale; the configured
    /// provider supplies a default when absent
    pub pest_risk_score: Option<f64>,
    pub variety: Option<String>,
    pub growth_stage: Option<String>,
}

/// Damage attributed to a single region
#[derive(Debug, Clone, Serialize)]
pub struct RegionDamage {
    /// "manual" or "drone"
    pub kind: &'static str,
    /// Polygon the area was measured on (derived for drone regions)
    pub polygon: Vec<GeoPoint>,
    pub area_m2: f64,
    pub lost_plants: f64,
}

/// Full analysis report
#[derive(Debug, Clone, Serialize)]
pub struct DamageAnalysisReport {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub farm_area_m2: f64,
    pub plant_density_per_m2: f64,
    pub total_plants: f64,
    pub regions: Vec<RegionDamage>,
    pub total_damaged_area_m2: f64,
    pub total_lost_plants: f64,
    pub surviving_plants: f64,
    pub yield_remaining_percent: f64,
    pub yield_lost_percent: f64,
    pub estimate: YieldEstimate,
}

/// Derived footprint for a single drone pose
#[derive(Debug, Clone, Serialize)]
pub struct FootprintPreview {
    pub polygon: Vec<GeoPoint>,
    pub area_m2: f64,
}

impl DamageAnalysisService {
    /// Create a new DamageAnalysisService instance
    pub fn new(
        footprint: FootprintService,
        pest: Arc<dyn PestRiskProvider>,
        analysis: AnalysisConfig,
    ) -> Self {
        Self {
            footprint,
            pest,
            analysis,
        }
    }

    /// Run a full damage analysis over the request.
    pub async fn analyze(&self, input: AnalyzeDamageInput) -> AppResult<DamageAnalysisReport> {
        self.validate_input(&input)?;

        let farm = input.farm;
        let plant_density = farm.plant_density();
        let total_plants = farm.total_plants();

        let mut regions = Vec::with_capacity(input.damage_regions.len());
        let mut total_damaged_area_m2 = 0.0;
        let mut total_lost_plants = 0.0;

        for region in &input.damage_regions {
            let polygon = match region {
                DamageRegion::Manual { points } => points.clone(),
                DamageRegion::Drone(pose) => self.footprint.resolve_footprint(pose).await,
            };
            let area_m2 = polygon_area_m2(&polygon);
            let lost_plants = area_m2 * plant_density;

            total_damaged_area_m2 += area_m2;
            total_lost_plants += lost_plants;
            regions.push(RegionDamage {
                kind: region.kind(),
                polygon,
                area_m2,
                lost_plants,
            });
        }

        // Derived footprints may overlap each other or extend past the farm
        // boundary, so the nominal loss can exceed the plant count.
        let surviving_plants = (total_plants - total_lost_plants).max(0.0);

        let risk_score = input
            .pest_risk_score
            .unwrap_or_else(|| self.pest.risk_score());
        let factors = YieldFactors {
            fertility: fertility_score(input.soil.as_ref()),
            pest: pest_factor(risk_score),
            variety: variety_factor(input.variety.as_deref()),
            growth_stage: growth_stage_factor(input.growth_stage.as_deref()),
        };
        let estimate = YieldEstimate::compute(
            surviving_plants,
            self.analysis.base_yield_kg_per_plant,
            factors,
        );

        // total_plants > 0 is guaranteed by farm validation.
        let yield_remaining_percent = surviving_plants / total_plants * 100.0;

        Ok(DamageAnalysisReport {
            analysis_id: Uuid::new_v4(),
            analyzed_at: Utc::now(),
            farm_area_m2: farm.farm_area_m2,
            plant_density_per_m2: plant_density,
            total_plants,
            regions,
            total_damaged_area_m2,
            total_lost_plants,
            surviving_plants,
            yield_remaining_percent,
            yield_lost_percent: 100.0 - yield_remaining_percent,
            estimate,
        })
    }

    /// Derive the footprint polygon and area for a single pose.
    pub async fn preview_footprint(&self, pose: &DronePose) -> AppResult<FootprintPreview> {
        validate_drone_pose(pose).map_err(|msg| AppError::ValidationError(msg.to_string()))?;

        let polygon = self.footprint.resolve_footprint(pose).await;
        let area_m2 = polygon_area_m2(&polygon);

        Ok(FootprintPreview { polygon, area_m2 })
    }

    /// Validate the request before any geometry runs; the engine has no
    /// recovery path for these.
    fn validate_input(&self, input: &AnalyzeDamageInput) -> AppResult<()> {
        validate_farm_model(&input.farm)
            .map_err(|msg| AppError::ValidationError(msg.to_string()))?;

        for (index, region) in input.damage_regions.iter().enumerate() {
            validate_damage_region(region).map_err(|msg| AppError::Validation {
                field: format!("damage_regions[{}]", index),
                message: msg.to_string(),
                message_th: format!("ข้อมูลบริเวณเสียหายไม่ถูกต้อง: {}", msg),
            })?;
        }

        if let Some(score) = input.pest_risk_score {
            validate_pest_risk_score(score).map_err(|msg| AppError::Validation {
                field: "pest_risk_score".to_string(),
                message: msg.to_string(),
                message_th: "คะแนนความเสี่ยงศัตรูพืชต้องอยู่ระหว่าง 0 ถึง 1".to_string(),
            })?;
        }

        Ok(())
    }
}
