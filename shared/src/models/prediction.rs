//! Yield prediction scoring
//!
//! A pure multiplicative model: per-plant base yield scaled by fertility,
//! pest pressure, variety, and growth stage. No geometry here; the damaged
//! area has already been converted to plant counts by the time this runs.

use serde::{Deserialize, Serialize};

use crate::models::SoilReading;

/// Fertility score when no soil readings are available. Absence of sensor
/// data is a below-neutral signal, not a neutral one.
pub const FERTILITY_NO_DATA: f64 = 0.5;

const FERTILITY_MIN: f64 = 0.3;
const FERTILITY_MAX: f64 = 1.2;

/// Multipliers that went into a yield estimate, reported for auditability
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct YieldFactors {
    pub fertility: f64,
    pub pest: f64,
    pub variety: f64,
    pub growth_stage: f64,
}

/// Harvest-weight prediction with a naive symmetric ±10% band
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct YieldEstimate {
    pub per_plant_kg: f64,
    pub predicted_total_kg: f64,
    pub lower_bound_kg: f64,
    pub upper_bound_kg: f64,
    pub factors: YieldFactors,
}

impl YieldEstimate {
    /// Propagate the factor model over the surviving plant count.
    pub fn compute(
        surviving_plants: f64,
        base_yield_kg_per_plant: f64,
        factors: YieldFactors,
    ) -> Self {
        let per_plant_kg = base_yield_kg_per_plant
            * factors.fertility
            * factors.pest
            * factors.variety
            * factors.growth_stage;
        let predicted_total_kg = per_plant_kg * surviving_plants;

        Self {
            per_plant_kg,
            predicted_total_kg,
            lower_bound_kg: predicted_total_kg * 0.9,
            upper_bound_kg: predicted_total_kg * 1.1,
            factors,
        }
    }
}

/// Soil-derived fertility multiplier, clamped to [0.3, 1.2].
pub fn fertility_score(soil: Option<&SoilReading>) -> f64 {
    let Some(soil) = soil.filter(|s| !s.is_empty()) else {
        return FERTILITY_NO_DATA;
    };

    let mut score: f64 = 1.0;

    if let Some(ph) = soil.ph {
        if (5.5..=7.5).contains(&ph) {
            score += 0.1;
        } else {
            score -= 0.1;
        }
    }

    if let Some(nitrogen) = soil.nitrogen_mg_kg {
        if nitrogen < 20.0 {
            score -= 0.1;
        }
    }

    if let Some(moisture) = soil.moisture_percent {
        if moisture < 20.0 {
            score -= 0.1;
        } else if (30.0..=60.0).contains(&moisture) {
            score += 0.05;
        }
    }

    score.clamp(FERTILITY_MIN, FERTILITY_MAX)
}

/// Pest-pressure multiplier from a 0-1 risk score. Floored at 0.5 so even
/// severe pressure never zeroes an estimate.
pub fn pest_factor(risk_score: f64) -> f64 {
    (1.0 - risk_score * 0.4).max(0.5)
}

/// Hybrid varieties carry a 10% yield premium. Case-insensitive substring
/// match on the variety label.
pub fn variety_factor(variety: Option<&str>) -> f64 {
    match variety {
        Some(v) if v.to_lowercase().contains("hybrid") => 1.1,
        _ => 1.0,
    }
}

/// Reproductive-stage paddies yield slightly less per surviving plant.
pub fn growth_stage_factor(stage: Option<&str>) -> f64 {
    match stage {
        Some(s) if s.to_lowercase().contains("reproductive") => 0.95,
        _ => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fertility_absent_readings() {
        assert_eq!(fertility_score(None), 0.5);

        // A reading with every sensor missing counts as absent too.
        let empty = SoilReading::default();
        assert_eq!(fertility_score(Some(&empty)), 0.5);
    }

    #[test]
    fn test_fertility_ph_adjustment() {
        let good_ph = SoilReading {
            ph: Some(6.5),
            ..Default::default()
        };
        assert!((fertility_score(Some(&good_ph)) - 1.1).abs() < 1e-9);

        let acidic = SoilReading {
            ph: Some(4.2),
            ..Default::default()
        };
        assert!((fertility_score(Some(&acidic)) - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_fertility_nitrogen_and_moisture() {
        let depleted = SoilReading {
            nitrogen_mg_kg: Some(12.0),
            moisture_percent: Some(15.0),
            ..Default::default()
        };
        // 1.0 - 0.1 (low N) - 0.1 (dry)
        assert!((fertility_score(Some(&depleted)) - 0.8).abs() < 1e-9);

        let well_watered = SoilReading {
            moisture_percent: Some(45.0),
            ..Default::default()
        };
        assert!((fertility_score(Some(&well_watered)) - 1.05).abs() < 1e-9);
    }

    #[test]
    fn test_fertility_clamped() {
        let poor = SoilReading {
            ph: Some(3.0),
            nitrogen_mg_kg: Some(5.0),
            moisture_percent: Some(5.0),
            ..Default::default()
        };
        // 1.0 - 0.1 - 0.1 - 0.1 = 0.7, still above the floor.
        assert!((fertility_score(Some(&poor)) - 0.7).abs() < 1e-9);

        let rich = SoilReading {
            ph: Some(6.8),
            nitrogen_mg_kg: Some(40.0),
            moisture_percent: Some(40.0),
            ..Default::default()
        };
        let score = fertility_score(Some(&rich));
        assert!(score <= 1.2);
        assert!((score - 1.15).abs() < 1e-9);
    }

    #[test]
    fn test_pest_factor_floor() {
        assert!((pest_factor(0.0) - 1.0).abs() < 1e-9);
        assert!((pest_factor(0.5) - 0.8).abs() < 1e-9);
        // 1 - 1.5 * 0.4 = 0.4 would undercut the floor.
        assert!((pest_factor(1.5) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_variety_factor_matching() {
        assert!((variety_factor(Some("RD41 Hybrid")) - 1.1).abs() < 1e-9);
        assert!((variety_factor(Some("HYBRID-77")) - 1.1).abs() < 1e-9);
        assert!((variety_factor(Some("Jasmine 105")) - 1.0).abs() < 1e-9);
        assert!((variety_factor(None) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_growth_stage_factor_matching() {
        assert!((growth_stage_factor(Some("Reproductive")) - 0.95).abs() < 1e-9);
        assert!((growth_stage_factor(Some("vegetative")) - 1.0).abs() < 1e-9);
        assert!((growth_stage_factor(None) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_yield_estimate_band() {
        let factors = YieldFactors {
            fertility: 1.0,
            pest: 1.0,
            variety: 1.0,
            growth_stage: 1.0,
        };
        let estimate = YieldEstimate::compute(100_000.0, 0.014, factors);

        assert!((estimate.per_plant_kg - 0.014).abs() < 1e-12);
        assert!((estimate.predicted_total_kg - 1_400.0).abs() < 1e-6);
        assert!((estimate.lower_bound_kg - 1_260.0).abs() < 1e-6);
        assert!((estimate.upper_bound_kg - 1_540.0).abs() < 1e-6);
    }
}
