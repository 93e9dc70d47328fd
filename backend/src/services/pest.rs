//! Pest risk providers
//!
//! A request may carry its own pest risk score; when it does not, a provider
//! supplies one. Kept behind a trait so a deployment can plug in a regional
//! pest-pressure model without touching the analysis pipeline.

/// Source of pest risk scores on a 0-1 scale
pub trait PestRiskProvider: Send + Sync {
    fn risk_score(&self) -> f64;
}

/// Fixed pest risk taken from configuration
#[derive(Debug, Clone, Copy)]
pub struct FixedPestRisk(pub f64);

impl PestRiskProvider for FixedPestRisk {
    fn risk_score(&self) -> f64 {
        self.0
    }
}
