//! Business logic services for the Paddy Damage Analysis Platform

pub mod damage;
pub mod footprint;
pub mod pest;

pub use damage::DamageAnalysisService;
pub use footprint::FootprintService;
pub use pest::{FixedPestRisk, PestRiskProvider};
