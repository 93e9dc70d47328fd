//! Configuration management for the Paddy Damage Analysis Platform
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with PDA_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Elevation lookup configuration
    pub elevation: ElevationConfig,

    /// Analysis model constants
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ElevationConfig {
    /// Open-Elevation compatible API endpoint
    pub base_url: String,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
}

/// Constants of the yield model, configurable per deployment rather than
/// baked into the analysis code
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct AnalysisConfig {
    /// Base yield per plant in kilograms before factor scaling
    pub base_yield_kg_per_plant: f64,

    /// Pest risk score (0-1) assumed when a request does not supply one
    pub default_pest_risk: f64,

    /// Height above ground substituted when the drone altitude does not
    /// clear the resolved ground elevation
    pub min_height_above_ground_m: f64,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("PDA_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("elevation.base_url", "https://api.open-elevation.com/api/v1")?
            .set_default("elevation.timeout_seconds", 5)?
            .set_default("analysis.base_yield_kg_per_plant", 0.014)?
            .set_default("analysis.default_pest_risk", 0.2)?
            .set_default("analysis.min_height_above_ground_m", 5.0)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (PDA_ prefix)
            .add_source(
                Environment::with_prefix("PDA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}
