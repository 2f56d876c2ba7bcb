//! Configuration management for the fitness tracker
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: FT__)

use anyhow::Result;
use chrono::NaiveDate;
use fitness_tracker_shared::WeightUnit;
use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub tracker: TrackerConfig,
}

/// What the binary prints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    #[default]
    Summary,
    Snapshot,
}

/// Tracker configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Load the sample data set at startup
    pub seed_data: bool,
    /// Day to summarize; the clock's date when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub today: Option<NaiveDate>,
    pub water_glasses_target: u32,
    pub recent_workouts: usize,
    pub weight_unit: WeightUnit,
    pub output: OutputKind,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            seed_data: true,
            today: None,
            water_glasses_target: 8,
            recent_workouts: 3,
            weight_unit: WeightUnit::Lbs,
            output: OutputKind::Summary,
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with FT__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(config::File::with_name(&config_file).required(false))
            // e.g., FT__TRACKER__TODAY=2024-01-15 sets tracker.today
            .add_source(config::Environment::with_prefix("FT").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.tracker.seed_data);
        assert!(config.tracker.today.is_none());
        assert_eq!(config.tracker.water_glasses_target, 8);
        assert_eq!(config.tracker.recent_workouts, 3);
        assert_eq!(config.tracker.weight_unit, WeightUnit::Lbs);
        assert_eq!(config.tracker.output, OutputKind::Summary);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default()).unwrap())
            .add_source(config::File::from_str(
                "[tracker]\ntoday = \"2024-01-15\"\nweight_unit = \"kg\"\noutput = \"snapshot\"\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.tracker.today, NaiveDate::from_ymd_opt(2024, 1, 15));
        assert_eq!(config.tracker.weight_unit, WeightUnit::Kg);
        assert_eq!(config.tracker.output, OutputKind::Snapshot);
        assert_eq!(config.tracker.water_glasses_target, 8);
    }

    #[test]
    fn test_is_production() {
        // Default should be false (development)
        assert!(!AppConfig::is_production());
    }
}
