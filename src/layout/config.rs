//! Configuration for the layout engine

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::model::plan::DEFAULT_COST_PER_SQ_M;

/// Errors that can occur when loading a layout configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read layout config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse layout config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Configuration options for plan generation
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Side of the square reference grid the standard program is laid out on
    pub reference_extent: f64,

    /// Clearance kept between rooms during overlap resolution
    pub margin: f64,

    /// Distance between candidate positions in the placement scan
    pub scan_step: f64,

    /// Factor applied to both sides of a room that found no free position
    pub shrink_factor: f64,

    /// Smallest side a room is shrunk or clamped to
    pub min_room_side: f64,

    /// Largest share of the plan width/length one generated room may take
    pub max_room_share: f64,

    /// Construction cost per square meter
    pub cost_per_sq_m: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            reference_extent: 15.0,
            margin: 0.3,
            scan_step: 0.3,
            shrink_factor: 0.8,
            min_room_side: 1.5,
            max_room_share: 0.6,
            cost_per_sq_m: DEFAULT_COST_PER_SQ_M,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a TOML file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load a configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Set the clearance between rooms
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Set the placement scan step
    pub fn with_scan_step(mut self, step: f64) -> Self {
        self.scan_step = step;
        self
    }

    /// Set the construction cost per square meter
    pub fn with_cost_per_sq_m(mut self, rate: f64) -> Self {
        self.cost_per_sq_m = rate;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LayoutConfig::default();
        assert_eq!(config.reference_extent, 15.0);
        assert_eq!(config.margin, 0.3);
        assert_eq!(config.scan_step, 0.3);
        assert_eq!(config.shrink_factor, 0.8);
        assert_eq!(config.min_room_side, 1.5);
        assert_eq!(config.max_room_share, 0.6);
        assert_eq!(config.cost_per_sq_m, 125_000.0);
    }

    #[test]
    fn test_builder_pattern() {
        let config = LayoutConfig::new().with_margin(0.2).with_scan_step(0.5);

        assert_eq!(config.margin, 0.2);
        assert_eq!(config.scan_step, 0.5);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = LayoutConfig::from_toml_str("margin = 0.1\ncost_per_sq_m = 90000.0\n").unwrap();
        assert_eq!(config.margin, 0.1);
        assert_eq!(config.cost_per_sq_m, 90_000.0);
        assert_eq!(config.scan_step, 0.3);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(LayoutConfig::from_toml_str("marginn = 0.1").is_err());
    }
}
