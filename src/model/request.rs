//! Generation requests

use thiserror::Error;

use super::plan::Style;

/// Smallest plan side, in meters, accepted by [`PlanRequest::validate`]
pub const MIN_SIDE: f64 = 6.0;

/// Largest plan side, in meters, accepted by [`PlanRequest::validate`]
pub const MAX_SIDE: f64 = 30.0;

/// Errors reported by request validation
#[derive(Debug, Error, PartialEq)]
pub enum RequestError {
    #[error("{dimension} must be between {MIN_SIDE}m and {MAX_SIDE}m, got {value}m")]
    DimensionOutOfRange { dimension: &'static str, value: f64 },

    #[error("floor count must be at least 1")]
    NoFloors,
}

/// What the caller asks the engine to produce
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    pub width: f64,
    pub length: f64,
    /// Free-text requirements; descriptive only on the deterministic path
    pub requirements: Option<String>,
    /// Raw style tag as supplied by the caller
    pub style: Option<String>,
    pub floors: Option<u32>,
}

impl PlanRequest {
    pub fn new(width: f64, length: f64) -> Self {
        Self {
            width,
            length,
            requirements: None,
            style: None,
            floors: None,
        }
    }

    pub fn with_requirements(mut self, requirements: impl Into<String>) -> Self {
        self.requirements = Some(requirements.into());
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn with_floors(mut self, floors: u32) -> Self {
        self.floors = Some(floors);
        self
    }

    pub fn total_area(&self) -> f64 {
        self.width * self.length
    }

    /// Requested style if it names a known one
    pub fn parsed_style(&self) -> Option<Style> {
        self.style.as_deref().and_then(Style::parse)
    }

    /// Non-empty requirement text
    pub fn requirements_text(&self) -> Option<&str> {
        self.requirements
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
    }

    /// Check the size limits front ends enforce before calling the engine.
    ///
    /// The engine itself never calls this: degenerate inputs produce degenerate plans.
    pub fn validate(&self) -> Result<(), RequestError> {
        for (dimension, value) in [("width", self.width), ("length", self.length)] {
            if !(MIN_SIDE..=MAX_SIDE).contains(&value) {
                return Err(RequestError::DimensionOutOfRange { dimension, value });
            }
        }
        if self.floors == Some(0) {
            return Err(RequestError::NoFloors);
        }
        Ok(())
    }
}
