//! The floor plan aggregate

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::room::Room;

/// Construction cost per square meter used when no explicit estimate exists
pub const DEFAULT_COST_PER_SQ_M: f64 = 125_000.0;

/// Building code tag attached to generated plans
pub const DEFAULT_BUILDING_CODE: &str = "NBC-2016";

/// Estimated construction cost for a given floor area, rounded to a whole amount
pub fn estimated_cost(total_area: f64, rate: f64) -> f64 {
    (total_area * rate).round()
}

/// Architectural style of a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    #[default]
    Modern,
    Traditional,
    Contemporary,
    Minimalist,
    Colonial,
}

impl Style {
    pub const ALL: [Style; 5] = [
        Style::Modern,
        Style::Traditional,
        Style::Contemporary,
        Style::Minimalist,
        Style::Colonial,
    ];

    /// Parse a style name, ignoring case and surrounding whitespace
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        Self::ALL.iter().copied().find(|s| s.as_str() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Modern => "modern",
            Style::Traditional => "traditional",
            Style::Contemporary => "contemporary",
            Style::Minimalist => "minimalist",
            Style::Colonial => "colonial",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which way the plan's front faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    North,
    #[default]
    South,
    East,
    West,
}

impl Orientation {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "north" => Some(Orientation::North),
            "south" => Some(Orientation::South),
            "east" => Some(Orientation::East),
            "west" => Some(Orientation::West),
            _ => None,
        }
    }
}

/// Descriptive and costing information attached to a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanMetadata {
    pub style: Style,
    pub floors: u32,
    pub orientation: Orientation,
    pub features: Vec<String>,
    pub estimated_cost: f64,
    pub building_code: String,
}

/// A complete floor plan. Built in one shot and treated as an immutable value afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorPlan {
    pub id: String,
    pub name: String,
    pub description: String,
    pub width: f64,
    pub length: f64,
    pub total_area: f64,
    /// Rooms in generation order
    pub rooms: Vec<Room>,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub metadata: PlanMetadata,
}

impl FloorPlan {
    /// Build a plan with a fresh id and timestamp; `total_area` is derived from the bounds.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        width: f64,
        length: f64,
        rooms: Vec<Room>,
        metadata: PlanMetadata,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description: description.into(),
            width,
            length,
            total_area: width * length,
            rooms,
            created_at: Utc::now(),
            metadata,
        }
    }

    /// Sum of the room footprints
    pub fn room_area(&self) -> f64 {
        self.rooms.iter().map(Room::area).sum()
    }

    pub fn get_room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    /// Serialize the plan as pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> PlanMetadata {
        PlanMetadata {
            style: Style::Modern,
            floors: 1,
            orientation: Orientation::South,
            features: vec![],
            estimated_cost: 0.0,
            building_code: DEFAULT_BUILDING_CODE.to_string(),
        }
    }

    #[test]
    fn test_total_area_is_product() {
        let plan = FloorPlan::new("p", "d", 12.5, 7.3, vec![], metadata());
        assert_eq!(plan.total_area, 12.5 * 7.3);
    }

    #[test]
    fn test_estimated_cost_rounds() {
        assert_eq!(estimated_cost(180.0, DEFAULT_COST_PER_SQ_M), 22_500_000.0);
        assert_eq!(estimated_cost(0.000003, DEFAULT_COST_PER_SQ_M), 0.0);
    }

    #[test]
    fn test_style_parse() {
        assert_eq!(Style::parse("Colonial"), Some(Style::Colonial));
        assert_eq!(Style::parse(" minimalist "), Some(Style::Minimalist));
        assert_eq!(Style::parse("brutalist"), None);
        assert_eq!(Style::default(), Style::Modern);
    }

    #[test]
    fn test_json_uses_camel_case_and_flattened_metadata() {
        let plan = FloorPlan::new("p", "d", 10.0, 10.0, vec![], metadata());
        let json = plan.to_json().unwrap();
        assert!(json.contains("\"totalArea\""));
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"buildingCode\": \"NBC-2016\""));
        assert!(json.contains("\"style\": \"modern\""));
        assert!(!json.contains("\"metadata\""));
    }
}
