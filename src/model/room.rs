//! Rooms and the fixtures placed inside them

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::layout::types::Rect;

/// Semantic kind of a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Bedroom,
    Bathroom,
    Kitchen,
    Living,
    Dining,
    Veranda,
    Study,
    Storage,
    Laundry,
    Pantry,
    Closet,
    Hallway,
    Foyer,
}

impl RoomType {
    /// Every room type, in declaration order
    pub const ALL: [RoomType; 13] = [
        RoomType::Bedroom,
        RoomType::Bathroom,
        RoomType::Kitchen,
        RoomType::Living,
        RoomType::Dining,
        RoomType::Veranda,
        RoomType::Study,
        RoomType::Storage,
        RoomType::Laundry,
        RoomType::Pantry,
        RoomType::Closet,
        RoomType::Hallway,
        RoomType::Foyer,
    ];

    /// Parse an exact lowercase room type name
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == name)
    }

    /// Parse a room type, falling back to `Bedroom` for anything unrecognized
    pub fn coerce(name: &str) -> Self {
        Self::parse(name).unwrap_or(RoomType::Bedroom)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Bedroom => "bedroom",
            RoomType::Bathroom => "bathroom",
            RoomType::Kitchen => "kitchen",
            RoomType::Living => "living",
            RoomType::Dining => "dining",
            RoomType::Veranda => "veranda",
            RoomType::Study => "study",
            RoomType::Storage => "storage",
            RoomType::Laundry => "laundry",
            RoomType::Pantry => "pantry",
            RoomType::Closet => "closet",
            RoomType::Hallway => "hallway",
            RoomType::Foyer => "foyer",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DoorKind {
    Main,
    Interior,
    Sliding,
    French,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WindowKind {
    Standard,
    Bay,
    Sliding,
    French,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WallKind {
    Exterior,
    Interior,
    LoadBearing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElectricalKind {
    Outlet,
    Switch,
    Light,
    CeilingFan,
}

impl ElectricalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElectricalKind::Outlet => "outlet",
            ElectricalKind::Switch => "switch",
            ElectricalKind::Light => "light",
            ElectricalKind::CeilingFan => "ceiling-fan",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlumbingKind {
    Water,
    Drain,
    Gas,
}

impl PlumbingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlumbingKind::Water => "water",
            PlumbingKind::Drain => "drain",
            PlumbingKind::Gas => "gas",
        }
    }
}

/// A door on a room edge; `rotation` is in degrees
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Door {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub rotation: f64,
    pub width: f64,
    #[serde(rename = "type")]
    pub kind: DoorKind,
}

/// A window; `height` is the opening's elevation height, not a plan extent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Window {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(rename = "type")]
    pub kind: WindowKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Furniture {
    #[serde(rename = "type")]
    pub kind: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub length: f64,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}

impl Furniture {
    pub fn new(kind: &str, x: f64, y: f64, width: f64, length: f64, rotation: f64) -> Self {
        Self {
            kind: kind.to_string(),
            x,
            y,
            width,
            length,
            rotation,
            brand: None,
        }
    }

    pub fn with_brand(mut self, brand: &str) -> Self {
        self.brand = Some(brand.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub thickness: f64,
    #[serde(rename = "type")]
    pub kind: WallKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectricalPoint {
    #[serde(rename = "type")]
    pub kind: ElectricalKind,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlumbingPoint {
    #[serde(rename = "type")]
    pub kind: PlumbingKind,
    pub x: f64,
    pub y: f64,
}

/// A rectangular room. `x`/`y` is the top-left corner within the plan;
/// fixture coordinates are relative to the room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub width: f64,
    pub length: f64,
    pub x: f64,
    pub y: f64,
    pub description: String,
    pub doors: Vec<Door>,
    pub windows: Vec<Window>,
    pub furniture: Vec<Furniture>,
    pub walls: Vec<Wall>,
    pub electrical: Vec<ElectricalPoint>,
    pub plumbing: Vec<PlumbingPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flooring: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ceiling_height: Option<f64>,
    #[serde(default)]
    pub features: Vec<String>,
}

impl Room {
    pub fn area(&self) -> f64 {
        self.width * self.length
    }

    /// Footprint of the room in plan coordinates
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.length)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.length
    }
}
