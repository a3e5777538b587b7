//! Colour palette for rendered plans
//!
//! Colours are looked up by symbolic token so a plan can be rendered with
//! different schemes. Room tokens follow `room-{type}-{fill|stroke|text}`,
//! fixture tokens `electrical-{kind}` and `plumbing-{kind}`; the rest are
//! structural (`door`, `window-fill`, `wall-exterior`, ...).

use std::collections::HashMap;
use std::path::Path;

use lazy_static::lazy_static;
use serde::Deserialize;
use thiserror::Error;

use crate::model::{ElectricalKind, PlumbingKind, RoomType, WallKind};

/// Errors that can occur when loading or parsing palettes
#[derive(Error, Debug)]
pub enum PaletteError {
    #[error("Failed to read palette file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse palette TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A palette mapping colour tokens to concrete values
#[derive(Debug, Clone)]
pub struct Palette {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Colour mappings: token name -> hex colour
    pub colors: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlPalette {
    metadata: Option<TomlMetadata>,
    colors: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// Default palette, light room tints with darker borders and labels
const DEFAULT_PALETTE: &str = r##"
[metadata]
name = "Blueprint Light"

[colors]
background = "#ffffff"
outline = "#d1d5db"

room-bedroom-fill = "#dbeafe"
room-bedroom-stroke = "#93c5fd"
room-bedroom-text = "#1e40af"
room-bathroom-fill = "#dcfce7"
room-bathroom-stroke = "#86efac"
room-bathroom-text = "#166534"
room-kitchen-fill = "#fef9c3"
room-kitchen-stroke = "#fde047"
room-kitchen-text = "#854d0e"
room-living-fill = "#f3e8ff"
room-living-stroke = "#d8b4fe"
room-living-text = "#6b21a8"
room-dining-fill = "#fee2e2"
room-dining-stroke = "#fca5a5"
room-dining-text = "#991b1b"
room-veranda-fill = "#ffedd5"
room-veranda-stroke = "#fdba74"
room-veranda-text = "#9a3412"
room-study-fill = "#e0e7ff"
room-study-stroke = "#a5b4fc"
room-study-text = "#3730a3"
room-storage-fill = "#f3f4f6"
room-storage-stroke = "#d1d5db"
room-storage-text = "#1f2937"
room-laundry-fill = "#cffafe"
room-laundry-stroke = "#67e8f9"
room-laundry-text = "#155e75"
room-pantry-fill = "#fef3c7"
room-pantry-stroke = "#fcd34d"
room-pantry-text = "#92400e"
room-closet-fill = "#fce7f3"
room-closet-stroke = "#f9a8d4"
room-closet-text = "#9d174d"
room-hallway-fill = "#f1f5f9"
room-hallway-stroke = "#cbd5e1"
room-hallway-text = "#1e293b"
room-foyer-fill = "#d1fae5"
room-foyer-stroke = "#6ee7b7"
room-foyer-text = "#065f46"

furniture-fill = "#4b5563"
furniture-stroke = "#374151"
door = "#8b5a2b"
window-fill = "#22d3ee"
window-stroke = "#0891b2"
wall-exterior = "#1f2937"
wall-interior = "#6b7280"
wall-load-bearing = "#111827"

electrical-outlet = "#eab308"
electrical-switch = "#3b82f6"
electrical-light = "#f97316"
electrical-ceiling-fan = "#22c55e"

plumbing-water = "#2563eb"
plumbing-drain = "#4b5563"
plumbing-gas = "#dc2626"
"##;

lazy_static! {
    static ref DEFAULT: Palette =
        Palette::from_str(DEFAULT_PALETTE).expect("Default palette should be valid TOML");
}

impl Palette {
    /// Load palette from TOML file
    pub fn from_file(path: &Path) -> Result<Self, PaletteError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load palette from TOML string
    pub fn from_str(content: &str) -> Result<Self, PaletteError> {
        let parsed: TomlPalette = toml::from_str(content)?;

        Ok(Palette {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            colors: parsed.colors,
        })
    }

    /// Resolve a colour token to a concrete value
    ///
    /// Returns None if the token is not defined in this palette.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(|s| s.as_str())
    }

    /// Resolve a colour token with fallback to the default palette
    ///
    /// Fallback order:
    /// 1. This palette
    /// 2. The default palette
    /// 3. A neutral colour chosen by the token's suffix
    pub fn resolve_or_default(&self, token: &str) -> String {
        if let Some(color) = self.resolve(token) {
            return color.to_string();
        }
        if let Some(color) = DEFAULT.resolve(token) {
            return color.to_string();
        }

        if token.ends_with("-fill") {
            return "#f3f4f6".to_string();
        }
        if token.ends_with("-stroke") {
            return "#d1d5db".to_string();
        }
        if token.ends_with("-text") {
            return "#1f2937".to_string();
        }
        "#333333".to_string()
    }

    pub fn room_fill(&self, room_type: RoomType) -> String {
        self.resolve_or_default(&format!("room-{}-fill", room_type))
    }

    pub fn room_stroke(&self, room_type: RoomType) -> String {
        self.resolve_or_default(&format!("room-{}-stroke", room_type))
    }

    pub fn room_text(&self, room_type: RoomType) -> String {
        self.resolve_or_default(&format!("room-{}-text", room_type))
    }

    pub fn wall(&self, kind: WallKind) -> String {
        let token = match kind {
            WallKind::Exterior => "wall-exterior",
            WallKind::Interior => "wall-interior",
            WallKind::LoadBearing => "wall-load-bearing",
        };
        self.resolve_or_default(token)
    }

    pub fn electrical(&self, kind: ElectricalKind) -> String {
        self.resolve_or_default(&format!("electrical-{}", kind.as_str()))
    }

    pub fn plumbing(&self, kind: PlumbingKind) -> String {
        self.resolve_or_default(&format!("plumbing-{}", kind.as_str()))
    }
}

impl Default for Palette {
    fn default() -> Self {
        DEFAULT.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> Palette {
        Palette {
            name: None,
            description: None,
            colors: HashMap::new(),
        }
    }

    #[test]
    fn test_default_palette_covers_room_types() {
        let palette = Palette::default();
        for t in RoomType::ALL {
            for part in ["fill", "stroke", "text"] {
                let token = format!("room-{}-{}", t, part);
                assert!(palette.resolve(&token).is_some(), "missing {}", token);
            }
        }
        assert_eq!(palette.name.as_deref(), Some("Blueprint Light"));
    }

    #[test]
    fn test_room_and_fixture_colors() {
        let palette = Palette::default();
        assert_eq!(palette.room_fill(RoomType::Bedroom), "#dbeafe");
        assert_eq!(palette.room_fill(RoomType::Foyer), "#d1fae5");
        assert_eq!(palette.electrical(ElectricalKind::CeilingFan), "#22c55e");
        assert_eq!(palette.plumbing(PlumbingKind::Gas), "#dc2626");
        assert_eq!(palette.wall(WallKind::LoadBearing), "#111827");
    }

    #[test]
    fn test_resolve_missing_token() {
        assert_eq!(Palette::default().resolve("nonexistent"), None);
    }

    #[test]
    fn test_resolve_or_default_fallback() {
        assert_eq!(empty().resolve_or_default("room-kitchen-fill"), "#fef9c3");
    }

    #[test]
    fn test_resolve_or_default_suffix_fallback() {
        let palette = empty();
        assert_eq!(palette.resolve_or_default("room-garage-fill"), "#f3f4f6");
        assert_eq!(palette.resolve_or_default("annex-stroke"), "#d1d5db");
        assert_eq!(palette.resolve_or_default("mystery"), "#333333");
    }

    #[test]
    fn test_parse_toml_overrides() {
        let toml_str = r##"
[metadata]
name = "Night"
description = "Dark scheme"

[colors]
room-bedroom-fill = "#1e3a8a"
"##;
        let palette = Palette::from_str(toml_str).expect("Should parse");
        assert_eq!(palette.name, Some("Night".to_string()));
        assert_eq!(palette.description, Some("Dark scheme".to_string()));
        assert_eq!(palette.room_fill(RoomType::Bedroom), "#1e3a8a");
        assert_eq!(palette.room_fill(RoomType::Study), "#e0e7ff");
    }

    #[test]
    fn test_invalid_toml_error() {
        assert!(Palette::from_str("this is not valid toml {{{{").is_err());
    }
}
