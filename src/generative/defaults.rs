//! Fill-defaults pass from drafts to concrete rooms and plan metadata.
//!
//! Numeric and text fields follow "falsy means absent": a zero number or an
//! empty string is treated the same as a missing one.

use crate::generative::decode::{PlanDraft, RoomDraft};
use crate::layout::catalog::{
    archetype, default_door, default_electrical, default_furniture, default_plumbing,
    default_walls, default_window, DEFAULT_CEILING_HEIGHT, GENERIC_DESCRIPTION,
};
use crate::layout::config::LayoutConfig;
use crate::layout::types::Bounds;
use crate::model::plan::DEFAULT_BUILDING_CODE;
use crate::model::{
    estimated_cost, Orientation, PlanMetadata, PlanRequest, Room, RoomType, Style,
};

/// Side assumed for a room that arrives without a width or length
pub const DEFAULT_ROOM_SIDE: f64 = 3.0;

const DEFAULT_PLAN_FEATURES: [&str; 3] = ["open floor plan", "luxury finishes", "modern amenities"];

fn number(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && v.is_finite())
}

fn text(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Turn the `index`-th room draft into a room sized for `bounds`.
///
/// Sizes are limited to `max_room_share` of the plan and floored at
/// `min_room_side`. The position is clamped against the size as proposed,
/// before that limiting, so a later placement pass is still needed.
pub fn fill_room(draft: RoomDraft, index: usize, bounds: Bounds, config: &LayoutConfig) -> Room {
    let raw_width = number(draft.width).unwrap_or(DEFAULT_ROOM_SIDE);
    let raw_length = number(draft.length).unwrap_or(DEFAULT_ROOM_SIDE);

    let raw_type = text(draft.room_type);
    let room_type = RoomType::coerce(raw_type.as_deref().unwrap_or_default());

    let description = text(draft.description).unwrap_or_else(|| {
        // A missing type reads as bedroom, an unrecognized one gets the generic text
        RoomType::parse(raw_type.as_deref().unwrap_or("bedroom"))
            .map(|t| archetype(t).description)
            .unwrap_or(GENERIC_DESCRIPTION)
            .to_string()
    });

    Room {
        id: text(draft.id).unwrap_or_else(|| format!("room-{}", index)),
        name: text(draft.name).unwrap_or_else(|| format!("Room {}", index + 1)),
        room_type,
        width: raw_width
            .min(bounds.width * config.max_room_share)
            .max(config.min_room_side),
        length: raw_length
            .min(bounds.length * config.max_room_share)
            .max(config.min_room_side),
        x: number(draft.x)
            .unwrap_or(0.0)
            .min(bounds.width - raw_width)
            .max(0.0),
        y: number(draft.y)
            .unwrap_or(0.0)
            .min(bounds.length - raw_length)
            .max(0.0),
        description,
        doors: draft.doors.or_else(|| vec![default_door()]),
        windows: draft.windows.or_else(|| vec![default_window()]),
        furniture: draft
            .furniture
            .or_else(|| default_furniture(room_type, raw_width, raw_length)),
        walls: draft.walls.or_else(|| default_walls(raw_width, raw_length)),
        electrical: draft
            .electrical
            .or_else(|| default_electrical(room_type, raw_width, raw_length)),
        plumbing: draft.plumbing.or_else(|| default_plumbing(room_type)),
        flooring: Some(
            text(draft.flooring).unwrap_or_else(|| archetype(room_type).flooring.to_string()),
        ),
        ceiling_height: Some(number(draft.ceiling_height).unwrap_or(DEFAULT_CEILING_HEIGHT)),
        features: draft.features.or_else(Vec::new),
    }
}

/// Plan-level fields resolved from a draft and the request that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct PlanFields {
    pub name: String,
    pub description: String,
    pub metadata: PlanMetadata,
}

/// Resolve plan name, description and metadata. Payload values win over
/// request values, which win over built-in defaults.
pub fn fill_plan_fields(
    draft: &PlanDraft,
    request: &PlanRequest,
    room_count: usize,
    config: &LayoutConfig,
) -> PlanFields {
    let total_area = request.total_area();
    let requested_style = request
        .style
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let name = text(draft.name.clone()).unwrap_or_else(|| {
        format!(
            "Professional {}m x {}m {} Plan",
            request.width,
            request.length,
            requested_style.unwrap_or("Modern")
        )
    });

    let description = text(draft.description.clone()).unwrap_or_else(|| {
        format!(
            "Professional architectural floor plan for a {} sq m luxury home with {} rooms \
             featuring {} design, premium finishes, and architectural excellence.",
            total_area,
            room_count,
            requested_style.unwrap_or("modern")
        )
    });

    let style = draft
        .style
        .as_deref()
        .and_then(Style::parse)
        .or_else(|| request.parsed_style())
        .unwrap_or_default();

    let floors = draft
        .floors
        .filter(|f| *f > 0)
        .or(request.floors.filter(|f| *f > 0))
        .unwrap_or(1);

    let features = draft.features.clone().or_else(|| {
        DEFAULT_PLAN_FEATURES
            .iter()
            .map(|f| f.to_string())
            .collect()
    });

    let metadata = PlanMetadata {
        style,
        floors,
        orientation: draft
            .orientation
            .as_deref()
            .and_then(Orientation::parse)
            .unwrap_or_default(),
        features,
        estimated_cost: number(draft.estimated_cost)
            .unwrap_or_else(|| estimated_cost(total_area, config.cost_per_sq_m)),
        building_code: text(draft.building_code.clone())
            .unwrap_or_else(|| DEFAULT_BUILDING_CODE.to_string()),
    };

    PlanFields {
        name,
        description,
        metadata,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generative::decode::{decode_plan, ListField};
    use crate::model::{DoorKind, WallKind};

    fn bounds() -> Bounds {
        Bounds::new(10.0, 10.0)
    }

    #[test]
    fn test_empty_draft_gets_every_default() {
        let room = fill_room(RoomDraft::default(), 2, bounds(), &LayoutConfig::default());

        assert_eq!(room.id, "room-2");
        assert_eq!(room.name, "Room 3");
        assert_eq!(room.room_type, RoomType::Bedroom);
        assert_eq!((room.width, room.length), (3.0, 3.0));
        assert_eq!((room.x, room.y), (0.0, 0.0));
        assert_eq!(room.description, archetype(RoomType::Bedroom).description);
        assert_eq!(room.doors.len(), 1);
        assert_eq!(room.doors[0].kind, DoorKind::Interior);
        assert_eq!(room.windows[0].width, 1.5);
        assert_eq!(room.walls.len(), 4);
        assert!(room.walls.iter().all(|w| w.kind == WallKind::Exterior));
        assert_eq!(room.flooring.as_deref(), Some("carpet"));
        assert_eq!(room.ceiling_height, Some(2.8));
        assert!(room.features.is_empty());
    }

    #[test]
    fn test_unknown_type_coerced_with_generic_description() {
        let draft = RoomDraft {
            room_type: Some("garage".to_string()),
            ..Default::default()
        };
        let room = fill_room(draft, 0, bounds(), &LayoutConfig::default());
        assert_eq!(room.room_type, RoomType::Bedroom);
        assert_eq!(room.description, GENERIC_DESCRIPTION);
    }

    #[test]
    fn test_size_limits() {
        let draft = RoomDraft {
            width: Some(9.0),
            length: Some(0.5),
            ..Default::default()
        };
        let room = fill_room(draft, 0, bounds(), &LayoutConfig::default());
        assert_eq!(room.width, 6.0);
        assert_eq!(room.length, 1.5);
    }

    #[test]
    fn test_position_clamped_against_proposed_size() {
        let draft = RoomDraft {
            width: Some(4.0),
            x: Some(8.0),
            y: Some(-3.0),
            ..Default::default()
        };
        let room = fill_room(draft, 0, bounds(), &LayoutConfig::default());
        assert_eq!(room.x, 6.0);
        assert_eq!(room.y, 0.0);
    }

    #[test]
    fn test_zero_counts_as_missing() {
        let draft = RoomDraft {
            width: Some(0.0),
            ceiling_height: Some(0.0),
            ..Default::default()
        };
        let room = fill_room(draft, 0, bounds(), &LayoutConfig::default());
        assert_eq!(room.width, 3.0);
        assert_eq!(room.ceiling_height, Some(2.8));
    }

    #[test]
    fn test_malformed_list_replaced_present_kept() {
        let draft = RoomDraft {
            room_type: Some("kitchen".to_string()),
            furniture: ListField::Malformed,
            plumbing: ListField::Present(vec![]),
            ..Default::default()
        };
        let room = fill_room(draft, 0, bounds(), &LayoutConfig::default());
        assert!(room.furniture.iter().any(|f| f.kind == "stove"));
        assert!(room.plumbing.is_empty());
    }

    #[test]
    fn test_plan_fields_defaults() {
        let draft = decode_plan(r#"{"rooms": []}"#).unwrap();
        let request = PlanRequest::new(12.0, 15.0);
        let fields = fill_plan_fields(&draft, &request, 4, &LayoutConfig::default());

        assert_eq!(fields.name, "Professional 12m x 15m Modern Plan");
        assert!(fields.description.contains("180 sq m"));
        assert!(fields.description.contains("4 rooms"));
        assert_eq!(fields.metadata.style, Style::Modern);
        assert_eq!(fields.metadata.floors, 1);
        assert_eq!(fields.metadata.orientation, Orientation::South);
        assert_eq!(fields.metadata.features.len(), 3);
        assert_eq!(fields.metadata.estimated_cost, 22_500_000.0);
        assert_eq!(fields.metadata.building_code, "NBC-2016");
    }

    #[test]
    fn test_plan_fields_precedence() {
        let draft = decode_plan(
            r#"{"style": "colonial", "floors": 0, "orientation": "East",
                "estimatedCost": 5000000, "features": ["pool"], "rooms": []}"#,
        )
        .unwrap();
        let request = PlanRequest::new(10.0, 10.0)
            .with_style("minimalist")
            .with_floors(2);
        let fields = fill_plan_fields(&draft, &request, 0, &LayoutConfig::default());

        assert_eq!(fields.metadata.style, Style::Colonial);
        assert_eq!(fields.metadata.floors, 2);
        assert_eq!(fields.metadata.orientation, Orientation::East);
        assert_eq!(fields.metadata.estimated_cost, 5_000_000.0);
        assert_eq!(fields.metadata.features, vec!["pool".to_string()]);
        assert_eq!(fields.name, "Professional 10m x 10m minimalist Plan");
    }
}
