//! Plan assembly for both generation paths.
//!
//! The deterministic fallback path lays out the standard program on the
//! reference grid, scales it to the requested footprint and clamps every room
//! into bounds. Overlaps that clamping reintroduces are not re-resolved on this
//! path.
//!
//! The generative path fills defaults into a decoded draft, runs the
//! overlap-resolution placement and clamps the result once more.

use log::debug;

use crate::generative::decode::PlanDraft;
use crate::generative::defaults::{fill_plan_fields, fill_room};
use crate::layout::catalog::standard_program;
use crate::layout::config::LayoutConfig;
use crate::layout::placement::{place_rooms, PlacementReport};
use crate::layout::transform::{clamp_to_bounds, ScaleTransform};
use crate::layout::types::Bounds;
use crate::model::plan::DEFAULT_BUILDING_CODE;
use crate::model::{estimated_cost, FloorPlan, Orientation, PlanMetadata, PlanRequest, Room};

/// Features listed on every fallback plan
pub const FALLBACK_FEATURES: [&str; 6] = [
    "open floor plan",
    "master suite",
    "modern kitchen",
    "multiple bathrooms",
    "laundry room",
    "storage solutions",
];

/// The standard program scaled to the request's footprint and clamped into bounds
pub fn scaled_program(request: &PlanRequest, config: &LayoutConfig) -> Vec<Room> {
    let bounds = Bounds::new(request.width, request.length);
    let transform =
        ScaleTransform::from_reference(request.width, request.length, config.reference_extent);

    standard_program(request.width, request.length)
        .into_iter()
        .map(|mut room| {
            transform.apply_to_room(&mut room);
            clamp_to_bounds(&mut room, bounds);
            room
        })
        .collect()
}

/// Build the deterministic fallback plan for a request.
///
/// Requirements and style only affect the descriptive fields; the room program
/// and its geometry depend on width and length alone.
pub fn fallback_plan(request: &PlanRequest, config: &LayoutConfig) -> FloorPlan {
    let rooms = scaled_program(request, config);
    let total_area = request.total_area();

    let special = request
        .requirements_text()
        .map(|r| format!("Special features: {}", r))
        .unwrap_or_default();

    let name = format!(
        "Professional {}m x {}m Architectural Plan",
        request.width, request.length
    );
    let description = format!(
        "Professional architectural floor plan featuring {} rooms with modern amenities, \
         optimal space utilization, and contemporary design. {} Total area: {} sq m designed \
         for luxury family living with attention to architectural details and building standards.",
        rooms.len(),
        special,
        total_area
    );

    let metadata = PlanMetadata {
        style: request.parsed_style().unwrap_or_default(),
        floors: request.floors.filter(|f| *f > 0).unwrap_or(1),
        orientation: Orientation::South,
        features: FALLBACK_FEATURES.iter().map(|f| f.to_string()).collect(),
        estimated_cost: estimated_cost(total_area, config.cost_per_sq_m),
        building_code: DEFAULT_BUILDING_CODE.to_string(),
    };

    debug!(
        "fallback plan {}x{} with {} rooms",
        request.width,
        request.length,
        rooms.len()
    );

    FloorPlan::new(name, description, request.width, request.length, rooms, metadata)
}

/// Turn a decoded generative draft into a finished plan.
///
/// Returns the plan with rooms in placement order together with the placement
/// outcome of every room.
pub fn assemble_plan(
    draft: PlanDraft,
    request: &PlanRequest,
    config: &LayoutConfig,
) -> (FloorPlan, Vec<PlacementReport>) {
    let bounds = Bounds::new(request.width, request.length);
    let fields = fill_plan_fields(&draft, request, draft.rooms.len(), config);

    let rooms: Vec<Room> = draft
        .rooms
        .into_iter()
        .enumerate()
        .map(|(index, room)| fill_room(room, index, bounds, config))
        .collect();

    let placement = place_rooms(rooms, bounds, config);
    let mut rooms = placement.rooms;
    for room in &mut rooms {
        clamp_to_bounds(room, bounds);
    }

    debug!(
        "assembled generative plan '{}' with {} rooms",
        fields.name,
        rooms.len()
    );

    let plan = FloorPlan::new(
        fields.name,
        fields.description,
        request.width,
        request.length,
        rooms,
        fields.metadata,
    );
    (plan, placement.reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generative::decode::decode_plan;
    use crate::model::{RoomType, Style};

    #[test]
    fn test_fallback_plan_fits_bounds() {
        let request = PlanRequest::new(12.0, 15.0);
        let plan = fallback_plan(&request, &LayoutConfig::default());

        assert_eq!(plan.total_area, 180.0);
        assert_eq!(plan.rooms.len(), 13);
        for room in &plan.rooms {
            assert!(room.x >= 0.0 && room.y >= 0.0, "{} out of bounds", room.name);
            assert!(room.right() <= 12.0, "{} too wide", room.name);
            assert!(room.bottom() <= 15.0, "{} too long", room.name);
        }
    }

    #[test]
    fn test_fallback_metadata() {
        let request = PlanRequest::new(10.0, 12.0)
            .with_style("traditional")
            .with_requirements("home office");
        let plan = fallback_plan(&request, &LayoutConfig::default());

        assert_eq!(plan.name, "Professional 10m x 12m Architectural Plan");
        assert!(plan.description.contains("Special features: home office"));
        assert!(plan.description.contains("Total area: 120 sq m"));
        assert_eq!(plan.metadata.style, Style::Traditional);
        assert_eq!(plan.metadata.floors, 1);
        assert_eq!(plan.metadata.estimated_cost, 15_000_000.0);
        assert_eq!(plan.metadata.features.len(), 6);
    }

    #[test]
    fn test_fallback_geometry_ignores_requirements() {
        let config = LayoutConfig::default();
        let plain = fallback_plan(&PlanRequest::new(14.0, 11.0), &config);
        let fancy = fallback_plan(
            &PlanRequest::new(14.0, 11.0)
                .with_requirements("three car garage")
                .with_style("colonial"),
            &config,
        );
        for (a, b) in plain.rooms.iter().zip(&fancy.rooms) {
            assert_eq!(a.rect(), b.rect());
            assert_eq!(a.room_type, b.room_type);
        }
    }

    #[test]
    fn test_fallback_scales_living_room() {
        let plan = fallback_plan(&PlanRequest::new(12.0, 15.0), &LayoutConfig::default());
        let living = &plan.rooms[1];
        assert_eq!(living.room_type, RoomType::Living);
        // min(5.5, 12 * 0.45) scaled by 12 / 15
        assert!((living.width - 5.4 * 0.8).abs() < 1e-9);
        assert!((living.x - 0.5 * 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_assemble_plan_places_and_defaults() {
        let draft = decode_plan(
            r#"{"rooms": [
                {"name": "A", "type": "living", "width": 5, "length": 4, "x": 0, "y": 0},
                {"name": "B", "type": "spa", "width": 3, "length": 3, "x": 0, "y": 0}
            ]}"#,
        )
        .unwrap();
        let request = PlanRequest::new(12.0, 12.0);
        let config = LayoutConfig::default();
        let (plan, reports) = assemble_plan(draft, &request, &config);

        assert_eq!(plan.rooms.len(), 2);
        assert_eq!(reports.len(), 2);
        assert_eq!(plan.rooms[0].name, "A");
        assert_eq!(plan.rooms[1].room_type, RoomType::Bedroom);
        assert!(!plan.rooms[0]
            .rect()
            .overlaps(&plan.rooms[1].rect(), config.margin));
        assert_eq!(plan.metadata.style, Style::Modern);
        assert_eq!(plan.metadata.estimated_cost, 18_000_000.0);
    }
}
