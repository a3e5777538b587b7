//! Integration tests for overlap-resolution placement

use floorplan_engine::layout::catalog::standard_program;
use floorplan_engine::layout::{place_rooms, rects_overlap, Bounds, Rect};
use floorplan_engine::model::Room;
use floorplan_engine::{LayoutConfig, PlacementOutcome};

fn room(id: &str, width: f64, length: f64, x: f64, y: f64) -> Room {
    let mut room = standard_program(15.0, 15.0).remove(0);
    room.id = id.to_string();
    room.name = id.to_string();
    room.width = width;
    room.length = length;
    room.x = x;
    room.y = y;
    room
}

fn assert_separated(rooms: &[Room], margin: f64) {
    for (i, a) in rooms.iter().enumerate() {
        for b in &rooms[i + 1..] {
            assert!(
                !rects_overlap(&a.rect(), &b.rect(), margin),
                "{} and {} closer than {}",
                a.id,
                b.id,
                margin
            );
        }
    }
}

#[test]
fn test_identical_rooms_at_origin() {
    let config = LayoutConfig::new().with_margin(0.2);
    let rooms = vec![room("a", 4.0, 4.0, 0.0, 0.0), room("b", 4.0, 4.0, 0.0, 0.0)];
    let placement = place_rooms(rooms, Bounds::new(10.0, 10.0), &config);

    assert_separated(&placement.rooms, 0.2);
    assert!(placement.is_clean());
}

#[test]
fn test_oversized_room_clamped_and_placed() {
    let config = LayoutConfig::default();
    let rooms = vec![room("huge", 50.0, 50.0, 0.0, 0.0)];
    let placement = place_rooms(rooms, Bounds::new(10.0, 10.0), &config);

    let huge = &placement.rooms[0];
    assert!(huge.width <= 10.0 - config.margin);
    assert!(huge.length <= 10.0 - config.margin);
    assert_eq!(placement.reports[0].outcome, PlacementOutcome::Placed);
}

#[test]
fn test_oversized_room_with_neighbour_does_not_panic() {
    let rooms = vec![room("huge", 50.0, 50.0, 0.0, 0.0), room("small", 2.0, 2.0, 0.0, 0.0)];
    let placement = place_rooms(rooms, Bounds::new(10.0, 10.0), &LayoutConfig::default());

    assert_eq!(placement.rooms.len(), 2);
    assert_eq!(placement.reports[0].outcome, PlacementOutcome::Placed);
    assert!(placement.reports[1].outcome.is_degraded());
    assert_eq!(placement.degraded().count(), 1);
}

#[test]
fn test_mixed_rooms_separated() {
    let config = LayoutConfig::default();
    let rooms = vec![
        room("a", 2.0, 2.0, 3.0, 3.0),
        room("b", 4.0, 4.0, 3.0, 3.0),
        room("c", 3.0, 5.0, 3.0, 3.0),
        room("d", 3.0, 3.0, 3.0, 3.0),
        room("e", 5.0, 2.0, 3.0, 3.0),
    ];
    let placement = place_rooms(rooms, Bounds::new(15.0, 15.0), &config);

    assert!(placement
        .reports
        .iter()
        .all(|r| r.outcome == PlacementOutcome::Placed));
    assert_separated(&placement.rooms, config.margin);

    let bounds = Rect::new(0.0, 0.0, 15.0, 15.0);
    for r in &placement.rooms {
        assert!(bounds.contains_rect(&r.rect()), "{} out of bounds", r.id);
    }
}

#[test]
fn test_largest_first_order() {
    let rooms = vec![
        room("small", 2.0, 2.0, 0.0, 0.0),
        room("large", 5.0, 5.0, 0.0, 0.0),
        room("medium", 3.0, 3.0, 0.0, 0.0),
    ];
    let placement = place_rooms(rooms, Bounds::new(15.0, 15.0), &LayoutConfig::default());
    let ids: Vec<&str> = placement.rooms.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["large", "medium", "small"]);
    assert_eq!((placement.rooms[0].x, placement.rooms[0].y), (0.0, 0.0));
}

#[test]
fn test_placement_is_deterministic() {
    let rooms = vec![
        room("a", 4.0, 3.0, 1.0, 1.0),
        room("b", 3.0, 4.0, 1.0, 1.0),
        room("c", 6.0, 2.0, 1.0, 1.0),
        room("d", 2.5, 2.5, 1.0, 1.0),
    ];
    let bounds = Bounds::new(12.0, 9.0);
    let config = LayoutConfig::default();

    let first = place_rooms(rooms.clone(), bounds, &config);
    let second = place_rooms(rooms, bounds, &config);
    assert_eq!(first.rooms, second.rooms);
    assert_eq!(first.reports, second.reports);
}

#[test]
fn test_rects_overlap_margin() {
    let a = Rect::new(0.0, 0.0, 4.0, 4.0);
    let b = Rect::new(4.2, 0.0, 4.0, 4.0);
    assert!(!rects_overlap(&a, &b, 0.2));
    assert!(rects_overlap(&a, &b, 0.3));
    assert!(!rects_overlap(&a, &Rect::new(0.0, 10.0, 1.0, 1.0), 0.3));
}
