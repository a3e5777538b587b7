//! Overlap-resolution placement for rooms with untrusted coordinates.
//!
//! Rooms are re-placed greedily, largest first. Each room is clamped to the
//! bounds less the clearance margin, then the first free top-left position on a
//! fixed-step grid is taken, scanning x in the outer loop and y in the inner
//! loop. A room that finds no free position is shrunk once and rescanned; if it
//! still does not fit it keeps the last position tried.
//!
//! Placement never fails. Degraded results are reported through
//! [`PlacementReport`]s and logged at `warn` level.

use std::cmp::Ordering;
use std::fmt;

use log::{debug, warn};
use serde::Serialize;

use crate::layout::config::LayoutConfig;
use crate::layout::types::{Bounds, Rect};
use crate::model::Room;

/// Smallest step the scan will use; keeps a zero or negative configured step
/// from stalling the grid walk
const MIN_SCAN_STEP: f64 = 0.01;

/// How a room ended up where it is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlacementOutcome {
    /// Found a free position at its clamped size
    Placed,
    /// Found a free position only after shrinking
    ShrunkAndPlaced,
    /// No free position even after shrinking; left at the last position tried
    PlacedWithOverlap,
}

impl PlacementOutcome {
    pub fn is_degraded(&self) -> bool {
        !matches!(self, PlacementOutcome::Placed)
    }
}

impl fmt::Display for PlacementOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementOutcome::Placed => write!(f, "placed"),
            PlacementOutcome::ShrunkAndPlaced => write!(f, "shrunk and placed"),
            PlacementOutcome::PlacedWithOverlap => write!(f, "placed with overlap"),
        }
    }
}

/// Outcome for a single room
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementReport {
    pub room_id: String,
    pub outcome: PlacementOutcome,
}

/// Rooms in placement order together with one report per room
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub rooms: Vec<Room>,
    pub reports: Vec<PlacementReport>,
}

impl Placement {
    /// Reports for rooms that were shrunk or left overlapping
    pub fn degraded(&self) -> impl Iterator<Item = &PlacementReport> {
        self.reports.iter().filter(|r| r.outcome.is_degraded())
    }

    pub fn is_clean(&self) -> bool {
        self.degraded().next().is_none()
    }
}

/// True when `a` and `b` are closer than `margin` on both axes
pub fn rects_overlap(a: &Rect, b: &Rect, margin: f64) -> bool {
    a.overlaps(b, margin)
}

/// Re-place `rooms` inside `bounds` so that no two are closer than the configured margin.
///
/// The sort is stable, so equal-area rooms keep their input order, and the
/// result is deterministic for identical input.
pub fn place_rooms(rooms: Vec<Room>, bounds: Bounds, config: &LayoutConfig) -> Placement {
    let margin = config.margin;
    let step = config.scan_step.max(MIN_SCAN_STEP);

    let mut ordered = rooms;
    ordered.sort_by(|a, b| b.area().partial_cmp(&a.area()).unwrap_or(Ordering::Equal));

    let mut placed: Vec<Room> = Vec::with_capacity(ordered.len());
    let mut reports = Vec::with_capacity(ordered.len());

    for mut room in ordered {
        room.width = room.width.min(bounds.width - margin);
        room.length = room.length.min(bounds.length - margin);

        let outcome = if scan(&mut room, &placed, bounds, margin, step) {
            PlacementOutcome::Placed
        } else {
            room.width = (room.width * config.shrink_factor).max(config.min_room_side);
            room.length = (room.length * config.shrink_factor).max(config.min_room_side);
            if scan(&mut room, &placed, bounds, margin, step) {
                PlacementOutcome::ShrunkAndPlaced
            } else {
                PlacementOutcome::PlacedWithOverlap
            }
        };

        if outcome.is_degraded() {
            warn!(
                "room '{}' ({}) {} at ({:.2}, {:.2}) size {:.2}x{:.2}",
                room.name, room.id, outcome, room.x, room.y, room.width, room.length
            );
        } else {
            debug!("room '{}' placed at ({:.2}, {:.2})", room.name, room.x, room.y);
        }

        reports.push(PlacementReport {
            room_id: room.id.clone(),
            outcome,
        });
        placed.push(room);
    }

    Placement {
        rooms: placed,
        reports,
    }
}

/// Walk the candidate grid, moving `room` to each position in turn, until one is
/// clear of every room in `placed`. Returns false if none was.
fn scan(room: &mut Room, placed: &[Room], bounds: Bounds, margin: f64, step: f64) -> bool {
    let max_x = bounds.width - room.width;
    let max_y = bounds.length - room.length;

    let mut x = 0.0;
    while x <= max_x {
        let mut y = 0.0;
        while y <= max_y {
            room.x = x;
            room.y = y;
            let candidate = room.rect();
            if !placed
                .iter()
                .any(|other| rects_overlap(&candidate, &other.rect(), margin))
            {
                return true;
            }
            y += step;
        }
        x += step;
    }
    false
}
