//! Anisotropic scaling from the reference grid to the requested footprint.
//!
//! The standard program is laid out on a square reference grid. A
//! [`ScaleTransform`] maps it onto the caller's actual width and length with
//! independent factors per axis:
//!
//! ```text
//! scale_x = width  / extent
//! scale_y = length / extent
//! ```
//!
//! Every x-coordinate and x-extent (room width, fixture width, wall x1/x2) is
//! multiplied by `scale_x`, every y-coordinate and y-extent by `scale_y`. Fixed
//! size objects are deliberately distorted along with everything else so the
//! reference topology is kept on non-square footprints.
//!
//! Window height is an elevation and wall thickness a cross-section; neither is
//! a plan extent, so both are left as-is.

use crate::layout::types::Bounds;
use crate::model::Room;

/// Per-axis scale factors between the reference grid and a target footprint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleTransform {
    pub scale_x: f64,
    pub scale_y: f64,
}

impl ScaleTransform {
    pub fn new(scale_x: f64, scale_y: f64) -> Self {
        Self { scale_x, scale_y }
    }

    /// Factors mapping a square `extent` x `extent` grid onto `width` x `length`
    pub fn from_reference(width: f64, length: f64, extent: f64) -> Self {
        Self::new(width / extent, length / extent)
    }

    /// Check if this transform leaves geometry unchanged
    pub fn is_identity(&self) -> bool {
        (self.scale_x - 1.0).abs() < f64::EPSILON && (self.scale_y - 1.0).abs() < f64::EPSILON
    }

    /// Scale a room and all of its fixtures in place
    pub fn apply_to_room(&self, room: &mut Room) {
        let (sx, sy) = (self.scale_x, self.scale_y);
        map_room(room, |x| x * sx, |y| y * sy);
    }

    /// Undo [`apply_to_room`](Self::apply_to_room) by dividing by the same factors
    pub fn invert_room(&self, room: &mut Room) {
        let (sx, sy) = (self.scale_x, self.scale_y);
        map_room(room, |x| x / sx, |y| y / sy);
    }
}

/// Apply `fx` to every x quantity and `fy` to every y quantity of a room
fn map_room(room: &mut Room, fx: impl Fn(f64) -> f64, fy: impl Fn(f64) -> f64) {
    room.x = fx(room.x);
    room.y = fy(room.y);
    room.width = fx(room.width);
    room.length = fy(room.length);
    for door in &mut room.doors {
        door.x = fx(door.x);
        door.y = fy(door.y);
        door.width = fx(door.width);
    }
    for window in &mut room.windows {
        window.x = fx(window.x);
        window.y = fy(window.y);
        window.width = fx(window.width);
    }
    for item in &mut room.furniture {
        item.x = fx(item.x);
        item.y = fy(item.y);
        item.width = fx(item.width);
        item.length = fy(item.length);
    }
    for wall in &mut room.walls {
        wall.x1 = fx(wall.x1);
        wall.x2 = fx(wall.x2);
        wall.y1 = fy(wall.y1);
        wall.y2 = fy(wall.y2);
    }
    for point in &mut room.electrical {
        point.x = fx(point.x);
        point.y = fy(point.y);
    }
    for point in &mut room.plumbing {
        point.x = fx(point.x);
        point.y = fy(point.y);
    }
}

/// Pull a room's position back inside `bounds` so that `x + width <= bounds.width`
/// holds exactly in floating point, likewise for y. Sizes are left alone, and a
/// room larger than the bounds ends up at the origin.
pub fn clamp_to_bounds(room: &mut Room, bounds: Bounds) {
    room.x = clamp_axis(room.x, room.width, bounds.width);
    room.y = clamp_axis(room.y, room.length, bounds.length);
}

/// Largest start `<= pos` whose rounded end `start + size` stays within `limit`
fn clamp_axis(pos: f64, size: f64, limit: f64) -> f64 {
    let mut start = pos.min(limit - size).max(0.0);
    // (limit - size) + size can round a few ulps past limit
    while start > 0.0 && start + size > limit {
        start = next_down(start);
    }
    start
}

/// The next representable value below a positive finite `value`
fn next_down(value: f64) -> f64 {
    f64::from_bits(value.to_bits() - 1)
}
