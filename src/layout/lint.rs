//! Lint checks for finished floor plans.
//!
//! Runs after a plan is assembled and reports mechanical defects: rooms that
//! leave the plan outline, rooms closer to each other than the clearance
//! margin, and area figures that do not add up. Findings are warnings; the
//! plan is still usable.

use std::fmt;

use crate::model::{FloorPlan, Room};

/// Slack allowed on bounds comparisons for accumulated float error
const EPSILON: f64 = 1e-6;

/// A lint warning about a plan defect
#[derive(Debug, Clone, PartialEq)]
pub struct LintWarning {
    pub category: LintCategory,
    pub message: String,
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.message)
    }
}

/// Category of lint defect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintCategory {
    Bounds,
    Overlap,
    Area,
}

impl fmt::Display for LintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintCategory::Bounds => write!(f, "bounds"),
            LintCategory::Overlap => write!(f, "overlap"),
            LintCategory::Area => write!(f, "area"),
        }
    }
}

/// Run all lint checks on a plan. `margin` is the clearance rooms should keep.
pub fn check(plan: &FloorPlan, margin: f64) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    check_bounds(plan, &mut warnings);
    check_overlaps(plan, margin, &mut warnings);
    check_area(plan, &mut warnings);
    warnings
}

fn display_name(room: &Room) -> String {
    format!("\"{}\"", room.name)
}

// ── Bounds ────────────────────────────────────────────────────────

fn check_bounds(plan: &FloorPlan, warnings: &mut Vec<LintWarning>) {
    for room in &plan.rooms {
        if room.x < -EPSILON || room.y < -EPSILON {
            warnings.push(LintWarning {
                category: LintCategory::Bounds,
                message: format!(
                    "room {} starts outside the plan at ({:.2}, {:.2})",
                    display_name(room),
                    room.x,
                    room.y
                ),
            });
        }
        if room.right() > plan.width + EPSILON || room.bottom() > plan.length + EPSILON {
            warnings.push(LintWarning {
                category: LintCategory::Bounds,
                message: format!(
                    "room {} extends to ({:.2}, {:.2}) beyond the {}m x {}m outline",
                    display_name(room),
                    room.right(),
                    room.bottom(),
                    plan.width,
                    plan.length
                ),
            });
        }
    }
}

// ── Overlap ───────────────────────────────────────────────────────

fn check_overlaps(plan: &FloorPlan, margin: f64, warnings: &mut Vec<LintWarning>) {
    for (i, a) in plan.rooms.iter().enumerate() {
        for b in &plan.rooms[i + 1..] {
            let (ra, rb) = (a.rect(), b.rect());
            if !ra.overlaps(&rb, margin) {
                continue;
            }

            let overlap_w = ra.right().min(rb.right()) - ra.x.max(rb.x);
            let overlap_l = ra.bottom().min(rb.bottom()) - ra.y.max(rb.y);
            let message = if overlap_w > EPSILON && overlap_l > EPSILON {
                format!(
                    "rooms {} and {} overlap by {:.2}x{:.2}m",
                    display_name(a),
                    display_name(b),
                    overlap_w,
                    overlap_l
                )
            } else {
                format!(
                    "rooms {} and {} are closer than {}m",
                    display_name(a),
                    display_name(b),
                    margin
                )
            };
            warnings.push(LintWarning {
                category: LintCategory::Overlap,
                message,
            });
        }
    }
}

// ── Area ──────────────────────────────────────────────────────────

fn check_area(plan: &FloorPlan, warnings: &mut Vec<LintWarning>) {
    if plan.total_area != plan.width * plan.length {
        warnings.push(LintWarning {
            category: LintCategory::Area,
            message: format!(
                "total area {} does not match {}m x {}m",
                plan.total_area, plan.width, plan.length
            ),
        });
    }

    for room in plan.rooms.iter().filter(|r| r.area() <= 0.0) {
        warnings.push(LintWarning {
            category: LintCategory::Area,
            message: format!("room {} has no floor area", display_name(room)),
        });
    }

    let room_area = plan.room_area();
    if room_area > plan.total_area + EPSILON {
        warnings.push(LintWarning {
            category: LintCategory::Area,
            message: format!(
                "rooms cover {:.2} sq m, more than the {} sq m plan",
                room_area, plan.total_area
            ),
        });
    }
}
