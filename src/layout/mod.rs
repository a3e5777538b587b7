//! Layout engine for computing room positions and sizes
//!
//! Two paths produce plans: the deterministic fallback, which scales a fixed
//! room program onto the requested footprint, and the generative path, which
//! re-places rooms proposed by an external source so that they fit and keep
//! their clearance.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod lint;
pub mod placement;
pub mod transform;
pub mod types;

pub use config::{ConfigError, LayoutConfig};
pub use engine::{assemble_plan, fallback_plan, scaled_program};
pub use lint::{LintCategory, LintWarning};
pub use placement::{place_rooms, rects_overlap, Placement, PlacementOutcome, PlacementReport};
pub use transform::{clamp_to_bounds, ScaleTransform};
pub use types::*;
