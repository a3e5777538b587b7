//! Floor plan data model
//!
//! Rooms, their fixtures, and the plan aggregate that owns them. Every
//! geometric field is in meters with the origin at the plan's top-left corner.

pub mod plan;
pub mod request;
pub mod room;

pub use plan::{estimated_cost, FloorPlan, Orientation, PlanMetadata, Style};
pub use request::{PlanRequest, RequestError, MAX_SIDE, MIN_SIDE};
pub use room::{
    Door, DoorKind, ElectricalKind, ElectricalPoint, Furniture, PlumbingKind, PlumbingPoint, Room,
    RoomType, Wall, WallKind, Window, WindowKind,
};
