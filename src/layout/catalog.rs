//! Room archetypes and the standard home program
//!
//! The archetype table supplies per-type defaults (description, flooring) used
//! when a room arrives without them. The fixture generators produce a plausible
//! complement of furniture, walls, electrical and plumbing for a room of a given
//! type and size. [`standard_program`] builds the fixed, unscaled room set used by
//! the deterministic fallback path.

use uuid::Uuid;

use crate::model::{
    Door, DoorKind, ElectricalKind, ElectricalPoint, Furniture, PlumbingKind, PlumbingPoint, Room,
    RoomType, Wall, WallKind, Window, WindowKind,
};

/// Description used for rooms whose declared type was not recognized
pub const GENERIC_DESCRIPTION: &str =
    "Well-designed functional space with luxury amenities and thoughtful architectural details";

/// Ceiling height assumed when none is given
pub const DEFAULT_CEILING_HEIGHT: f64 = 2.8;

/// Default descriptive data for one room type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Archetype {
    pub room_type: RoomType,
    pub description: &'static str,
    pub flooring: &'static str,
}

const ARCHETYPES: [Archetype; 13] = [
    Archetype {
        room_type: RoomType::Bedroom,
        description: "Spacious bedroom with built-in wardrobe, natural lighting, and luxury finishes designed for comfort and privacy",
        flooring: "carpet",
    },
    Archetype {
        room_type: RoomType::Bathroom,
        description: "Modern bathroom with premium fixtures, marble countertops, and contemporary design featuring quality materials",
        flooring: "marble tile",
    },
    Archetype {
        room_type: RoomType::Kitchen,
        description: "Gourmet kitchen with granite countertops, stainless steel appliances, and custom cabinetry in an efficient layout",
        flooring: "ceramic tile",
    },
    Archetype {
        room_type: RoomType::Living,
        description: "Open-plan living area perfect for entertaining with coffered ceilings and built-in entertainment center",
        flooring: "hardwood",
    },
    Archetype {
        room_type: RoomType::Dining,
        description: "Elegant formal dining room with chandelier and built-in buffet for sophisticated entertaining",
        flooring: "hardwood",
    },
    Archetype {
        room_type: RoomType::Veranda,
        description: "Covered outdoor living space with ceiling fans and outdoor kitchen for year-round enjoyment",
        flooring: "composite decking",
    },
    Archetype {
        room_type: RoomType::Study,
        description: "Quiet home office with built-in bookshelves, hardwood floors, and abundant natural light",
        flooring: "hardwood",
    },
    Archetype {
        room_type: RoomType::Storage,
        description: "Utility storage area with custom shelving systems and climate control for optimal organization",
        flooring: "concrete",
    },
    Archetype {
        room_type: RoomType::Laundry,
        description: "Efficient laundry room with premium appliances, folding counter, and utility sink",
        flooring: "vinyl",
    },
    Archetype {
        room_type: RoomType::Pantry,
        description: "Walk-in pantry with custom shelving and organization systems for kitchen storage",
        flooring: "ceramic tile",
    },
    Archetype {
        room_type: RoomType::Closet,
        description: "Walk-in closet with custom organizers, full-length mirrors, and luxury finishes",
        flooring: "carpet",
    },
    Archetype {
        room_type: RoomType::Hallway,
        description: "Wide hallway with hardwood floors, recessed lighting, and architectural details",
        flooring: "hardwood",
    },
    Archetype {
        room_type: RoomType::Foyer,
        description: "Grand entrance foyer with marble floors, chandelier, and coat closet",
        flooring: "marble",
    },
];

/// Look up the archetype for a room type
pub fn archetype(room_type: RoomType) -> &'static Archetype {
    // ARCHETYPES is declared in RoomType::ALL order
    let index = RoomType::ALL
        .iter()
        .position(|t| *t == room_type)
        .unwrap_or(0);
    &ARCHETYPES[index]
}

// ── Fixture helpers ───────────────────────────────────────────────

fn door(x: f64, y: f64, rotation: f64, width: f64, kind: DoorKind) -> Door {
    Door {
        x,
        y,
        rotation,
        width,
        kind,
    }
}

fn window(x: f64, y: f64, width: f64, height: f64, kind: WindowKind) -> Window {
    Window {
        x,
        y,
        width,
        height,
        kind,
    }
}

fn furn(kind: &str, x: f64, y: f64, width: f64, length: f64, rotation: f64) -> Furniture {
    Furniture::new(kind, x, y, width, length, rotation)
}

fn wall(x1: f64, y1: f64, x2: f64, y2: f64, thickness: f64, kind: WallKind) -> Wall {
    Wall {
        x1,
        y1,
        x2,
        y2,
        thickness,
        kind,
    }
}

fn elec(kind: ElectricalKind, x: f64, y: f64) -> ElectricalPoint {
    ElectricalPoint { kind, x, y }
}

fn plumb(kind: PlumbingKind, x: f64, y: f64) -> PlumbingPoint {
    PlumbingPoint { kind, x, y }
}

/// Door given to generated rooms that arrive without a usable door list
pub fn default_door() -> Door {
    door(0.0, 0.0, 0.0, 0.9, DoorKind::Interior)
}

/// Window given to generated rooms that arrive without a usable window list
pub fn default_window() -> Window {
    window(0.0, 0.0, 1.5, 1.2, WindowKind::Standard)
}

/// Four exterior walls around a `width` x `length` room
pub fn default_walls(width: f64, length: f64) -> Vec<Wall> {
    vec![
        wall(0.0, 0.0, width, 0.0, 0.2, WallKind::Exterior),
        wall(width, 0.0, width, length, 0.2, WallKind::Exterior),
        wall(width, length, 0.0, length, 0.2, WallKind::Exterior),
        wall(0.0, length, 0.0, 0.0, 0.2, WallKind::Exterior),
    ]
}

/// Outlets, switches and lights for a room of the given type and size
pub fn default_electrical(room_type: RoomType, width: f64, length: f64) -> Vec<ElectricalPoint> {
    use ElectricalKind::*;

    match room_type {
        RoomType::Bedroom => vec![
            elec(Outlet, 0.3, 0.3),
            elec(Outlet, width - 0.3, 0.3),
            elec(Outlet, width / 2.0, length - 0.3),
            elec(Switch, 0.3, 0.8),
            elec(Light, width / 2.0, length / 2.0),
            elec(CeilingFan, width / 2.0, length / 2.0),
        ],
        RoomType::Kitchen => vec![
            elec(Outlet, 0.5, 0.3),
            elec(Outlet, 1.5, 0.3),
            elec(Outlet, 2.5, 0.3),
            elec(Outlet, 3.5, 0.3),
            elec(Switch, 0.3, 0.8),
            elec(Light, width / 2.0, length / 2.0),
        ],
        RoomType::Living => vec![
            elec(Outlet, 0.3, 0.3),
            elec(Outlet, width - 0.3, 0.3),
            elec(Outlet, 0.3, length / 2.0),
            elec(Outlet, width - 0.3, length / 2.0),
            elec(Switch, 0.3, 0.8),
            elec(Light, width / 2.0, length / 2.0),
            elec(CeilingFan, width / 2.0, length / 2.0),
        ],
        RoomType::Bathroom => vec![
            elec(Outlet, 0.5, 0.3),
            elec(Switch, 0.3, 0.8),
            elec(Light, width / 2.0, length / 2.0),
        ],
        _ => vec![
            elec(Outlet, 0.3, 0.3),
            elec(Switch, 0.3, 0.8),
            elec(Light, width / 2.0, length / 2.0),
        ],
    }
}

/// Water, drain and gas points; only wet rooms get any
pub fn default_plumbing(room_type: RoomType) -> Vec<PlumbingPoint> {
    use PlumbingKind::*;

    match room_type {
        RoomType::Bathroom => vec![
            plumb(Water, 0.5, 0.3),
            plumb(Drain, 0.5, 0.3),
            plumb(Water, 1.5, 0.3),
            plumb(Drain, 1.5, 0.3),
            plumb(Drain, 1.0, 2.0),
        ],
        RoomType::Kitchen => vec![
            plumb(Water, 1.5, 0.3),
            plumb(Drain, 1.5, 0.3),
            plumb(Gas, 0.5, 1.0),
        ],
        RoomType::Laundry => vec![
            plumb(Water, 0.5, 0.3),
            plumb(Water, 1.5, 0.3),
            plumb(Drain, 0.5, 0.3),
            plumb(Drain, 1.5, 0.3),
        ],
        _ => vec![],
    }
}

/// Furniture for a room of the given type and size
pub fn default_furniture(room_type: RoomType, width: f64, length: f64) -> Vec<Furniture> {
    let mut items = Vec::new();

    match room_type {
        RoomType::Bedroom => {
            items.extend([
                furn("king-bed", 0.3, 0.3, 2.0, 2.2, 0.0).with_brand("luxury"),
                furn("nightstand", 2.4, 0.3, 0.5, 0.5, 0.0),
                furn("nightstand", 0.1, 0.3, 0.5, 0.5, 0.0),
                furn("dresser", 0.3, length - 0.8, 1.6, 0.6, 0.0),
                furn("armchair", width - 1.0, length - 1.2, 0.8, 0.9, 0.0),
            ]);
            if width > 3.5 {
                items.push(furn(
                    "wardrobe",
                    width - 0.8,
                    0.3,
                    0.6,
                    2.5_f64.min(length - 0.6),
                    0.0,
                ));
            }
        }
        RoomType::Bathroom => {
            if width > 3.0 && length > 3.0 {
                items.extend([
                    furn("double-vanity", 0.1, 0.1, 1.8, 0.6, 0.0),
                    furn("soaking-tub", width - 1.2, 0.1, 1.1, 1.6, 0.0),
                    furn("walk-in-shower", 0.1, length - 1.2, 1.2, 1.1, 0.0),
                    furn("toilet", 1.4, length - 1.0, 0.7, 0.7, 0.0),
                    furn("linen-cabinet", width - 0.6, length - 1.0, 0.5, 0.9, 0.0),
                ]);
            } else {
                items.extend([
                    furn("vanity", 0.1, 0.1, 1.2, 0.6, 0.0),
                    furn("toilet", width - 0.8, 0.1, 0.7, 0.7, 0.0),
                    furn("tub-shower", 0.1, length - 1.1, 0.8, 1.0, 0.0),
                ]);
            }
        }
        RoomType::Kitchen => {
            items.extend([
                furn("l-counter", 0.1, 0.1, 0.6, 3.5_f64.min(length - 0.2), 0.0),
                furn("l-counter", 0.7, 0.1, 3.0_f64.min(width - 0.8), 0.6, 0.0),
                furn("refrigerator", width - 0.8, 0.7, 0.7, 0.7, 0.0).with_brand("LG"),
                furn("stove", 0.1, 1.0, 0.6, 0.6, 0.0).with_brand("Prestige"),
                furn("dishwasher", 1.8, 0.1, 0.6, 0.6, 0.0).with_brand("Bosch"),
                furn("sink", 1.2, 0.1, 0.6, 0.6, 0.0),
            ]);
            if width > 4.0 && length > 4.0 {
                items.push(furn("island", width / 2.0 - 1.0, length / 2.0, 2.0, 1.0, 0.0));
            }
        }
        RoomType::Living => {
            items.extend([
                furn("sectional-sofa", 0.5, 0.5, 1.0, 3.5_f64.min(length - 1.0), 0.0)
                    .with_brand("luxury"),
                furn(
                    "coffee-table",
                    1.5_f64.max(width / 2.0),
                    1.5_f64.max(length / 2.0),
                    0.6,
                    1.2,
                    0.0,
                ),
                furn(
                    "entertainment-center",
                    width - 0.4,
                    1.0_f64.max(length / 2.0 - 1.0),
                    0.3,
                    2.0,
                    0.0,
                ),
            ]);
            if width > 5.0 && length > 4.0 {
                items.extend([
                    furn("armchair", 0.3, length - 1.5, 0.8, 0.9, 0.0),
                    furn("side-table", 1.2, length - 1.2, 0.4, 0.4, 0.0),
                    furn("bookshelf", 0.1, 0.3, 0.3, 2.5, 0.0),
                ]);
            }
        }
        RoomType::Dining => {
            let table_width = 1.8_f64.min(width - 1.0);
            let table_length = 2.6_f64.min(length - 1.0);
            let table_x = (width - table_width) / 2.0;
            let table_y = (length - table_length) / 2.0;
            items.push(
                furn("dining-table", table_x, table_y, table_width, table_length, 0.0)
                    .with_brand("luxury"),
            );

            let chairs = [
                (table_x - 0.6, table_y + 0.3),
                (table_x - 0.6, table_y + table_length - 0.7),
                (table_x + table_width + 0.2, table_y + 0.3),
                (table_x + table_width + 0.2, table_y + table_length - 0.7),
            ];
            for (x, y) in chairs {
                items.push(furn("dining-chair", x, y, 0.5, 0.5, 0.0));
            }

            if width > 3.5 {
                items.push(furn("buffet", width - 0.6, 0.1, 0.5, 2.0_f64.min(length - 0.2), 0.0));
            }
        }
        RoomType::Study => {
            items.extend([
                furn("executive-desk", 0.1, 0.1, 0.8, 1.6, 0.0).with_brand("luxury"),
                furn("office-chair", 0.3, 1.2, 0.6, 0.6, 0.0),
                furn("bookshelf", width - 0.4, 0.1, 0.3, 2.5_f64.min(length - 0.2), 0.0),
                furn("filing-cabinet", 0.1, length - 0.8, 0.5, 0.6, 0.0),
            ]);
            if width > 3.0 && length > 3.0 {
                items.push(furn("reading-chair", width - 1.2, length - 1.2, 0.8, 0.9, 0.0));
            }
        }
        RoomType::Laundry => {
            items.extend([
                furn("washer", 0.1, 0.1, 0.7, 0.7, 0.0).with_brand("IFB"),
                furn("dryer", 0.8, 0.1, 0.7, 0.7, 0.0).with_brand("IFB"),
                furn("utility-sink", width - 0.8, 0.1, 0.6, 0.6, 0.0),
                furn("folding-counter", 0.1, 0.8, 2.0_f64.min(width - 0.2), 0.6, 0.0),
                furn("storage-cabinet", 0.1, length - 0.7, width - 0.2, 0.6, 0.0),
            ]);
        }
        RoomType::Storage => {
            items.extend([
                furn("shelving-unit", 0.1, 0.1, 0.4, length - 0.2, 0.0),
                furn("shelving-unit", width - 0.5, 0.1, 0.4, length - 0.2, 0.0),
            ]);
            if width > 2.5 {
                items.push(furn("storage-cabinet", 0.6, 0.1, width - 1.2, 0.6, 0.0));
            }
        }
        RoomType::Veranda
        | RoomType::Pantry
        | RoomType::Closet
        | RoomType::Hallway
        | RoomType::Foyer => {}
    }

    items
}

// ── Standard program ──────────────────────────────────────────────

fn bare_room(
    name: &str,
    room_type: RoomType,
    width: f64,
    length: f64,
    x: f64,
    y: f64,
    description: &str,
) -> Room {
    Room {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        room_type,
        width,
        length,
        x,
        y,
        description: description.to_string(),
        doors: vec![],
        windows: vec![],
        furniture: vec![],
        walls: vec![],
        electrical: vec![],
        plumbing: vec![],
        flooring: None,
        ceiling_height: None,
        features: vec![],
    }
}

fn finish(mut room: Room, flooring: &str, ceiling_height: f64, features: &[&str]) -> Room {
    room.flooring = Some(flooring.to_string());
    room.ceiling_height = Some(ceiling_height);
    room.features = features.iter().map(|f| f.to_string()).collect();
    room
}

/// Build the unscaled standard home program for a `width` x `length` footprint.
///
/// Sizes and positions are derived from the target dimensions but are expressed
/// on the reference grid; callers scale them with
/// [`ScaleTransform`](super::transform::ScaleTransform) before use.
pub fn standard_program(width: f64, length: f64) -> Vec<Room> {
    use DoorKind as Dk;
    use ElectricalKind::*;
    use PlumbingKind::*;
    use WindowKind as Wk;

    let living_width = 5.5_f64.min(width * 0.45);
    let living_length = 4.5_f64.min(length * 0.35);
    let master_width = 4.2_f64.min(width * 0.35);
    let master_length = 4.0_f64.min(length * 0.32);
    let bedroom_width = 3.5_f64.min(width * 0.28);
    let bedroom_length = 3.8_f64.min(length * 0.3);
    let foyer_width = (width * 0.8).min(6.0);

    let foyer = Room {
        doors: vec![door(3.0, 2.5, 180.0, 1.2, Dk::Main)],
        windows: vec![window(1.5, 0.0, 1.8, 1.2, Wk::Standard)],
        furniture: vec![
            furn("console-table", 0.3, 0.3, 0.4, 1.2, 0.0),
            furn("mirror", 0.1, 0.5, 0.1, 0.8, 0.0),
            furn("coat-rack", 5.0, 0.3, 0.3, 0.3, 0.0),
        ],
        walls: vec![
            wall(0.0, 0.0, 6.0, 0.0, 0.2, WallKind::Exterior),
            wall(6.0, 0.0, 6.0, 2.5, 0.15, WallKind::Interior),
            wall(6.0, 2.5, 0.0, 2.5, 0.15, WallKind::Interior),
            wall(0.0, 2.5, 0.0, 0.0, 0.2, WallKind::Exterior),
        ],
        electrical: vec![
            elec(Switch, 0.3, 2.2),
            elec(Outlet, 5.5, 0.3),
            elec(Light, 3.0, 1.25),
        ],
        ..bare_room(
            "Front Entrance",
            RoomType::Foyer,
            foyer_width,
            2.5,
            (width - foyer_width) / 2.0,
            0.0,
            "Grand entrance foyer with coat closet and elegant design features",
        )
    };

    let living = Room {
        doors: vec![door(living_width / 2.0, 0.0, 0.0, 1.0, Dk::Interior)],
        windows: vec![
            window(0.0, living_length / 2.0, 2.5, 1.5, Wk::Bay),
            window(living_width, living_length / 2.0, 2.0, 1.2, Wk::Standard),
        ],
        furniture: vec![
            furn("sectional-sofa", 0.5, 0.5, 1.0, 3.2, 0.0),
            furn("coffee-table", 2.0, 2.0, 0.6, 1.2, 0.0),
            furn("tv-unit", living_width - 0.4, 1.5, 0.3, 1.8, 0.0),
            furn("armchair", 0.3, 3.5, 0.8, 0.9, 45.0),
            furn("side-table", 1.2, 3.8, 0.4, 0.4, 0.0),
            furn("bookshelf", 0.1, 0.3, 0.3, 2.0, 0.0),
        ],
        walls: vec![
            wall(0.0, 0.0, living_width, 0.0, 0.15, WallKind::Interior),
            wall(living_width, 0.0, living_width, living_length, 0.2, WallKind::Exterior),
            wall(living_width, living_length, 0.0, living_length, 0.15, WallKind::Interior),
            wall(0.0, living_length, 0.0, 0.0, 0.2, WallKind::Exterior),
        ],
        electrical: vec![
            elec(Outlet, 0.3, 0.3),
            elec(Outlet, living_width - 0.3, 0.3),
            elec(Outlet, 0.3, living_length - 0.3),
            elec(Switch, 0.3, 0.8),
            elec(CeilingFan, living_width / 2.0, living_length / 2.0),
        ],
        ..bare_room(
            "Living Room",
            RoomType::Living,
            living_width,
            living_length,
            0.5,
            3.0,
            "Spacious open-plan living area with modern furnishings, entertainment center, and natural light",
        )
    };

    let dining = Room {
        windows: vec![window(4.0, 1.9, 2.2, 1.5, Wk::French)],
        furniture: vec![
            furn("dining-table", 1.0, 0.9, 1.6, 2.2, 0.0),
            furn("dining-chair", 0.5, 0.5, 0.4, 0.4, 0.0),
            furn("dining-chair", 0.5, 1.5, 0.4, 0.4, 0.0),
            furn("dining-chair", 0.5, 2.5, 0.4, 0.4, 0.0),
            furn("dining-chair", 3.1, 0.5, 0.4, 0.4, 180.0),
            furn("dining-chair", 3.1, 1.5, 0.4, 0.4, 180.0),
            furn("dining-chair", 3.1, 2.5, 0.4, 0.4, 180.0),
            furn("buffet", 3.5, 0.2, 0.4, 1.8, 0.0),
        ],
        electrical: vec![
            elec(Light, 2.0, 1.9),
            elec(Switch, 0.3, 3.5),
            elec(Outlet, 3.7, 1.0),
        ],
        ..bare_room(
            "Dining Room",
            RoomType::Dining,
            4.0_f64.min(width * 0.32),
            3.8_f64.min(length * 0.28),
            6.5_f64.min(width * 0.45),
            3.0,
            "Elegant dining area with chandelier, perfect for family meals and entertaining guests",
        )
    };

    let kitchen = Room {
        windows: vec![window(2.1, 0.0, 1.8, 1.2, Wk::Standard)],
        furniture: vec![
            furn("l-counter", 0.1, 0.1, 0.6, 3.2, 0.0),
            furn("l-counter", 0.7, 0.1, 3.4, 0.6, 0.0),
            furn("island", 1.5, 1.8, 1.2, 0.8, 0.0),
            furn("refrigerator", 3.5, 0.7, 0.6, 0.7, 0.0),
            furn("stove", 0.1, 1.2, 0.6, 0.6, 0.0),
            furn("dishwasher", 1.8, 0.1, 0.6, 0.6, 0.0),
            furn("sink", 1.2, 0.1, 0.6, 0.6, 0.0),
            furn("microwave", 2.4, 0.1, 0.6, 0.4, 0.0),
            furn("pantry-cabinet", 3.5, 1.5, 0.6, 0.8, 0.0),
        ],
        walls: vec![
            wall(0.0, 0.0, 4.2, 0.0, 0.2, WallKind::Exterior),
            wall(4.2, 0.0, 4.2, 3.5, 0.2, WallKind::Exterior),
            wall(4.2, 3.5, 0.0, 3.5, 0.15, WallKind::Interior),
            wall(0.0, 3.5, 0.0, 0.0, 0.15, WallKind::Interior),
        ],
        electrical: vec![
            elec(Outlet, 0.5, 0.3),
            elec(Outlet, 1.5, 0.3),
            elec(Outlet, 2.5, 0.3),
            elec(Outlet, 3.5, 0.3),
            elec(Switch, 0.3, 3.2),
            elec(Light, 2.1, 1.75),
        ],
        plumbing: vec![
            plumb(Water, 1.5, 0.1),
            plumb(Drain, 1.5, 0.1),
            plumb(Gas, 0.4, 1.5),
        ],
        ..bare_room(
            "Kitchen",
            RoomType::Kitchen,
            4.2_f64.min(width * 0.32),
            3.5_f64.min(length * 0.28),
            (width - 4.2).min(width * 0.78),
            3.0,
            "Modern kitchen with granite countertops, stainless steel appliances, and ample storage",
        )
    };

    let master = Room {
        doors: vec![
            door(0.0, master_length / 2.0, 270.0, 0.9, Dk::Interior),
            door(master_width, 0.5, 90.0, 0.8, Dk::Interior),
        ],
        windows: vec![
            window(master_width / 2.0, 0.0, 2.5, 1.5, Wk::Sliding),
            window(master_width, master_length / 2.0, 1.8, 1.2, Wk::Standard),
        ],
        furniture: vec![
            furn("king-bed", 0.5, 0.5, 2.0, 2.2, 0.0),
            furn("nightstand", 2.6, 0.5, 0.5, 0.5, 0.0),
            furn("nightstand", 0.1, 0.5, 0.5, 0.5, 0.0),
            furn("dresser", 0.3, 3.2, 1.6, 0.6, 0.0),
            furn("armchair", 3.2, 2.8, 0.8, 0.9, 0.0),
            furn("vanity", 2.8, 3.2, 0.6, 1.0, 0.0),
        ],
        electrical: vec![
            elec(Outlet, 0.3, 0.8),
            elec(Outlet, 2.9, 0.8),
            elec(Switch, 0.3, 2.0),
            elec(CeilingFan, master_width / 2.0, master_length / 2.0),
        ],
        ..bare_room(
            "Master Bedroom",
            RoomType::Bedroom,
            master_width,
            master_length,
            (width - master_width).min(width * 0.72),
            (length - master_length - 1.0).min(length * 0.55),
            "Luxurious master bedroom with walk-in closet, en-suite bathroom, and private balcony access",
        )
    };

    let closet = Room {
        doors: vec![door(0.0, 0.9, 270.0, 0.8, Dk::Sliding)],
        furniture: vec![
            furn("closet-system", 0.1, 0.1, 0.6, 1.6, 0.0),
            furn("closet-system", 1.5, 0.1, 0.6, 1.6, 0.0),
            furn("dresser-built-in", 0.7, 0.1, 0.8, 0.6, 0.0),
            furn("mirror", 0.7, 1.6, 0.1, 0.8, 0.0),
        ],
        electrical: vec![elec(Light, 1.1, 0.9), elec(Outlet, 1.1, 0.3)],
        ..bare_room(
            "Walk-in Closet",
            RoomType::Closet,
            2.2,
            1.8,
            (width - 2.2).min(width * 0.85),
            (length - 1.8).min(length * 0.75),
            "Spacious walk-in closet with built-in organizers and full-length mirror",
        )
    };

    let bedroom_two = Room {
        doors: vec![door(bedroom_width, bedroom_length / 2.0, 90.0, 0.8, Dk::Interior)],
        windows: vec![
            window(0.0, bedroom_length / 2.0, 1.8, 1.2, Wk::Standard),
            window(bedroom_width / 2.0, 0.0, 1.5, 1.2, Wk::Standard),
        ],
        furniture: vec![
            furn("queen-bed", 0.3, 0.3, 1.8, 2.0, 0.0),
            furn("nightstand", 2.2, 0.3, 0.4, 0.4, 0.0),
            furn("desk", 0.3, 3.0, 0.6, 1.4, 0.0),
            furn("desk-chair", 0.5, 3.5, 0.5, 0.5, 0.0),
            furn("wardrobe", 2.8, 0.3, 0.6, 2.5, 0.0),
        ],
        electrical: vec![
            elec(Outlet, 0.5, 0.5),
            elec(Outlet, 2.5, 0.5),
            elec(Outlet, 0.5, 3.2),
            elec(Switch, 3.2, 1.5),
            elec(Light, bedroom_width / 2.0, bedroom_length / 2.0),
        ],
        ..bare_room(
            "Bedroom 2",
            RoomType::Bedroom,
            bedroom_width,
            bedroom_length,
            0.3,
            (length - bedroom_length).min(length * 0.6),
            "Comfortable secondary bedroom with built-in desk and ample natural light",
        )
    };

    let bedroom_three = Room {
        doors: vec![door(0.0, bedroom_length / 2.0, 270.0, 0.8, Dk::Interior)],
        windows: vec![
            window(bedroom_width / 2.0, bedroom_length, 1.8, 1.2, Wk::Standard),
            window(bedroom_width, bedroom_length / 2.0, 1.5, 1.2, Wk::Standard),
        ],
        furniture: vec![
            furn("queen-bed", 0.3, 0.3, 1.8, 2.0, 0.0),
            furn("nightstand", 2.2, 0.3, 0.4, 0.4, 0.0),
            furn("wardrobe", 2.8, 0.3, 0.6, 2.5, 0.0),
            furn("reading-chair", 0.3, 3.0, 0.7, 0.7, 0.0),
            furn("side-table", 1.1, 3.2, 0.4, 0.4, 0.0),
        ],
        electrical: vec![
            elec(Outlet, 0.5, 0.5),
            elec(Outlet, 2.5, 0.5),
            elec(Switch, 0.3, 1.5),
            elec(Light, bedroom_width / 2.0, bedroom_length / 2.0),
        ],
        ..bare_room(
            "Bedroom 3",
            RoomType::Bedroom,
            bedroom_width,
            bedroom_length,
            4.5_f64.min(width * 0.35),
            (length - bedroom_length).min(length * 0.6),
            "Bright guest bedroom with garden view and built-in storage",
        )
    };

    let master_bath = Room {
        doors: vec![door(0.0, 1.4, 270.0, 0.8, Dk::Interior)],
        windows: vec![window(1.6, 0.0, 1.2, 1.0, Wk::Standard)],
        furniture: vec![
            furn("double-vanity", 0.1, 0.1, 1.8, 0.6, 0.0),
            furn("soaking-tub", 2.0, 0.1, 1.1, 1.6, 0.0),
            furn("walk-in-shower", 0.1, 1.8, 1.2, 0.9, 0.0),
            furn("toilet", 1.4, 1.8, 0.7, 0.7, 0.0),
            furn("linen-cabinet", 2.2, 1.8, 0.5, 0.9, 0.0),
        ],
        electrical: vec![
            elec(Outlet, 0.5, 0.3),
            elec(Outlet, 1.5, 0.3),
            elec(Switch, 0.3, 0.8),
            elec(Light, 1.6, 1.4),
        ],
        plumbing: vec![
            plumb(Water, 0.5, 0.1),
            plumb(Water, 1.5, 0.1),
            plumb(Water, 2.5, 0.8),
            plumb(Water, 0.6, 2.2),
            plumb(Drain, 0.5, 0.1),
            plumb(Drain, 1.5, 0.1),
            plumb(Drain, 2.5, 0.8),
            plumb(Drain, 0.6, 2.2),
            plumb(Drain, 1.7, 2.1),
        ],
        ..bare_room(
            "Master Bathroom",
            RoomType::Bathroom,
            3.2,
            2.8,
            (width - 3.2).min(width * 0.78),
            (length - 2.8).min(length * 0.72),
            "Luxurious master bathroom with soaking tub, separate shower, and double vanity",
        )
    };

    let main_bath = Room {
        doors: vec![door(1.4, 0.0, 0.0, 0.8, Dk::Interior)],
        windows: vec![window(0.0, 1.6, 1.2, 1.0, Wk::Standard)],
        furniture: vec![
            furn("vanity", 0.1, 0.1, 1.2, 0.6, 0.0),
            furn("toilet", 1.4, 0.1, 0.7, 0.7, 0.0),
            furn("tub-shower", 0.1, 2.1, 0.8, 1.0, 0.0),
            furn("linen-cabinet", 2.2, 0.1, 0.5, 0.8, 0.0),
        ],
        electrical: vec![
            elec(Outlet, 0.6, 0.3),
            elec(Switch, 1.6, 0.3),
            elec(Light, 1.4, 1.6),
        ],
        plumbing: vec![
            plumb(Water, 0.6, 0.1),
            plumb(Water, 0.5, 2.6),
            plumb(Drain, 0.6, 0.1),
            plumb(Drain, 0.5, 2.6),
            plumb(Drain, 1.7, 0.4),
        ],
        ..bare_room(
            "Main Bathroom",
            RoomType::Bathroom,
            2.8_f64.min(width * 0.22),
            3.2_f64.min(length * 0.26),
            4.5_f64.min(width * 0.35),
            (length - 7.2).min(length * 0.45),
            "Full bathroom with tub/shower combo and modern fixtures",
        )
    };

    let powder = Room {
        doors: vec![door(0.9, 0.0, 0.0, 0.7, Dk::Interior)],
        furniture: vec![
            furn("pedestal-sink", 0.1, 0.3, 0.6, 0.5, 0.0),
            furn("toilet", 0.1, 1.4, 0.7, 0.7, 0.0),
            furn("mirror", 0.1, 0.1, 0.1, 0.6, 0.0),
        ],
        electrical: vec![
            elec(Outlet, 0.4, 0.5),
            elec(Switch, 1.5, 0.3),
            elec(Light, 0.9, 1.1),
        ],
        plumbing: vec![
            plumb(Water, 0.4, 0.3),
            plumb(Drain, 0.4, 0.3),
            plumb(Drain, 0.45, 1.7),
        ],
        ..bare_room(
            "Powder Room",
            RoomType::Bathroom,
            1.8_f64.min(width * 0.14),
            2.2_f64.min(length * 0.18),
            2.5_f64.min(width * 0.2),
            (length - 2.5).min(length * 0.8),
            "Convenient half bath for guests with modern fixtures",
        )
    };

    let laundry = Room {
        doors: vec![door(0.0, 1.4, 270.0, 0.8, Dk::Interior)],
        windows: vec![window(1.25, 0.0, 1.0, 1.0, Wk::Standard)],
        furniture: vec![
            furn("washer", 0.1, 0.1, 0.7, 0.7, 0.0),
            furn("dryer", 0.8, 0.1, 0.7, 0.7, 0.0),
            furn("utility-sink", 1.6, 0.1, 0.6, 0.6, 0.0),
            furn("storage-cabinet", 0.1, 1.8, 2.2, 0.6, 0.0),
            furn("folding-counter", 0.1, 0.8, 1.5, 0.6, 0.0),
        ],
        electrical: vec![
            elec(Outlet, 0.4, 0.3),
            elec(Outlet, 1.1, 0.3),
            elec(Outlet, 1.9, 0.3),
            elec(Switch, 0.3, 1.6),
            elec(Light, 1.25, 1.4),
        ],
        plumbing: vec![
            plumb(Water, 0.4, 0.1),
            plumb(Water, 1.9, 0.1),
            plumb(Drain, 0.4, 0.1),
            plumb(Drain, 1.9, 0.1),
        ],
        ..bare_room(
            "Laundry Room",
            RoomType::Laundry,
            2.5_f64.min(width * 0.18),
            2.8_f64.min(length * 0.2),
            (width - 2.5).min(width * 0.85),
            (length - 2.8).min(length * 0.78),
            "Efficient laundry room with washer, dryer, and utility sink",
        )
    };

    let storage = Room {
        doors: vec![door(0.0, 1.25, 270.0, 0.8, Dk::Interior)],
        furniture: vec![
            furn("shelving-unit", 0.1, 0.1, 0.4, 2.2, 0.0),
            furn("shelving-unit", 1.7, 0.1, 0.4, 2.2, 0.0),
            furn("storage-cabinet", 0.6, 0.1, 1.0, 0.6, 0.0),
            furn("utility-space", 0.6, 1.8, 1.0, 0.6, 0.0),
        ],
        electrical: vec![
            elec(Outlet, 1.1, 0.3),
            elec(Switch, 0.3, 2.2),
            elec(Light, 1.1, 1.25),
        ],
        ..bare_room(
            "Storage Room",
            RoomType::Storage,
            2.2_f64.min(width * 0.18),
            2.5_f64.min(length * 0.2),
            (width - 2.2).min(width * 0.85),
            (length - 5.5).min(length * 0.55),
            "Utility storage room with built-in shelving and equipment space",
        )
    };

    vec![
        finish(foyer, "marble", 3.0, &["coat closet", "decorative lighting", "marble flooring"]),
        finish(
            living,
            "hardwood",
            3.2,
            &["bay window", "hardwood floors", "ceiling fan", "built-in entertainment center"],
        ),
        finish(
            dining,
            "hardwood",
            3.2,
            &["chandelier", "french doors to patio", "built-in buffet"],
        ),
        finish(
            kitchen,
            "ceramic tile",
            2.8,
            &[
                "granite countertops",
                "stainless steel appliances",
                "kitchen island",
                "pantry storage",
            ],
        ),
        finish(
            master,
            "carpet",
            3.0,
            &["walk-in closet", "en-suite bathroom", "ceiling fan", "balcony access"],
        ),
        finish(
            closet,
            "carpet",
            2.8,
            &["built-in organizers", "full-length mirror", "LED lighting"],
        ),
        finish(
            bedroom_two,
            "laminate",
            2.8,
            &["built-in desk", "large wardrobe", "dual windows"],
        ),
        finish(
            bedroom_three,
            "laminate",
            2.8,
            &["garden view", "built-in storage", "reading nook"],
        ),
        finish(
            master_bath,
            "marble tile",
            2.8,
            &["double vanity", "soaking tub", "walk-in shower", "heated floors"],
        ),
        finish(
            main_bath,
            "ceramic tile",
            2.8,
            &["tub/shower combo", "linen storage", "exhaust fan"],
        ),
        finish(
            powder,
            "ceramic tile",
            2.8,
            &["pedestal sink", "decorative mirror", "exhaust fan"],
        ),
        finish(
            laundry,
            "vinyl",
            2.8,
            &["utility sink", "folding counter", "storage cabinets", "ventilation"],
        ),
        finish(
            storage,
            "concrete",
            2.8,
            &["built-in shelving", "utility connections", "ventilation", "tool storage"],
        ),
    ]
}
