//! SVG renderer for finished floor plans
//!
//! Rooms are drawn at a fixed pixels-per-meter scale with fixtures placed
//! relative to their room. Colours come from a [`Palette`](crate::stylesheet::Palette).

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::{render_svg, SvgBuilder, TextAnchor};
