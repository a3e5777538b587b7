//! Floorplan Engine - deterministic floor-plan layout
//!
//! This library lays out residential floor plans from a footprint and an
//! optional generative proposal, checks them, and renders them to SVG.
//!
//! # Example
//!
//! ```rust
//! use floorplan_engine::{fallback_plan, render, LayoutConfig, PlanRequest};
//!
//! let plan = fallback_plan(&PlanRequest::new(12.0, 15.0), &LayoutConfig::default());
//! assert_eq!(plan.rooms.len(), 13);
//!
//! let svg = render(&plan);
//! assert!(svg.contains("<svg"));
//! ```

pub mod analytics;
pub mod error;
pub mod generative;
pub mod layout;
pub mod model;
pub mod renderer;
pub mod stylesheet;

pub use analytics::{PlanComparison, PortfolioSummary};
pub use error::{DecodeError, SourceError};
pub use generative::{
    generate, CannedResponse, FallbackReason, GenerateConfig, Generated, PlanSource, Provenance,
};
pub use layout::{fallback_plan, LayoutConfig, LintWarning, PlacementOutcome, PlacementReport};
pub use model::{FloorPlan, PlanRequest, Room, RoomType, Style};
pub use renderer::{render_svg, SvgConfig};
pub use stylesheet::Palette;

/// Configuration for rendering a finished plan
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Layout configuration; its margin is the clearance the lint expects
    pub layout: LayoutConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Palette for colour resolution
    pub palette: Palette,
    /// Run lint checks while rendering
    pub lint: bool,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.layout = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the palette for colour resolution
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Enable or disable lint checks
    pub fn with_lint(mut self, lint: bool) -> Self {
        self.lint = lint;
        self
    }
}

/// Render a plan to SVG with default configuration
pub fn render(plan: &FloorPlan) -> String {
    render_with_config(plan, &RenderConfig::default())
}

/// Render a plan to SVG with custom configuration
///
/// # Example
///
/// ```rust
/// use floorplan_engine::{fallback_plan, render_with_config, LayoutConfig, PlanRequest, RenderConfig, SvgConfig};
///
/// let plan = fallback_plan(&PlanRequest::new(10.0, 10.0), &LayoutConfig::default());
/// let config = RenderConfig::new().with_svg(SvgConfig::default().with_pixels_per_meter(20.0));
///
/// let svg = render_with_config(&plan, &config);
/// assert!(svg.contains(r#"viewBox="-20 -20 240 240""#));
/// ```
pub fn render_with_config(plan: &FloorPlan, config: &RenderConfig) -> String {
    render_svg(plan, &config.svg, &config.palette)
}

/// Render a plan and collect lint warnings when `config.lint` is set
pub fn render_with_lint(plan: &FloorPlan, config: &RenderConfig) -> (String, Vec<LintWarning>) {
    let warnings = if config.lint {
        layout::lint::check(plan, config.layout.margin)
    } else {
        vec![]
    };
    (render_with_config(plan, config), warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> FloorPlan {
        fallback_plan(&PlanRequest::new(12.0, 15.0), &LayoutConfig::default())
    }

    #[test]
    fn test_render_fallback_plan() {
        let plan = plan();
        let svg = render(&plan);
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
        for room in &plan.rooms {
            assert!(svg.contains(&format!(r#"id="room-{}""#, room.id)));
        }
    }

    #[test]
    fn test_render_room_names() {
        let svg = render(&plan());
        assert!(svg.contains("Front Entrance"));
        assert!(svg.contains("Kitchen"));
        assert!(svg.contains("fp-room-foyer"));
    }

    #[test]
    fn test_lint_disabled_by_default() {
        let (_, warnings) = render_with_lint(&plan(), &RenderConfig::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_render_config_builder() {
        let config = RenderConfig::new()
            .with_lint(true)
            .with_layout(LayoutConfig::new().with_margin(0.1))
            .with_svg(SvgConfig::new().with_pretty_print(false));
        assert!(config.lint);
        assert_eq!(config.layout.margin, 0.1);
        assert!(!config.svg.pretty_print);
    }
}
