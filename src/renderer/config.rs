//! Configuration for SVG rendering

/// Configuration options for SVG output
#[derive(Debug, Clone, PartialEq)]
pub struct SvgConfig {
    /// Pixels per meter of plan geometry
    pub pixels_per_meter: f64,

    /// Padding around the viewBox, in pixels
    pub viewbox_padding: f64,

    /// Whether to include XML declaration and standalone attributes
    pub standalone: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,

    /// Prefix for CSS class names (e.g., "fp-" for "fp-room")
    pub class_prefix: Option<String>,

    /// Room name, dimension, area and flooring labels
    pub show_labels: bool,

    pub show_walls: bool,
    pub show_furniture: bool,
    pub show_electrical: bool,
    pub show_plumbing: bool,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            pixels_per_meter: 50.0,
            viewbox_padding: 20.0,
            standalone: true,
            pretty_print: true,
            class_prefix: Some("fp-".to_string()),
            show_labels: true,
            show_walls: true,
            show_furniture: true,
            show_electrical: false,
            show_plumbing: false,
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the meters-to-pixels scale
    pub fn with_pixels_per_meter(mut self, scale: f64) -> Self {
        self.pixels_per_meter = scale;
        self
    }

    /// Set the viewBox padding
    pub fn with_viewbox_padding(mut self, padding: f64) -> Self {
        self.viewbox_padding = padding;
        self
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Remove the CSS class prefix
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }

    pub fn with_labels(mut self, show: bool) -> Self {
        self.show_labels = show;
        self
    }

    pub fn with_walls(mut self, show: bool) -> Self {
        self.show_walls = show;
        self
    }

    pub fn with_furniture(mut self, show: bool) -> Self {
        self.show_furniture = show;
        self
    }

    pub fn with_electrical(mut self, show: bool) -> Self {
        self.show_electrical = show;
        self
    }

    pub fn with_plumbing(mut self, show: bool) -> Self {
        self.show_plumbing = show;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SvgConfig::default();
        assert_eq!(config.pixels_per_meter, 50.0);
        assert_eq!(config.viewbox_padding, 20.0);
        assert!(config.standalone);
        assert!(config.pretty_print);
        assert_eq!(config.class_prefix, Some("fp-".to_string()));
        assert!(config.show_furniture);
        assert!(!config.show_electrical);
        assert!(!config.show_plumbing);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SvgConfig::new()
            .with_pixels_per_meter(20.0)
            .with_standalone(false)
            .with_pretty_print(false)
            .with_class_prefix("my-")
            .with_furniture(false)
            .with_electrical(true)
            .with_plumbing(true);

        assert_eq!(config.pixels_per_meter, 20.0);
        assert!(!config.standalone);
        assert!(!config.pretty_print);
        assert_eq!(config.class_prefix, Some("my-".to_string()));
        assert!(!config.show_furniture);
        assert!(config.show_electrical);
        assert!(config.show_plumbing);
    }
}
