//! SVG generation from floor plans

use crate::layout::Rect;
use crate::model::{FloorPlan, Room};
use crate::stylesheet::Palette;

use super::SvgConfig;

/// Radius of electrical and plumbing markers, in pixels
const POINT_RADIUS: f64 = 4.0;

/// Drawn thickness of a door leaf, in pixels
const DOOR_THICKNESS: f64 = 4.0;

/// Drawn depth of a window, in pixels
const WINDOW_DEPTH: f64 = 6.0;

/// Vertical distance between room label lines, in pixels
const LABEL_LINE_HEIGHT: f64 = 14.0;

/// Horizontal alignment of a text element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    styles: Vec<String>,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            styles: vec![],
            elements: vec![],
            indent: 1,
        }
    }

    /// Add the base CSS for labels
    pub fn add_label_styles(&mut self) {
        let prefix = self.prefix();
        self.styles.push(format!(
            ".{prefix}label {{ font-family: sans-serif; font-size: 11px; }} \
             .{prefix}room-name {{ font-size: 12px; font-weight: 600; }}"
        ));
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    /// Prefix a bare class name
    pub fn class(&self, name: &str) -> String {
        format!("{}{}", self.prefix(), name)
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add a rectangle element
    pub fn add_rect(&mut self, x: f64, y: f64, w: f64, h: f64, classes: &[String], styles: &str) {
        let class_list = classes.join(" ");
        self.elements.push(format!(
            r#"{}<rect class="{}" x="{}" y="{}" width="{}" height="{}"{}/>"#,
            self.indent_str(),
            class_list,
            round(x),
            round(y),
            round(w),
            round(h),
            styles
        ));
    }

    /// Add a circle element
    pub fn add_circle(&mut self, cx: f64, cy: f64, r: f64, classes: &[String], styles: &str) {
        let class_list = classes.join(" ");
        self.elements.push(format!(
            r#"{}<circle class="{}" cx="{}" cy="{}" r="{}"{}/>"#,
            self.indent_str(),
            class_list,
            round(cx),
            round(cy),
            round(r),
            styles
        ));
    }

    /// Add a line element
    pub fn add_line(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        classes: &[String],
        styles: &str,
    ) {
        let class_list = classes.join(" ");
        self.elements.push(format!(
            r#"{}<line class="{}" x1="{}" y1="{}" x2="{}" y2="{}"{}/>"#,
            self.indent_str(),
            class_list,
            round(x1),
            round(y1),
            round(x2),
            round(y2),
            styles
        ));
    }

    /// Add a text label
    pub fn add_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        anchor: TextAnchor,
        classes: &[String],
        styles: &str,
    ) {
        let anchor_str = match anchor {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        };
        let class_list = std::iter::once(self.class("label"))
            .chain(classes.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ");

        self.elements.push(format!(
            r#"{}<text class="{}" x="{}" y="{}" text-anchor="{}"{}>{}</text>"#,
            self.indent_str(),
            class_list,
            round(x),
            round(y),
            anchor_str,
            styles,
            escape_xml(text)
        ));
    }

    /// Add a group element with optional ID and classes
    pub fn start_group(&mut self, id: Option<&str>, classes: &[String]) {
        let id_attr = id
            .map(|i| format!(r#" id="{}""#, escape_xml(i)))
            .unwrap_or_default();
        let class_attr = if classes.is_empty() {
            String::new()
        } else {
            format!(r#" class="{}""#, classes.join(" "))
        };

        self.elements
            .push(format!("{}<g{}{}>", self.indent_str(), id_attr, class_attr));
        self.indent += 1;
    }

    /// Close a group element
    pub fn end_group(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.elements.push(format!("{}</g>", self.indent_str()));
    }

    /// Build the final SVG string around `viewbox` (in pixels)
    pub fn build(self, viewbox: Rect) -> String {
        let padding = self.config.viewbox_padding;
        let vb_x = viewbox.x - padding;
        let vb_y = viewbox.y - padding;
        let vb_w = viewbox.width + 2.0 * padding;
        let vb_h = viewbox.length + 2.0 * padding;

        let nl = self.newline();

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" width="{}" height="{}">"#,
            round(vb_x),
            round(vb_y),
            round(vb_w),
            round(vb_h),
            round(vb_w),
            round(vb_h)
        ));
        svg.push_str(nl);

        if !self.styles.is_empty() {
            svg.push_str("  <style>");
            svg.push_str(nl);
            for style in &self.styles {
                svg.push_str("    ");
                svg.push_str(style);
                svg.push_str(nl);
            }
            svg.push_str("  </style>");
            svg.push_str(nl);
        }

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render a plan to an SVG string
pub fn render_svg(plan: &FloorPlan, config: &SvgConfig, palette: &Palette) -> String {
    let scale = config.pixels_per_meter;
    let mut builder = SvgBuilder::new(config.clone());
    if config.show_labels {
        builder.add_label_styles();
    }

    let outline = Rect::new(0.0, 0.0, plan.width * scale, plan.length * scale);
    let plan_class = builder.class("plan");
    builder.add_rect(
        outline.x,
        outline.y,
        outline.width,
        outline.length,
        &[plan_class],
        &format!(
            r#" fill="{}" stroke="{}" stroke-width="2""#,
            palette.resolve_or_default("background"),
            palette.resolve_or_default("outline")
        ),
    );

    for room in &plan.rooms {
        render_room(room, config, palette, &mut builder);
    }

    builder.build(outline)
}

/// Render one room as a group; fixture coordinates are relative to the room
fn render_room(room: &Room, config: &SvgConfig, palette: &Palette, builder: &mut SvgBuilder) {
    let s = config.pixels_per_meter;
    let (ox, oy) = (room.x * s, room.y * s);

    let group_classes = vec![
        builder.class("room"),
        builder.class(&format!("room-{}", room.room_type)),
    ];
    builder.start_group(Some(&format!("room-{}", room.id)), &group_classes);

    let shape_class = builder.class("room-shape");
    builder.add_rect(
        ox,
        oy,
        room.width * s,
        room.length * s,
        &[shape_class],
        &format!(
            r#" fill="{}" stroke="{}" stroke-width="2""#,
            palette.room_fill(room.room_type),
            palette.room_stroke(room.room_type)
        ),
    );

    if config.show_walls {
        let class = builder.class("wall");
        for wall in &room.walls {
            builder.add_line(
                ox + wall.x1 * s,
                oy + wall.y1 * s,
                ox + wall.x2 * s,
                oy + wall.y2 * s,
                &[class.clone()],
                &format!(
                    r#" stroke="{}" stroke-width="{}" stroke-linecap="square""#,
                    palette.wall(wall.kind),
                    round(wall.thickness * s)
                ),
            );
        }
    }

    if config.show_furniture {
        let class = builder.class("furniture");
        for item in &room.furniture {
            let (x, y, w, h) = (ox + item.x * s, oy + item.y * s, item.width * s, item.length * s);
            let transform = if item.rotation != 0.0 {
                format!(
                    r#" transform="rotate({} {} {})""#,
                    round(item.rotation),
                    round(x),
                    round(y)
                )
            } else {
                String::new()
            };
            builder.add_rect(
                x,
                y,
                w,
                h,
                &[class.clone()],
                &format!(
                    r#" fill="{}" fill-opacity="0.4" stroke="{}"{}"#,
                    palette.resolve_or_default("furniture-fill"),
                    palette.resolve_or_default("furniture-stroke"),
                    transform
                ),
            );
        }
    }

    let door_class = builder.class("door");
    for door in &room.doors {
        let (x1, y1) = (ox + door.x * s, oy + door.y * s);
        let angle = door.rotation.to_radians();
        let length = door.width * s;
        builder.add_line(
            x1,
            y1,
            x1 + length * angle.cos(),
            y1 + length * angle.sin(),
            &[door_class.clone()],
            &format!(
                r#" stroke="{}" stroke-width="{}""#,
                palette.resolve_or_default("door"),
                DOOR_THICKNESS
            ),
        );
    }

    let window_class = builder.class("window");
    for window in &room.windows {
        builder.add_rect(
            ox + window.x * s,
            oy + window.y * s,
            window.width * s,
            WINDOW_DEPTH,
            &[window_class.clone()],
            &format!(
                r#" fill="{}" fill-opacity="0.7" stroke="{}""#,
                palette.resolve_or_default("window-fill"),
                palette.resolve_or_default("window-stroke")
            ),
        );
    }

    if config.show_electrical {
        for point in &room.electrical {
            let classes = [
                builder.class("electrical"),
                builder.class(&format!("electrical-{}", point.kind.as_str())),
            ];
            builder.add_circle(
                ox + point.x * s,
                oy + point.y * s,
                POINT_RADIUS,
                &classes,
                &format!(r#" fill="{}""#, palette.electrical(point.kind)),
            );
        }
    }

    if config.show_plumbing {
        for point in &room.plumbing {
            let classes = [
                builder.class("plumbing"),
                builder.class(&format!("plumbing-{}", point.kind.as_str())),
            ];
            builder.add_circle(
                ox + point.x * s,
                oy + point.y * s,
                POINT_RADIUS,
                &classes,
                &format!(r#" fill="{}""#, palette.plumbing(point.kind)),
            );
        }
    }

    if config.show_labels {
        render_labels(room, ox, oy, palette, builder);
    }

    builder.end_group();
}

fn render_labels(room: &Room, ox: f64, oy: f64, palette: &Palette, builder: &mut SvgBuilder) {
    let color = format!(r#" fill="{}""#, palette.room_text(room.room_type));
    let x = ox + 8.0;
    let mut y = oy + 16.0;

    let name_class = builder.class("room-name");
    builder.add_text(&room.name, x, y, TextAnchor::Start, &[name_class], &color);

    let mut lines = vec![
        format!("{:.1}m × {:.1}m", room.width, room.length),
        format!("{:.1} sq m", room.area()),
    ];
    if let Some(flooring) = &room.flooring {
        lines.push(flooring.clone());
    }
    for line in lines {
        y += LABEL_LINE_HEIGHT;
        builder.add_text(&line, x, y, TextAnchor::Start, &[], &color);
    }
}

/// Round to two decimals so float noise does not leak into the markup
fn round(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
