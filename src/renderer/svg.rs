//! SVG generation from rectangle layouts

use crate::layout::{BoundingBox, DimensionLabel, GuideLine, RectangleLayout};
use crate::stylesheet::Stylesheet;

use super::SvgConfig;

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

    /// Add CSS custom properties from a stylesheet
    pub fn add_stylesheet(&mut self, stylesheet: &Stylesheet) {
        // Sorted so output is stable across runs
        let mut tokens: Vec<_> = stylesheet.colors.iter().collect();
        tokens.sort();

        let mut css = String::from(":root {\n");
        for (token, value) in tokens {
            css.push_str(&format!("    --{}: {};\n", escape_xml(token), escape_xml(value)));
        }
        css.push_str("  }\n");
        if stylesheet.colors.contains_key("font-family") {
            css.push_str(&format!(
                "  .{}label {{ font-family: var(--font-family); }}",
                self.prefix()
            ));
        }
        self.styles.push(css);
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
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
    pub fn add_rect(&mut self, bounds: &BoundingBox, class: &str, styles: &str) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r#"{}<rect class="{}{}" x="{}" y="{}" width="{}" height="{}"{}/>"#,
            self.indent_str(),
            prefix,
            class,
            bounds.x,
            bounds.y,
            bounds.width,
            bounds.height,
            styles
        ));
    }

    /// Add a dashed guide line
    pub fn add_guide(&mut self, guide: &GuideLine, class: &str, styles: &str) {
        let prefix = self.prefix();
        let (on, off) = guide.dash;
        self.elements.push(format!(
            r#"{}<line class="{}guide {}{}" x1="{}" y1="{}" x2="{}" y2="{}" stroke-dasharray="{},{}"{}/>"#,
            self.indent_str(),
            prefix,
            prefix,
            class,
            guide.start.x,
            guide.start.y,
            guide.end.x,
            guide.end.y,
            on,
            off,
            styles
        ));
    }

    /// Add a dimension label centered on its position, rotated around it when needed
    pub fn add_label(&mut self, label: &DimensionLabel, class: &str, styles: &str) {
        let prefix = self.prefix();
        let transform = if label.rotation != 0.0 {
            format!(
                r#" transform="rotate({} {} {})""#,
                label.rotation, label.position.x, label.position.y
            )
        } else {
            String::new()
        };

        self.elements.push(format!(
            r#"{}<text class="{}label {}{}" x="{}" y="{}" text-anchor="middle"{}{}>{}</text>"#,
            self.indent_str(),
            prefix,
            prefix,
            class,
            label.position.x,
            label.position.y,
            transform,
            styles,
            escape_xml(&label.text)
        ));
    }

    /// Build the final SVG string sized to the canvas
    pub fn build(self, canvas: BoundingBox) -> String {
        let nl = self.newline();

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="{} {} {} {}">"#,
            canvas.width, canvas.height, canvas.x, canvas.y, canvas.width, canvas.height
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

        for element in &self.elements {
            svg.push_str(element);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg.push_str(nl);

        svg
    }
}

/// Render a RectangleLayout to an SVG string with the default palette
pub fn render_svg(layout: &RectangleLayout, config: &SvgConfig) -> String {
    render_svg_with_stylesheet(layout, config, &Stylesheet::default())
}

/// Render a RectangleLayout to an SVG string with a custom stylesheet
///
/// Draw order: background, shape, labels, guides.
pub fn render_svg_with_stylesheet(
    layout: &RectangleLayout,
    config: &SvgConfig,
    stylesheet: &Stylesheet,
) -> String {
    let mut builder = SvgBuilder::new(config.clone());
    builder.add_stylesheet(stylesheet);

    let color = |token: &str| stylesheet.resolve_or_default(token);

    if config.background {
        let fill = format_styles(Some(&color("background")), None, None);
        builder.add_rect(&layout.canvas, "background", &fill);
    }

    let shape_styles = format_styles(
        Some(&color("shape-fill")),
        Some(&color("shape-stroke")),
        Some(config.shape_stroke_width),
    );
    builder.add_rect(&layout.shape, "shape", &shape_styles);

    let label_styles = format!(
        r#"{} font-size="{}""#,
        format_styles(Some(&color("label")), None, None),
        config.font_size
    );
    builder.add_label(&layout.length_label, "length-label", &label_styles);
    builder.add_label(&layout.width_label, "width-label", &label_styles);

    let guide_styles = format_styles(
        None,
        Some(&color("guide")),
        Some(config.guide_stroke_width),
    );
    builder.add_guide(&layout.length_guide, "length-guide", &guide_styles);
    builder.add_guide(&layout.width_guide, "width-guide", &guide_styles);

    builder.build(layout.canvas)
}

/// Format presentation attributes
fn format_styles(fill: Option<&String>, stroke: Option<&String>, stroke_width: Option<f64>) -> String {
    let mut parts = vec![];
    if let Some(fill) = fill {
        parts.push(format!(r#" fill="{}""#, escape_xml(fill)));
    }
    if let Some(stroke) = stroke {
        parts.push(format!(r#" stroke="{}""#, escape_xml(stroke)));
    }
    if let Some(sw) = stroke_width {
        parts.push(format!(r#" stroke-width="{}""#, sw));
    }
    parts.join("")
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
