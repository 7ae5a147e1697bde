//! SVG document assembly.
//!
//! Canvas rendering pushes shapes into an [`SvgDocument`], which is then
//! serialized to a string or written to a file. Text lives only in the
//! SVG output path; raster output carries geometry alone.

use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::color::Rgba;
use crate::error::Result;

/// Text anchor position for SVG text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    /// Align text start at position.
    #[default]
    Start,
    /// Center text at position.
    Middle,
    /// Align text end at position.
    End,
}

/// A shape in an SVG document.
#[derive(Debug, Clone)]
#[allow(missing_docs)]
pub enum SvgShape {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Option<Rgba>,
        stroke: Option<Rgba>,
        stroke_width: f64,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: Rgba,
        stroke_width: f64,
        dashed: bool,
    },
    Polyline {
        points: Vec<(f64, f64)>,
        stroke: Rgba,
        stroke_width: f64,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: Option<Rgba>,
        stroke: Option<Rgba>,
    },
    Path {
        d: String,
        fill: Option<Rgba>,
        stroke: Option<Rgba>,
        stroke_width: f64,
    },
    Text {
        x: f64,
        y: f64,
        text: String,
        font_size: f64,
        fill: Rgba,
        anchor: TextAnchor,
        rotate: bool,
    },
}

/// An SVG document under assembly.
#[derive(Debug, Clone)]
pub struct SvgDocument {
    width: u32,
    height: u32,
    background: Option<Rgba>,
    shapes: Vec<SvgShape>,
}

impl SvgDocument {
    /// Create a document with a white background.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: Some(Rgba::WHITE),
            shapes: Vec::new(),
        }
    }

    /// Set the background color (`None` for transparent).
    pub fn set_background(&mut self, color: Option<Rgba>) {
        self.background = color;
    }

    /// Document width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Document height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Number of shapes pushed so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the document has no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Push a raw shape.
    pub fn push(&mut self, shape: SvgShape) {
        self.shapes.push(shape);
    }

    /// Push a rectangle.
    #[allow(clippy::too_many_arguments)]
    pub fn rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Option<Rgba>,
        stroke: Option<Rgba>,
        stroke_width: f64,
    ) {
        self.shapes.push(SvgShape::Rect {
            x,
            y,
            width,
            height,
            fill,
            stroke,
            stroke_width,
        });
    }

    /// Push a line.
    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: Rgba, stroke_width: f64) {
        self.shapes.push(SvgShape::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
            stroke_width,
            dashed: false,
        });
    }

    /// Push a dashed line.
    pub fn dashed_line(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: Rgba,
        stroke_width: f64,
    ) {
        self.shapes.push(SvgShape::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
            stroke_width,
            dashed: true,
        });
    }

    /// Push a polyline.
    pub fn polyline(&mut self, points: Vec<(f64, f64)>, stroke: Rgba, stroke_width: f64) {
        self.shapes.push(SvgShape::Polyline {
            points,
            stroke,
            stroke_width,
        });
    }

    /// Push a circle.
    pub fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: Option<Rgba>, stroke: Option<Rgba>) {
        self.shapes.push(SvgShape::Circle {
            cx,
            cy,
            r,
            fill,
            stroke,
        });
    }

    /// Push a path.
    pub fn path(&mut self, d: String, fill: Option<Rgba>, stroke: Option<Rgba>, stroke_width: f64) {
        self.shapes.push(SvgShape::Path {
            d,
            fill,
            stroke,
            stroke_width,
        });
    }

    /// Push horizontal text.
    pub fn text(
        &mut self,
        x: f64,
        y: f64,
        text: &str,
        font_size: f64,
        fill: Rgba,
        anchor: TextAnchor,
    ) {
        self.shapes.push(SvgShape::Text {
            x,
            y,
            text: text.to_string(),
            font_size,
            fill,
            anchor,
            rotate: false,
        });
    }

    /// Push text rotated 90 degrees counter-clockwise (for y-axis titles).
    pub fn vertical_text(
        &mut self,
        x: f64,
        y: f64,
        text: &str,
        font_size: f64,
        fill: Rgba,
        anchor: TextAnchor,
    ) {
        self.shapes.push(SvgShape::Text {
            x,
            y,
            text: text.to_string(),
            font_size,
            fill,
            anchor,
            rotate: true,
        });
    }

    /// Serialize to an SVG string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut svg = String::with_capacity(4096);
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            self.width, self.height, self.width, self.height
        );
        if let Some(bg) = self.background {
            let _ = writeln!(
                svg,
                r#"  <rect width="100%" height="100%" fill="{}"/>"#,
                css_color(bg)
            );
        }
        for shape in &self.shapes {
            let _ = writeln!(svg, "  {}", shape_to_svg(shape));
        }
        svg.push_str("</svg>\n");
        svg
    }

    /// Write the document to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or writing fails.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(self.render().as_bytes())?;
        Ok(())
    }
}

/// Convert a color to its CSS representation.
fn css_color(color: Rgba) -> String {
    if color.a == 255 {
        format!("rgb({},{},{})", color.r, color.g, color.b)
    } else {
        format!(
            "rgba({},{},{},{:.3})",
            color.r,
            color.g,
            color.b,
            f32::from(color.a) / 255.0
        )
    }
}

fn fill_attr(fill: Option<Rgba>) -> String {
    fill.map_or_else(|| "none".to_string(), css_color)
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn shape_to_svg(shape: &SvgShape) -> String {
    match shape {
        SvgShape::Rect {
            x,
            y,
            width,
            height,
            fill,
            stroke,
            stroke_width,
        } => {
            let stroke_attr = stroke.map_or_else(String::new, |s| {
                format!(r#" stroke="{}" stroke-width="{stroke_width}""#, css_color(s))
            });
            format!(
                r#"<rect x="{x}" y="{y}" width="{width}" height="{height}" fill="{}"{stroke_attr}/>"#,
                fill_attr(*fill)
            )
        }
        SvgShape::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
            stroke_width,
            dashed,
        } => {
            let dash = if *dashed {
                r#" stroke-dasharray="6 4""#
            } else {
                ""
            };
            format!(
                r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{}" stroke-width="{stroke_width}"{dash}/>"#,
                css_color(*stroke)
            )
        }
        SvgShape::Polyline {
            points,
            stroke,
            stroke_width,
        } => {
            let point_list: String = points
                .iter()
                .map(|(x, y)| format!("{x},{y}"))
                .collect::<Vec<_>>()
                .join(" ");
            format!(
                r#"<polyline points="{point_list}" fill="none" stroke="{}" stroke-width="{stroke_width}"/>"#,
                css_color(*stroke)
            )
        }
        SvgShape::Circle {
            cx,
            cy,
            r,
            fill,
            stroke,
        } => {
            let stroke_attr =
                stroke.map_or_else(String::new, |s| format!(r#" stroke="{}""#, css_color(s)));
            format!(
                r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{}"{stroke_attr}/>"#,
                fill_attr(*fill)
            )
        }
        SvgShape::Path {
            d,
            fill,
            stroke,
            stroke_width,
        } => {
            let stroke_attr = stroke.map_or_else(String::new, |s| {
                format!(r#" stroke="{}" stroke-width="{stroke_width}""#, css_color(s))
            });
            format!(r#"<path d="{d}" fill="{}"{stroke_attr}/>"#, fill_attr(*fill))
        }
        SvgShape::Text {
            x,
            y,
            text,
            font_size,
            fill,
            anchor,
            rotate,
        } => {
            let anchor_str = match anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
                TextAnchor::End => "end",
            };
            let transform = if *rotate {
                format!(r#" transform="rotate(-90 {x} {y})""#)
            } else {
                String::new()
            };
            format!(
                r#"<text x="{x}" y="{y}" font-size="{font_size}" fill="{}" text-anchor="{anchor_str}" font-family="sans-serif"{transform}>{}</text>"#,
                css_color(*fill),
                escape_xml(text)
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_frame() {
        let doc = SvgDocument::new(640, 480);
        let svg = doc.render();
        assert!(svg.contains("width=\"640\""));
        assert!(svg.contains("height=\"480\""));
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn test_background_rect() {
        let doc = SvgDocument::new(10, 10);
        assert!(doc.render().contains("fill=\"rgb(255,255,255)\""));

        let mut doc = SvgDocument::new(10, 10);
        doc.set_background(None);
        assert_eq!(doc.render().matches("<rect").count(), 0);
    }

    #[test]
    fn test_rect_shape() {
        let mut doc = SvgDocument::new(100, 100);
        doc.rect(1.0, 2.0, 3.0, 4.0, Some(Rgba::RED), Some(Rgba::BLACK), 2.0);
        let svg = doc.render();
        assert!(svg.contains(r#"<rect x="1" y="2" width="3" height="4""#));
        assert!(svg.contains("stroke-width=\"2\""));
    }

    #[test]
    fn test_hollow_rect_fill_none() {
        let mut doc = SvgDocument::new(100, 100);
        doc.set_background(None);
        doc.rect(0.0, 0.0, 5.0, 5.0, None, Some(Rgba::BLACK), 1.0);
        assert!(doc.render().contains("fill=\"none\""));
    }

    #[test]
    fn test_dashed_line() {
        let mut doc = SvgDocument::new(100, 100);
        doc.dashed_line(0.0, 0.0, 10.0, 10.0, Rgba::GREY, 1.0);
        assert!(doc.render().contains("stroke-dasharray"));
    }

    #[test]
    fn test_polyline_points() {
        let mut doc = SvgDocument::new(100, 100);
        doc.polyline(vec![(0.0, 0.0), (5.0, 5.0)], Rgba::BLUE, 1.0);
        assert!(doc.render().contains(r#"points="0,0 5,5""#));
    }

    #[test]
    fn test_text_escaping() {
        let mut doc = SvgDocument::new(100, 100);
        doc.text(0.0, 0.0, "a < b & c", 12.0, Rgba::BLACK, TextAnchor::Start);
        let svg = doc.render();
        assert!(svg.contains("a &lt; b &amp; c"));
        assert!(!svg.contains("a < b"));
    }

    #[test]
    fn test_vertical_text_rotated() {
        let mut doc = SvgDocument::new(100, 100);
        doc.vertical_text(10.0, 50.0, "y title", 12.0, Rgba::BLACK, TextAnchor::Middle);
        let svg = doc.render();
        assert!(svg.contains("rotate(-90"));
        assert!(svg.contains("text-anchor=\"middle\""));
    }

    #[test]
    fn test_css_alpha() {
        let css = css_color(Rgba::new(255, 0, 0, 128));
        assert!(css.starts_with("rgba"));
        assert!(css.contains("0.502"));
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.svg");
        let mut doc = SvgDocument::new(32, 32);
        doc.circle(16.0, 16.0, 8.0, Some(Rgba::GREEN), None);
        doc.write_to_file(&path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<circle"));
    }

    #[test]
    fn test_len_tracks_shapes() {
        let mut doc = SvgDocument::new(10, 10);
        assert!(doc.is_empty());
        doc.line(0.0, 0.0, 1.0, 1.0, Rgba::BLACK, 1.0);
        assert_eq!(doc.len(), 1);
    }
}
