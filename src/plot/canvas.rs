//! Canvas definitions and rendering.
//!
//! A canvas composes pads into a raster [`Surface`] or an annotated
//! [`SvgDocument`]. Raster output carries geometry only; titles, tick
//! labels, and legend text appear in the SVG output.

use std::path::Path;

use tracing::warn;

use crate::binning::Axis;
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::graph::GraphSpec;
use crate::hist::{Hist1D, Hist2D};
use crate::output::{PngWriter, SvgDocument, TextAnchor};
use crate::plot::pad::{GraphDrawMode, HistDrawMode, Pad, PadItem};
use crate::plot::{Legend, TextBox, Vertices};
use crate::render::{draw_line, draw_marker, draw_rect_outline, fill_styled_rect};
use crate::scale::{AxisMapper, AxisScale};
use crate::style::{FillPattern, LineStyle, PlotStyle};
use crate::surface::Surface;

const TICK_COUNT: usize = 6;
const TICK_LEN: i32 = 4;

/// A canvas definition: name, title, pixel dimensions, and pads.
#[derive(Debug, Clone)]
pub struct Canvas {
    name: String,
    title: String,
    width: u32,
    height: u32,
    pads: Vec<Pad>,
    pad_labels: Vec<String>,
}

impl Canvas {
    /// Create an empty canvas.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn new(name: &str, width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self {
            name: name.to_string(),
            title: String::new(),
            width,
            height,
            pads: Vec::new(),
            pad_labels: Vec::new(),
        })
    }

    /// Create a canvas with a single pad covering the full area.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn single(name: &str, width: u32, height: u32) -> Result<Self> {
        let mut canvas = Self::new(name, width, height)?;
        let pad_name = format!("{name}_pad");
        canvas.add_pad(Pad::new(&pad_name, Vertices::full()));
        Ok(canvas)
    }

    /// Set the canvas title, shown centered at the top in SVG output.
    #[must_use]
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Canvas name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canvas title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Canvas width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Append a pad.
    pub fn add_pad(&mut self, pad: Pad) {
        self.pads.push(pad);
    }

    /// The pads.
    #[must_use]
    pub fn pads(&self) -> &[Pad] {
        &self.pads
    }

    /// Mutable access to a pad by position.
    pub fn pad_mut(&mut self, index: usize) -> Option<&mut Pad> {
        self.pads.get_mut(index)
    }

    /// Assign labels to pads by position.
    ///
    /// A list that does not match the pad count is kept anyway;
    /// unlabeled pads fall back to their position as a label.
    pub fn set_pad_labels(&mut self, labels: Vec<String>) {
        if labels.len() != self.pads.len() {
            warn!(
                labels = labels.len(),
                pads = self.pads.len(),
                "pad label list does not match the number of pads"
            );
        }
        self.pad_labels = labels;
    }

    /// Label of the pad at `index`.
    #[must_use]
    pub fn pad_label(&self, index: usize) -> String {
        self.pad_labels
            .get(index)
            .cloned()
            .unwrap_or_else(|| index.to_string())
    }

    /// Mutable access to a pad by label.
    pub fn pad_by_label(&mut self, label: &str) -> Option<&mut Pad> {
        let index = (0..self.pads.len()).find(|&i| self.pad_label(i) == label)?;
        self.pads.get_mut(index)
    }

    /// Render all pads into a raster surface.
    ///
    /// # Errors
    ///
    /// Returns an error if any pad has unusable geometry or a log axis
    /// over a non-positive range.
    pub fn render(&self) -> Result<Surface> {
        let mut surface = Surface::new(self.width, self.height)?;
        for pad in &self.pads {
            let placement = PadPlacement::from_pad(pad, self.width, self.height);
            let pad_surface = render_pad_raster(pad, placement.width, placement.height)?;
            surface.blit(&pad_surface, placement.origin_x, placement.origin_y);
        }
        Ok(surface)
    }

    /// Render all pads into an SVG document.
    ///
    /// # Errors
    ///
    /// Returns an error if any pad has unusable geometry or a log axis
    /// over a non-positive range.
    pub fn render_svg(&self) -> Result<SvgDocument> {
        let mut doc = SvgDocument::new(self.width, self.height);
        for pad in &self.pads {
            let placement = PadPlacement::from_pad(pad, self.width, self.height);
            render_pad_svg(&mut doc, pad, &placement)?;
        }
        if !self.title.is_empty() {
            let size = f64::from(self.height) * 0.045;
            doc.text(
                f64::from(self.width) / 2.0,
                size * 1.2,
                &self.title,
                size,
                Rgba::BLACK,
                TextAnchor::Middle,
            );
        }
        Ok(doc)
    }

    /// Render and write a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or file writing fails.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        PngWriter::write_to_file(&self.render()?, path)
    }

    /// Render and write an SVG file.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or file writing fails.
    pub fn save_svg<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.render_svg()?.write_to_file(path)
    }
}

/// Pixel placement of a pad inside its canvas.
struct PadPlacement {
    origin_x: u32,
    origin_y: u32,
    width: u32,
    height: u32,
}

impl PadPlacement {
    fn from_pad(pad: &Pad, canvas_w: u32, canvas_h: u32) -> Self {
        let v = pad.vertices();
        let origin_x = (f64::from(v.x1) * f64::from(canvas_w)) as u32;
        // normalized y grows upward, pixel y downward
        let origin_y = (f64::from(1.0 - v.y2) * f64::from(canvas_h)) as u32;
        let width = ((f64::from(v.width()) * f64::from(canvas_w)) as u32).max(1);
        let height = ((f64::from(v.height()) * f64::from(canvas_h)) as u32).max(1);
        Self {
            origin_x,
            origin_y,
            width,
            height,
        }
    }
}

/// Frame geometry and axis mappers of a pad, in pad-local pixels.
struct Frame {
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    x_mapper: AxisMapper,
    y_mapper: AxisMapper,
}

impl Frame {
    fn build(pad: &Pad, pad_w: u32, pad_h: u32) -> Result<Self> {
        let m = pad.margins();
        let w = f64::from(pad_w);
        let h = f64::from(pad_h);
        let x0 = f64::from(m.left) * w;
        let x1 = (1.0 - f64::from(m.right)) * w;
        let y0 = f64::from(m.top) * h;
        let y1 = (1.0 - f64::from(m.bottom)) * h;
        if x1 - x0 < 2.0 || y1 - y0 < 2.0 {
            return Err(Error::InvalidGeometry(format!(
                "margins leave no frame area in pad '{}'",
                pad.name()
            )));
        }

        let opts = pad.options();
        let ((dx0, dx1), (dy0, dy1)) = pad_domain(pad);
        let x_domain = scale_domain((dx0, dx1), opts.log_x)?;
        let y_domain = scale_domain((dy0, dy1), opts.log_y)?;
        let x_scale = if opts.log_x {
            AxisScale::Log
        } else {
            AxisScale::Linear
        };
        let y_scale = if opts.log_y {
            AxisScale::Log
        } else {
            AxisScale::Linear
        };

        Ok(Self {
            x0,
            y0,
            x1,
            y1,
            x_mapper: AxisMapper::with_scale(x_scale, x_domain, (x0, x1))?,
            y_mapper: AxisMapper::with_scale(y_scale, y_domain, (y1, y0))?,
        })
    }
}

/// Union of the data ranges of every drawable in a pad.
///
/// Histogram y ranges start at zero and get five percent headroom;
/// pads with no data span the unit square.
fn pad_domain(pad: &Pad) -> ((f64, f64), (f64, f64)) {
    let mut x: Option<(f64, f64)> = None;
    let mut y: Option<(f64, f64)> = None;

    let mut merge = |slot: &mut Option<(f64, f64)>, lo: f64, hi: f64| {
        *slot = Some(match slot {
            Some((cur_lo, cur_hi)) => (cur_lo.min(lo), cur_hi.max(hi)),
            None => (lo, hi),
        });
    };

    for item in pad.items() {
        match item {
            PadItem::Hist1D { hist, .. } => {
                merge(&mut x, hist.binning().start(), hist.binning().stop());
                merge(&mut y, 0.0, hist.max_content() * 1.05);
            }
            PadItem::Hist2D { hist, .. } => {
                merge(&mut x, hist.x_binning().start(), hist.x_binning().stop());
                merge(&mut y, hist.y_binning().start(), hist.y_binning().stop());
            }
            PadItem::Graph { graph, .. } => {
                if let Some(((gx0, gx1), (gy0, gy1))) = graph.range() {
                    merge(&mut x, gx0, gx1);
                    merge(&mut y, gy0, gy1);
                }
            }
            PadItem::Legend(_) | PadItem::Text(_) => {}
        }
    }

    (widen(x.unwrap_or((0.0, 1.0))), widen(y.unwrap_or((0.0, 1.0))))
}

/// Widen a degenerate interval so mappers stay valid.
fn widen((lo, hi): (f64, f64)) -> (f64, f64) {
    if (hi - lo).abs() < f64::EPSILON {
        let pad = if lo.abs() < f64::EPSILON {
            0.5
        } else {
            lo.abs() * 0.1
        };
        (lo - pad, hi + pad)
    } else {
        (lo, hi)
    }
}

/// Adjust a domain for a log axis.
///
/// A non-positive upper bound is an error; a non-positive lower bound is
/// pulled up to three decades below the upper bound.
fn scale_domain((lo, hi): (f64, f64), log: bool) -> Result<(f64, f64)> {
    if !log {
        return Ok((lo, hi));
    }
    if hi <= 0.0 {
        return Err(Error::LogDomain { start: lo, stop: hi });
    }
    if lo <= 0.0 {
        Ok((hi * 1e-3, hi))
    } else {
        Ok((lo, hi))
    }
}

/// Format a tick value for display.
fn format_value(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.abs() >= 1e4 || value.abs() < 1e-3 {
        return format!("{value:.1e}");
    }
    let s = format!("{value:.3}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Pixel box of a normalized sub-region of a pad.
fn pixel_box(vertices: Vertices, pad_w: u32, pad_h: u32) -> (f64, f64, f64, f64) {
    let w = f64::from(pad_w);
    let h = f64::from(pad_h);
    let bx0 = f64::from(vertices.x1) * w;
    let bx1 = f64::from(vertices.x2) * w;
    let by0 = (1.0 - f64::from(vertices.y2)) * h;
    let by1 = (1.0 - f64::from(vertices.y1)) * h;
    (bx0, by0, bx1, by1)
}

// ============================================================================
// Raster rendering
// ============================================================================

fn render_pad_raster(pad: &Pad, pad_w: u32, pad_h: u32) -> Result<Surface> {
    let mut surface = Surface::new(pad_w, pad_h)?;
    let frame = Frame::build(pad, pad_w, pad_h)?;
    let opts = pad.options();

    let grid_style = LineStyle {
        color: Rgba::GREY,
        pattern: crate::style::LinePattern::Dotted,
        width: 1,
    };
    if opts.grid_x {
        for tick in frame.x_mapper.ticks(TICK_COUNT) {
            let px = frame.x_mapper.map(tick) as i32;
            draw_line(
                &mut surface,
                px,
                frame.y0 as i32,
                px,
                frame.y1 as i32,
                &grid_style,
            );
        }
    }
    if opts.grid_y {
        for tick in frame.y_mapper.ticks(TICK_COUNT) {
            let py = frame.y_mapper.map(tick) as i32;
            draw_line(
                &mut surface,
                frame.x0 as i32,
                py,
                frame.x1 as i32,
                py,
                &grid_style,
            );
        }
    }

    for item in pad.items() {
        match item {
            PadItem::Hist1D { hist, style, mode } => {
                raster_hist1d(&mut surface, &frame, hist, style, *mode);
            }
            PadItem::Hist2D { hist, style } => {
                raster_hist2d(&mut surface, &frame, hist, style);
            }
            PadItem::Graph { graph, style, mode } => {
                raster_graph(&mut surface, &frame, graph, style, *mode);
            }
            PadItem::Legend(legend) => {
                raster_legend(&mut surface, legend, pad_w, pad_h);
            }
            PadItem::Text(text_box) => {
                raster_textbox(&mut surface, text_box, pad_w, pad_h);
            }
        }
    }

    let frame_style = LineStyle::default();
    if opts.frame {
        draw_rect_outline(
            &mut surface,
            frame.x0 as i32,
            frame.y0 as i32,
            (frame.x1 - frame.x0) as u32,
            (frame.y1 - frame.y0) as u32,
            &frame_style,
        );
    }
    if opts.ticks {
        for tick in frame.x_mapper.ticks(TICK_COUNT) {
            let px = frame.x_mapper.map(tick) as i32;
            draw_line(
                &mut surface,
                px,
                frame.y1 as i32,
                px,
                frame.y1 as i32 - TICK_LEN,
                &frame_style,
            );
        }
        for tick in frame.y_mapper.ticks(TICK_COUNT) {
            let py = frame.y_mapper.map(tick) as i32;
            draw_line(
                &mut surface,
                frame.x0 as i32,
                py,
                frame.x0 as i32 + TICK_LEN,
                py,
                &frame_style,
            );
        }
    }

    Ok(surface)
}

fn raster_hist1d(
    surface: &mut Surface,
    frame: &Frame,
    hist: &Hist1D,
    style: &PlotStyle,
    mode: HistDrawMode,
) {
    let edges = hist.binning().edges();
    let baseline = frame.y1 as i32;

    match mode {
        HistDrawMode::Bars => {
            for bin in 0..hist.num_bins() {
                let content = hist.bin_content(bin).unwrap_or(0.0);
                if content <= 0.0 {
                    continue;
                }
                let px0 = frame.x_mapper.map(edges[bin]) as i32;
                let px1 = frame.x_mapper.map(edges[bin + 1]) as i32;
                let py = frame.y_mapper.map(content) as i32;
                let bar_w = (px1 - px0).max(1) as u32;
                let bar_h = (baseline - py).max(0) as u32;
                fill_styled_rect(surface, px0, py, bar_w, bar_h, &style.fill);
                draw_rect_outline(surface, px0, py, bar_w, bar_h, &style.line);
            }
        }
        HistDrawMode::Steps => {
            let mut prev_y: Option<i32> = None;
            for bin in 0..hist.num_bins() {
                let content = hist.bin_content(bin).unwrap_or(0.0);
                let px0 = frame.x_mapper.map(edges[bin]) as i32;
                let px1 = frame.x_mapper.map(edges[bin + 1]) as i32;
                let py = frame.y_mapper.map(content) as i32;
                if let Some(prev) = prev_y {
                    draw_line(surface, px0, prev, px0, py, &style.line);
                }
                draw_line(surface, px0, py, px1, py, &style.line);
                prev_y = Some(py);
            }
        }
        HistDrawMode::Points => {
            let centers = hist.binning().centers();
            for bin in 0..hist.num_bins() {
                let content = hist.bin_content(bin).unwrap_or(0.0);
                let error = hist.bin_error(bin).unwrap_or(0.0);
                let px = frame.x_mapper.map(centers[bin]) as i32;
                let py = frame.y_mapper.map(content) as i32;
                if error > 0.0 {
                    let py_lo = frame.y_mapper.map(content - error) as i32;
                    let py_hi = frame.y_mapper.map(content + error) as i32;
                    draw_line(surface, px, py_lo, px, py_hi, &style.line);
                }
                draw_marker(surface, px, py, &style.marker);
            }
        }
    }
}

fn raster_hist2d(surface: &mut Surface, frame: &Frame, hist: &Hist2D, style: &PlotStyle) {
    let max = hist.max_content();
    if max <= 0.0 {
        return;
    }
    let x_edges = hist.x_binning().edges();
    let y_edges = hist.y_binning().edges();
    let fill_color = if style.fill.pattern == FillPattern::Hollow {
        Rgba::BLUE
    } else {
        style.fill.color
    };

    for ix in 0..hist.x_binning().num() as usize {
        for iy in 0..hist.y_binning().num() as usize {
            let content = hist.bin_content(ix, iy).unwrap_or(0.0);
            if content <= 0.0 {
                continue;
            }
            let t = (content / max) as f32;
            let color = Rgba::WHITE.lerp(fill_color, t);
            let px0 = frame.x_mapper.map(x_edges[ix]) as i32;
            let px1 = frame.x_mapper.map(x_edges[ix + 1]) as i32;
            let py0 = frame.y_mapper.map(y_edges[iy + 1]) as i32;
            let py1 = frame.y_mapper.map(y_edges[iy]) as i32;
            surface.fill_rect(
                px0,
                py0,
                (px1 - px0).max(1) as u32,
                (py1 - py0).max(1) as u32,
                color,
            );
        }
    }
}

fn raster_graph(
    surface: &mut Surface,
    frame: &Frame,
    graph: &GraphSpec,
    style: &PlotStyle,
    mode: GraphDrawMode,
) {
    let connect = matches!(mode, GraphDrawMode::Line | GraphDrawMode::PointsAndLine);
    let markers = matches!(mode, GraphDrawMode::Points | GraphDrawMode::PointsAndLine);

    if connect {
        let mut prev: Option<(i32, i32)> = None;
        for point in graph.points() {
            let px = frame.x_mapper.map(point.x) as i32;
            let py = frame.y_mapper.map(point.y) as i32;
            if let Some((qx, qy)) = prev {
                draw_line(surface, qx, qy, px, py, &style.line);
            }
            prev = Some((px, py));
        }
    }

    if markers {
        for point in graph.points() {
            let px = frame.x_mapper.map(point.x) as i32;
            let py = frame.y_mapper.map(point.y) as i32;
            if point.ex() > 0.0 {
                let px_lo = frame.x_mapper.map(point.x - point.ex_lo) as i32;
                let px_hi = frame.x_mapper.map(point.x + point.ex_hi) as i32;
                draw_line(surface, px_lo, py, px_hi, py, &style.line);
            }
            if point.ey() > 0.0 {
                let py_lo = frame.y_mapper.map(point.y - point.ey_lo) as i32;
                let py_hi = frame.y_mapper.map(point.y + point.ey_hi) as i32;
                draw_line(surface, px, py_lo, px, py_hi, &style.line);
            }
            draw_marker(surface, px, py, &style.marker);
        }
    }
}

fn raster_legend(surface: &mut Surface, legend: &Legend, pad_w: u32, pad_h: u32) {
    let (bx0, by0, bx1, by1) = pixel_box(legend.vertices(), pad_w, pad_h);
    surface.fill_rect(
        bx0 as i32,
        by0 as i32,
        (bx1 - bx0) as u32,
        (by1 - by0) as u32,
        Rgba::WHITE,
    );
    draw_rect_outline(
        surface,
        bx0 as i32,
        by0 as i32,
        (bx1 - bx0) as u32,
        (by1 - by0) as u32,
        &LineStyle::default(),
    );

    let row_h = f64::from(legend.text().spacing) * f64::from(pad_h);
    let swatch_w = (bx1 - bx0) * 0.25;
    let header_rows = usize::from(!legend.header().is_empty());
    for (i, entry) in legend.entries().iter().enumerate() {
        let row_top = by0 + (i + header_rows) as f64 * row_h;
        let row_mid = row_top + row_h / 2.0;
        if row_top + row_h > by1 {
            break;
        }
        if entry.swatch.fill {
            fill_styled_rect(
                surface,
                (bx0 + 2.0) as i32,
                (row_top + 2.0) as i32,
                (swatch_w - 4.0).max(1.0) as u32,
                (row_h - 4.0).max(1.0) as u32,
                &entry.style.fill,
            );
        }
        if entry.swatch.line {
            draw_line(
                surface,
                (bx0 + 2.0) as i32,
                row_mid as i32,
                (bx0 + swatch_w - 2.0) as i32,
                row_mid as i32,
                &entry.style.line,
            );
        }
        if entry.swatch.marker {
            draw_marker(
                surface,
                (bx0 + swatch_w / 2.0) as i32,
                row_mid as i32,
                &entry.style.marker,
            );
        }
    }
}

fn raster_textbox(surface: &mut Surface, text_box: &TextBox, pad_w: u32, pad_h: u32) {
    if !text_box.border() {
        return;
    }
    let (bx0, by0, bx1, by1) = pixel_box(text_box.vertices(), pad_w, pad_h);
    draw_rect_outline(
        surface,
        bx0 as i32,
        by0 as i32,
        (bx1 - bx0) as u32,
        (by1 - by0) as u32,
        &LineStyle::default(),
    );
}

// ============================================================================
// SVG rendering
// ============================================================================

fn render_pad_svg(doc: &mut SvgDocument, pad: &Pad, placement: &PadPlacement) -> Result<()> {
    let frame = Frame::build(pad, placement.width, placement.height)?;
    let opts = pad.options();
    let ox = f64::from(placement.origin_x);
    let oy = f64::from(placement.origin_y);
    let pad_h = f64::from(placement.height);

    if opts.grid_x {
        for tick in frame.x_mapper.ticks(TICK_COUNT) {
            let px = ox + frame.x_mapper.map(tick);
            doc.dashed_line(px, oy + frame.y0, px, oy + frame.y1, Rgba::GREY, 0.5);
        }
    }
    if opts.grid_y {
        for tick in frame.y_mapper.ticks(TICK_COUNT) {
            let py = oy + frame.y_mapper.map(tick);
            doc.dashed_line(ox + frame.x0, py, ox + frame.x1, py, Rgba::GREY, 0.5);
        }
    }

    let mut frame_style: Option<&PlotStyle> = None;
    let mut axis_titles: (String, String) = (String::new(), String::new());
    for item in pad.items() {
        match item {
            PadItem::Hist1D { hist, style, mode } => {
                svg_hist1d(doc, &frame, ox, oy, hist, style, *mode);
                if frame_style.is_none() {
                    frame_style = Some(style);
                    axis_titles = (
                        hist.axis_title(Axis::X).to_string(),
                        hist.axis_title(Axis::Y).to_string(),
                    );
                }
            }
            PadItem::Hist2D { hist, style } => {
                svg_hist2d(doc, &frame, ox, oy, hist, style);
                if frame_style.is_none() {
                    frame_style = Some(style);
                    axis_titles = (
                        hist.axis_title(Axis::X).to_string(),
                        hist.axis_title(Axis::Y).to_string(),
                    );
                }
            }
            PadItem::Graph { graph, style, mode } => {
                svg_graph(doc, &frame, ox, oy, graph, style, *mode);
                if frame_style.is_none() {
                    frame_style = Some(style);
                }
            }
            PadItem::Legend(legend) => {
                svg_legend(doc, legend, placement);
            }
            PadItem::Text(text_box) => {
                svg_textbox(doc, text_box, placement);
            }
        }
    }

    if opts.frame {
        doc.rect(
            ox + frame.x0,
            oy + frame.y0,
            frame.x1 - frame.x0,
            frame.y1 - frame.y0,
            None,
            Some(Rgba::BLACK),
            1.0,
        );
    }

    let style = frame_style.cloned().unwrap_or_default();
    let x_label = style.label(Axis::X);
    let y_label = style.label(Axis::Y);
    let label_px = f64::from(x_label.size) * pad_h;
    let y_label_px = f64::from(y_label.size) * pad_h;

    if opts.ticks {
        for tick in frame.x_mapper.ticks(TICK_COUNT) {
            let px = ox + frame.x_mapper.map(tick);
            doc.line(px, oy + frame.y1, px, oy + frame.y1 - f64::from(TICK_LEN), Rgba::BLACK, 1.0);
            doc.text(
                px,
                oy + frame.y1 + label_px * 1.1,
                &format_value(tick),
                label_px,
                x_label.color,
                TextAnchor::Middle,
            );
        }
        for tick in frame.y_mapper.ticks(TICK_COUNT) {
            let py = oy + frame.y_mapper.map(tick);
            doc.line(ox + frame.x0, py, ox + frame.x0 + f64::from(TICK_LEN), py, Rgba::BLACK, 1.0);
            doc.text(
                ox + frame.x0 - 4.0,
                py + y_label_px * 0.35,
                &format_value(tick),
                y_label_px,
                y_label.color,
                TextAnchor::End,
            );
        }
    }

    let (x_title, y_title) = axis_titles;
    if !x_title.is_empty() {
        let title = style.title(Axis::X);
        let title_px = f64::from(title.size) * pad_h;
        let (anchor, tx) = if title.center {
            (TextAnchor::Middle, ox + (frame.x0 + frame.x1) / 2.0)
        } else {
            (TextAnchor::End, ox + frame.x1)
        };
        doc.text(
            tx,
            oy + frame.y1 + label_px * 1.1 + title_px * (1.0 + f64::from(title.offset) * 0.3),
            &x_title,
            title_px,
            title.color,
            anchor,
        );
    }
    if !y_title.is_empty() {
        let title = style.title(Axis::Y);
        let title_px = f64::from(title.size) * pad_h;
        let (anchor, ty) = if title.center {
            (TextAnchor::Middle, oy + (frame.y0 + frame.y1) / 2.0)
        } else {
            (TextAnchor::End, oy + frame.y0)
        };
        doc.vertical_text(
            ox + frame.x0 - y_label_px * 1.2 - title_px * f64::from(title.offset) * 0.5,
            ty,
            &y_title,
            title_px,
            title.color,
            anchor,
        );
    }

    Ok(())
}

fn svg_hist1d(
    doc: &mut SvgDocument,
    frame: &Frame,
    ox: f64,
    oy: f64,
    hist: &Hist1D,
    style: &PlotStyle,
    mode: HistDrawMode,
) {
    let edges = hist.binning().edges();
    match mode {
        HistDrawMode::Bars => {
            for bin in 0..hist.num_bins() {
                let content = hist.bin_content(bin).unwrap_or(0.0);
                if content <= 0.0 {
                    continue;
                }
                let px0 = ox + frame.x_mapper.map(edges[bin]);
                let px1 = ox + frame.x_mapper.map(edges[bin + 1]);
                let py = oy + frame.y_mapper.map(content);
                let fill = match style.fill.pattern {
                    FillPattern::Hollow => None,
                    FillPattern::Solid => Some(style.fill.color),
                    FillPattern::Hatched => Some(style.fill.color.with_alpha(96)),
                };
                doc.rect(
                    px0,
                    py,
                    px1 - px0,
                    oy + frame.y1 - py,
                    fill,
                    Some(style.line.color),
                    f64::from(style.line.width),
                );
            }
        }
        HistDrawMode::Steps => {
            let mut points = Vec::with_capacity(hist.num_bins() * 2);
            for bin in 0..hist.num_bins() {
                let content = hist.bin_content(bin).unwrap_or(0.0);
                let py = oy + frame.y_mapper.map(content);
                points.push((ox + frame.x_mapper.map(edges[bin]), py));
                points.push((ox + frame.x_mapper.map(edges[bin + 1]), py));
            }
            doc.polyline(points, style.line.color, f64::from(style.line.width));
        }
        HistDrawMode::Points => {
            let centers = hist.binning().centers();
            for bin in 0..hist.num_bins() {
                let content = hist.bin_content(bin).unwrap_or(0.0);
                let error = hist.bin_error(bin).unwrap_or(0.0);
                let px = ox + frame.x_mapper.map(centers[bin]);
                let py = oy + frame.y_mapper.map(content);
                if error > 0.0 {
                    let py_lo = oy + frame.y_mapper.map(content - error);
                    let py_hi = oy + frame.y_mapper.map(content + error);
                    doc.line(px, py_lo, px, py_hi, style.line.color, f64::from(style.line.width));
                }
                doc.circle(px, py, f64::from(style.marker.size), Some(style.marker.color), None);
            }
        }
    }
}

fn svg_hist2d(
    doc: &mut SvgDocument,
    frame: &Frame,
    ox: f64,
    oy: f64,
    hist: &Hist2D,
    style: &PlotStyle,
) {
    let max = hist.max_content();
    if max <= 0.0 {
        return;
    }
    let x_edges = hist.x_binning().edges();
    let y_edges = hist.y_binning().edges();
    let fill_color = if style.fill.pattern == FillPattern::Hollow {
        Rgba::BLUE
    } else {
        style.fill.color
    };
    for ix in 0..hist.x_binning().num() as usize {
        for iy in 0..hist.y_binning().num() as usize {
            let content = hist.bin_content(ix, iy).unwrap_or(0.0);
            if content <= 0.0 {
                continue;
            }
            let t = (content / max) as f32;
            let px0 = ox + frame.x_mapper.map(x_edges[ix]);
            let px1 = ox + frame.x_mapper.map(x_edges[ix + 1]);
            let py0 = oy + frame.y_mapper.map(y_edges[iy + 1]);
            let py1 = oy + frame.y_mapper.map(y_edges[iy]);
            doc.rect(
                px0,
                py0,
                px1 - px0,
                py1 - py0,
                Some(Rgba::WHITE.lerp(fill_color, t)),
                None,
                0.0,
            );
        }
    }
}

fn svg_graph(
    doc: &mut SvgDocument,
    frame: &Frame,
    ox: f64,
    oy: f64,
    graph: &GraphSpec,
    style: &PlotStyle,
    mode: GraphDrawMode,
) {
    let connect = matches!(mode, GraphDrawMode::Line | GraphDrawMode::PointsAndLine);
    let markers = matches!(mode, GraphDrawMode::Points | GraphDrawMode::PointsAndLine);

    if connect {
        let points: Vec<(f64, f64)> = graph
            .points()
            .iter()
            .map(|p| (ox + frame.x_mapper.map(p.x), oy + frame.y_mapper.map(p.y)))
            .collect();
        doc.polyline(points, style.line.color, f64::from(style.line.width));
    }
    if markers {
        for point in graph.points() {
            let px = ox + frame.x_mapper.map(point.x);
            let py = oy + frame.y_mapper.map(point.y);
            if point.ex() > 0.0 {
                let px_lo = ox + frame.x_mapper.map(point.x - point.ex_lo);
                let px_hi = ox + frame.x_mapper.map(point.x + point.ex_hi);
                doc.line(px_lo, py, px_hi, py, style.line.color, f64::from(style.line.width));
            }
            if point.ey() > 0.0 {
                let py_lo = oy + frame.y_mapper.map(point.y - point.ey_lo);
                let py_hi = oy + frame.y_mapper.map(point.y + point.ey_hi);
                doc.line(px, py_lo, px, py_hi, style.line.color, f64::from(style.line.width));
            }
            doc.circle(px, py, f64::from(style.marker.size), Some(style.marker.color), None);
        }
    }
}

fn svg_legend(doc: &mut SvgDocument, legend: &Legend, placement: &PadPlacement) {
    let ox = f64::from(placement.origin_x);
    let oy = f64::from(placement.origin_y);
    let (bx0, by0, bx1, by1) = pixel_box(legend.vertices(), placement.width, placement.height);
    doc.rect(
        ox + bx0,
        oy + by0,
        bx1 - bx0,
        by1 - by0,
        Some(Rgba::WHITE),
        Some(Rgba::BLACK),
        1.0,
    );

    let text = legend.text();
    let pad_h = f64::from(placement.height);
    let row_h = f64::from(text.spacing) * pad_h;
    let font_px = f64::from(text.size) * pad_h;
    let swatch_w = (bx1 - bx0) * 0.25;

    let mut row = 0usize;
    if !legend.header().is_empty() {
        doc.text(
            ox + bx0 + 4.0,
            oy + by0 + row_h * 0.75,
            legend.header(),
            font_px,
            text.color,
            TextAnchor::Start,
        );
        row += 1;
    }
    for entry in legend.entries() {
        let row_top = by0 + row as f64 * row_h;
        if row_top + row_h > by1 {
            break;
        }
        let row_mid = oy + row_top + row_h / 2.0;
        if entry.swatch.fill && entry.style.fill.pattern != FillPattern::Hollow {
            doc.rect(
                ox + bx0 + 2.0,
                oy + row_top + 2.0,
                (swatch_w - 4.0).max(1.0),
                (row_h - 4.0).max(1.0),
                Some(entry.style.fill.color),
                None,
                0.0,
            );
        }
        if entry.swatch.line {
            doc.line(
                ox + bx0 + 2.0,
                row_mid,
                ox + bx0 + swatch_w - 2.0,
                row_mid,
                entry.style.line.color,
                f64::from(entry.style.line.width),
            );
        }
        if entry.swatch.marker {
            doc.circle(
                ox + bx0 + swatch_w / 2.0,
                row_mid,
                f64::from(entry.style.marker.size),
                Some(entry.style.marker.color),
                None,
            );
        }
        doc.text(
            ox + bx0 + swatch_w + 4.0,
            row_mid + font_px * 0.35,
            &entry.label,
            font_px,
            text.color,
            TextAnchor::Start,
        );
        row += 1;
    }
}

fn svg_textbox(doc: &mut SvgDocument, text_box: &TextBox, placement: &PadPlacement) {
    let ox = f64::from(placement.origin_x);
    let oy = f64::from(placement.origin_y);
    let (bx0, by0, bx1, by1) = pixel_box(text_box.vertices(), placement.width, placement.height);
    if text_box.border() {
        doc.rect(
            ox + bx0,
            oy + by0,
            bx1 - bx0,
            by1 - by0,
            None,
            Some(Rgba::BLACK),
            1.0,
        );
    }

    let text = text_box.text();
    let pad_h = f64::from(placement.height);
    let row_h = f64::from(text.spacing) * pad_h;
    let font_px = f64::from(text.size) * pad_h;
    let (x, anchor) = match text.align {
        crate::style::TextAlign::Left => (bx0 + 4.0, TextAnchor::Start),
        crate::style::TextAlign::Center => ((bx0 + bx1) / 2.0, TextAnchor::Middle),
        crate::style::TextAlign::Right => (bx1 - 4.0, TextAnchor::End),
    };
    for (i, line) in text_box.lines().iter().enumerate() {
        let y = by0 + (i + 1) as f64 * row_h;
        if y > by1 + row_h {
            break;
        }
        doc.text(ox + x, oy + y - row_h * 0.25, line, font_px, text.color, anchor);
    }
}
