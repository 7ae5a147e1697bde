//! Pad definitions.
//!
//! A pad is a normalized sub-region of a canvas with its own margins,
//! axis options, and attached drawables.

use crate::graph::GraphSpec;
use crate::hist::{Hist1D, Hist2D};
use crate::plot::{Legend, Margins, TextBox, Vertices};
use crate::style::PlotStyle;

/// Display options of a pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PadOptions {
    /// Draw vertical grid lines at x ticks.
    pub grid_x: bool,
    /// Draw horizontal grid lines at y ticks.
    pub grid_y: bool,
    /// Logarithmic x axis.
    pub log_x: bool,
    /// Logarithmic y axis.
    pub log_y: bool,
    /// Draw tick marks on the frame.
    pub ticks: bool,
    /// Draw the frame outline.
    pub frame: bool,
}

impl Default for PadOptions {
    fn default() -> Self {
        Self {
            grid_x: false,
            grid_y: false,
            log_x: false,
            log_y: false,
            ticks: true,
            frame: true,
        }
    }
}

/// How a 1-D histogram is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistDrawMode {
    /// Filled bars per bin.
    #[default]
    Bars,
    /// A step outline through the bin contents.
    Steps,
    /// A marker with error bars at each bin center.
    Points,
}

/// How a graph is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GraphDrawMode {
    /// Markers with error bars.
    #[default]
    Points,
    /// A connecting line only.
    Line,
    /// Markers, error bars, and a connecting line.
    PointsAndLine,
}

/// A drawable attached to a pad.
#[derive(Debug, Clone)]
pub(crate) enum PadItem {
    Hist1D {
        hist: Hist1D,
        style: PlotStyle,
        mode: HistDrawMode,
    },
    Hist2D {
        hist: Hist2D,
        style: PlotStyle,
    },
    Graph {
        graph: GraphSpec,
        style: PlotStyle,
        mode: GraphDrawMode,
    },
    Legend(Legend),
    Text(TextBox),
}

/// A pad definition: placement, margins, options, and drawables.
#[derive(Debug, Clone)]
pub struct Pad {
    name: String,
    title: String,
    vertices: Vertices,
    margins: Margins,
    options: PadOptions,
    items: Vec<PadItem>,
}

impl Pad {
    /// Create a pad covering a normalized region of its canvas.
    #[must_use]
    pub fn new(name: &str, vertices: Vertices) -> Self {
        Self {
            name: name.to_string(),
            title: String::new(),
            vertices,
            margins: Margins::default(),
            options: PadOptions::default(),
            items: Vec::new(),
        }
    }

    /// Set the pad title.
    #[must_use]
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Set the margins.
    #[must_use]
    pub const fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Set the display options.
    #[must_use]
    pub const fn with_options(mut self, options: PadOptions) -> Self {
        self.options = options;
        self
    }

    /// Pad name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pad title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Placement within the canvas.
    #[must_use]
    pub const fn vertices(&self) -> Vertices {
        self.vertices
    }

    /// Frame margins.
    #[must_use]
    pub const fn margins(&self) -> Margins {
        self.margins
    }

    /// Display options.
    #[must_use]
    pub const fn options(&self) -> PadOptions {
        self.options
    }

    /// Number of attached drawables.
    #[must_use]
    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn items(&self) -> &[PadItem] {
        &self.items
    }

    /// Attach a 1-D histogram.
    pub fn draw_hist(&mut self, hist: Hist1D, style: PlotStyle, mode: HistDrawMode) {
        self.items.push(PadItem::Hist1D { hist, style, mode });
    }

    /// Attach a 2-D histogram, drawn as a colored-cell map.
    pub fn draw_hist2d(&mut self, hist: Hist2D, style: PlotStyle) {
        self.items.push(PadItem::Hist2D { hist, style });
    }

    /// Attach a graph.
    pub fn draw_graph(&mut self, graph: GraphSpec, style: PlotStyle, mode: GraphDrawMode) {
        self.items.push(PadItem::Graph { graph, style, mode });
    }

    /// Attach a legend.
    pub fn draw_legend(&mut self, legend: Legend) {
        self.items.push(PadItem::Legend(legend));
    }

    /// Attach a text box.
    pub fn draw_text(&mut self, text: TextBox) {
        self.items.push(PadItem::Text(text));
    }
}
