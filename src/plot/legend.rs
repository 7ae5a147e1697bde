//! Legend definitions.

use crate::plot::{line_height, Vertices};
use crate::style::{PlotStyle, TextStyle};

/// Which style components a legend swatch shows for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwatchOptions {
    /// Show the marker.
    pub marker: bool,
    /// Show a line segment.
    pub line: bool,
    /// Show a fill patch.
    pub fill: bool,
}

impl Default for SwatchOptions {
    fn default() -> Self {
        Self {
            marker: true,
            line: false,
            fill: true,
        }
    }
}

/// One entry in a legend: a label and the style it describes.
#[derive(Debug, Clone)]
pub struct LegendEntry {
    /// Entry label.
    pub label: String,
    /// Style to render the swatch with.
    pub style: PlotStyle,
    /// Swatch components to show.
    pub swatch: SwatchOptions,
}

impl LegendEntry {
    /// Create an entry with default swatch options.
    #[must_use]
    pub fn new(label: &str, style: PlotStyle) -> Self {
        Self {
            label: label.to_string(),
            style,
            swatch: SwatchOptions::default(),
        }
    }

    /// Set the swatch options.
    #[must_use]
    pub const fn with_swatch(mut self, swatch: SwatchOptions) -> Self {
        self.swatch = swatch;
        self
    }
}

/// A legend definition: a header, a placement box, and entries.
#[derive(Debug, Clone)]
pub struct Legend {
    header: String,
    vertices: Vertices,
    entries: Vec<LegendEntry>,
    text: TextStyle,
}

impl Legend {
    /// Create an empty legend at a position.
    #[must_use]
    pub fn new(vertices: Vertices) -> Self {
        Self {
            header: String::new(),
            vertices,
            entries: Vec::new(),
            text: TextStyle::default(),
        }
    }

    /// Set the header line.
    #[must_use]
    pub fn with_header(mut self, header: &str) -> Self {
        self.header = header.to_string();
        self
    }

    /// Set the text style.
    #[must_use]
    pub fn with_text(mut self, text: TextStyle) -> Self {
        self.text = text;
        self
    }

    /// Add an entry with default swatch options.
    pub fn add_entry(&mut self, label: &str, style: PlotStyle) {
        self.entries.push(LegendEntry::new(label, style));
    }

    /// Add a fully specified entry.
    pub fn add_entry_with(&mut self, entry: LegendEntry) {
        self.entries.push(entry);
    }

    /// Replace all entries.
    pub fn set_entries(&mut self, entries: Vec<LegendEntry>) {
        self.entries = entries;
    }

    /// The header line.
    #[must_use]
    pub fn header(&self) -> &str {
        &self.header
    }

    /// The placement box.
    #[must_use]
    pub const fn vertices(&self) -> Vertices {
        self.vertices
    }

    /// Move the legend.
    pub fn set_vertices(&mut self, vertices: Vertices) {
        self.vertices = vertices;
    }

    /// The entries.
    #[must_use]
    pub fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }

    /// The text style.
    #[must_use]
    pub const fn text(&self) -> TextStyle {
        self.text
    }

    /// Normalized height needed for the current content.
    ///
    /// One line per entry, plus one for a non-empty header.
    #[must_use]
    pub fn content_height(&self) -> f32 {
        let lines = self.entries.len() + usize::from(!self.header.is_empty());
        line_height(lines, self.text.spacing, None)
    }
}
