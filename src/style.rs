//! Style definitions for histograms, graphs, and plot decorations.
//!
//! These are plain aggregates of display parameters. No validation is
//! performed on them; they carry whatever the caller sets.

use crate::binning::Axis;
use crate::color::Rgba;

/// Marker shape for graph points and histogram point-mode drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerShape {
    /// A single pixel.
    Dot,
    /// Hollow circle.
    Circle,
    /// Filled circle.
    #[default]
    FilledCircle,
    /// Hollow square.
    Square,
    /// Filled square.
    FilledSquare,
    /// Diagonal cross.
    Cross,
    /// Upright plus.
    Plus,
    /// Hollow diamond.
    Diamond,
}

/// Line pattern for outlines, error bars, and connecting lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinePattern {
    /// Continuous line.
    #[default]
    Solid,
    /// Long dashes.
    Dashed,
    /// Single-pixel dots.
    Dotted,
    /// Alternating dash and dot.
    DashDot,
}

/// Fill pattern for histogram bars and legend swatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillPattern {
    /// No fill, outline only.
    #[default]
    Hollow,
    /// Solid fill.
    Solid,
    /// Diagonal hatching.
    Hatched,
}

/// Marker style: color, shape, and size in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    /// Marker color.
    pub color: Rgba,
    /// Marker shape.
    pub shape: MarkerShape,
    /// Marker half-extent in pixels.
    pub size: f32,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            color: Rgba::BLACK,
            shape: MarkerShape::default(),
            size: 3.0,
        }
    }
}

/// Line style: color, pattern, and width in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// Line color.
    pub color: Rgba,
    /// Dash pattern.
    pub pattern: LinePattern,
    /// Width in pixels.
    pub width: u32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Rgba::BLACK,
            pattern: LinePattern::default(),
            width: 1,
        }
    }
}

/// Fill style: color and pattern.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FillStyle {
    /// Fill color.
    pub color: Rgba,
    /// Fill pattern.
    pub pattern: FillPattern,
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// Left-aligned.
    #[default]
    Left,
    /// Centered.
    Center,
    /// Right-aligned.
    Right,
}

/// Text style for legends, text boxes, and titles.
///
/// Sizes and spacings are fractions of the pad height, so styles carry
/// over between pads of different pixel sizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Text color.
    pub color: Rgba,
    /// Glyph size as a fraction of the pad height.
    pub size: f32,
    /// Alignment within the enclosing box.
    pub align: TextAlign,
    /// Line spacing as a fraction of the pad height.
    pub spacing: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Rgba::BLACK,
            size: 0.04,
            align: TextAlign::Left,
            spacing: 0.05,
        }
    }
}

/// Axis label style (tick value annotations).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelStyle {
    /// Label color.
    pub color: Rgba,
    /// Glyph size as a fraction of the pad height.
    pub size: f32,
    /// Offset from the axis as a fraction of the pad extent.
    pub offset: f32,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            color: Rgba::BLACK,
            size: 0.04,
            offset: 0.005,
        }
    }
}

/// Axis title style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitleStyle {
    /// Title color.
    pub color: Rgba,
    /// Whether the title is centered on the axis.
    pub center: bool,
    /// Glyph size as a fraction of the pad height.
    pub size: f32,
    /// Offset from the axis in multiples of the glyph size.
    pub offset: f32,
}

impl Default for TitleStyle {
    fn default() -> Self {
        Self {
            color: Rgba::BLACK,
            center: false,
            size: 0.04,
            offset: 1.0,
        }
    }
}

/// Complete style bundle for one plotted object.
///
/// Consolidates the marker, line, fill, and text options together with
/// per-axis label and title styles.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlotStyle {
    /// Marker options.
    pub marker: MarkerStyle,
    /// Line options.
    pub line: LineStyle,
    /// Fill options.
    pub fill: FillStyle,
    /// Text options.
    pub text: TextStyle,
    labels: [LabelStyle; 3],
    titles: [TitleStyle; 3],
}

impl PlotStyle {
    /// Create a style bundle with all defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a style where marker, line, and fill share one color.
    #[must_use]
    pub fn from_color(color: Rgba) -> Self {
        let mut style = Self::default();
        style.marker.color = color;
        style.line.color = color;
        style.fill.color = color;
        style
    }

    /// Set the marker style.
    #[must_use]
    pub fn with_marker(mut self, marker: MarkerStyle) -> Self {
        self.marker = marker;
        self
    }

    /// Set the line style.
    #[must_use]
    pub fn with_line(mut self, line: LineStyle) -> Self {
        self.line = line;
        self
    }

    /// Set the fill style.
    #[must_use]
    pub fn with_fill(mut self, fill: FillStyle) -> Self {
        self.fill = fill;
        self
    }

    /// Set the text style.
    #[must_use]
    pub fn with_text(mut self, text: TextStyle) -> Self {
        self.text = text;
        self
    }

    /// Get the label style for one axis.
    #[must_use]
    pub fn label(&self, axis: Axis) -> LabelStyle {
        self.labels[axis.index()]
    }

    /// Get the title style for one axis.
    #[must_use]
    pub fn title(&self, axis: Axis) -> TitleStyle {
        self.titles[axis.index()]
    }

    /// Set the label style for one axis.
    pub fn set_label(&mut self, axis: Axis, label: LabelStyle) {
        self.labels[axis.index()] = label;
    }

    /// Set the title style for one axis.
    pub fn set_title(&mut self, axis: Axis, title: TitleStyle) {
        self.titles[axis.index()] = title;
    }

    /// Set every axis label to the same style.
    pub fn set_all_labels(&mut self, label: LabelStyle) {
        self.labels = [label; 3];
    }

    /// Set every axis title to the same style.
    pub fn set_all_titles(&mut self, title: TitleStyle) {
        self.titles = [title; 3];
    }

    /// Set label styles from a list in x, y, z order.
    ///
    /// Entries beyond the third are ignored; missing entries leave the
    /// current style in place.
    pub fn set_labels(&mut self, labels: &[LabelStyle]) {
        for (slot, label) in self.labels.iter_mut().zip(labels.iter()) {
            *slot = *label;
        }
    }

    /// Set title styles from a list in x, y, z order.
    ///
    /// Entries beyond the third are ignored; missing entries leave the
    /// current style in place.
    pub fn set_titles(&mut self, titles: &[TitleStyle]) {
        for (slot, title) in self.titles.iter_mut().zip(titles.iter()) {
            *slot = *title;
        }
    }
}
