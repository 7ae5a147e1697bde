//! Plot composition: legends, text boxes, pads, and canvases.

mod canvas;
mod legend;
mod pad;
mod textbox;

pub use canvas::Canvas;
pub use legend::{Legend, LegendEntry, SwatchOptions};
pub use pad::{GraphDrawMode, HistDrawMode, Pad, PadOptions};
pub use textbox::TextBox;

use crate::error::{Error, Result};

/// A normalized box inside a pad or canvas.
///
/// `(x1, y1)` is the lower-left corner and `(x2, y2)` the upper-right,
/// both in `[0, 1]` with y growing upward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertices {
    /// Left edge.
    pub x1: f32,
    /// Bottom edge.
    pub y1: f32,
    /// Right edge.
    pub x2: f32,
    /// Top edge.
    pub y2: f32,
}

impl Vertices {
    /// Create a normalized box.
    ///
    /// # Errors
    ///
    /// Returns an error if the corners are out of `[0, 1]` or out of
    /// order.
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Result<Self> {
        let in_unit = |v: f32| (0.0..=1.0).contains(&v);
        if !(in_unit(x1) && in_unit(y1) && in_unit(x2) && in_unit(y2)) {
            return Err(Error::InvalidGeometry(format!(
                "vertices must lie in [0,1]: ({x1}, {y1}, {x2}, {y2})"
            )));
        }
        if x1 >= x2 || y1 >= y2 {
            return Err(Error::InvalidGeometry(format!(
                "vertices out of order: ({x1}, {y1}, {x2}, {y2})"
            )));
        }
        Ok(Self { x1, y1, x2, y2 })
    }

    /// The full unit box.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            x1: 0.0,
            y1: 0.0,
            x2: 1.0,
            y2: 1.0,
        }
    }

    /// Normalized width.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    /// Normalized height.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }
}

impl Default for Vertices {
    fn default() -> Self {
        Self::full()
    }
}

/// Normalized margins around a pad frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    /// Top margin.
    pub top: f32,
    /// Right margin.
    pub right: f32,
    /// Bottom margin.
    pub bottom: f32,
    /// Left margin.
    pub left: f32,
}

impl Margins {
    /// Create margins in top, right, bottom, left order.
    #[must_use]
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(0.08, 0.04, 0.12, 0.12)
    }
}

/// Height of a text block based on line count and spacing.
///
/// Used to size legends and text boxes from their content.
#[must_use]
pub fn line_height(nlines: usize, spacing: f32, offset: Option<f32>) -> f32 {
    let mut height = nlines as f32 * spacing;
    if let Some(off) = offset {
        height += off;
    }
    height
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vertices_valid() {
        let v = Vertices::new(0.1, 0.2, 0.9, 0.8).unwrap();
        assert_relative_eq!(v.width(), 0.8);
        assert_relative_eq!(v.height(), 0.6, epsilon = 1e-6);
    }

    #[test]
    fn test_vertices_out_of_unit() {
        assert!(Vertices::new(-0.1, 0.0, 1.0, 1.0).is_err());
        assert!(Vertices::new(0.0, 0.0, 1.5, 1.0).is_err());
    }

    #[test]
    fn test_vertices_out_of_order() {
        assert!(Vertices::new(0.9, 0.0, 0.1, 1.0).is_err());
        assert!(Vertices::new(0.0, 0.8, 1.0, 0.2).is_err());
    }

    #[test]
    fn test_vertices_full() {
        let v = Vertices::full();
        assert_relative_eq!(v.width(), 1.0);
        assert_relative_eq!(v.height(), 1.0);
    }

    #[test]
    fn test_line_height() {
        assert_relative_eq!(line_height(3, 0.05, None), 0.15);
        assert_relative_eq!(line_height(3, 0.05, Some(0.02)), 0.17);
    }

    #[test]
    fn test_margins_default() {
        let m = Margins::default();
        assert!(m.left > 0.0 && m.bottom > 0.0);
    }
}
