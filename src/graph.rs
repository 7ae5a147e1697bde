//! Graph points and graph definitions.

use crate::error::{Error, Result};
use crate::hist::Hist1D;

/// A point on a graph, with optional asymmetric errors on each axis.
///
/// Error members hold the low-side and high-side extents separately; the
/// symmetric constructors split the given error evenly between them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GraphPoint {
    /// X value.
    pub x: f64,
    /// Y value.
    pub y: f64,
    /// Z value.
    pub z: f64,
    /// Low-side x error.
    pub ex_lo: f64,
    /// High-side x error.
    pub ex_hi: f64,
    /// Low-side y error.
    pub ey_lo: f64,
    /// High-side y error.
    pub ey_hi: f64,
    /// Low-side z error.
    pub ez_lo: f64,
    /// High-side z error.
    pub ez_hi: f64,
}

impl GraphPoint {
    /// Create a point without errors.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    /// Create a 3-dimensional point without errors.
    #[must_use]
    pub fn new_3d(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            ..Self::default()
        }
    }

    /// Create a point with symmetric errors, split evenly across each side.
    #[must_use]
    pub fn with_errors(x: f64, y: f64, ex: f64, ey: f64) -> Self {
        Self {
            x,
            y,
            ex_lo: ex / 2.0,
            ex_hi: ex / 2.0,
            ey_lo: ey / 2.0,
            ey_hi: ey / 2.0,
            ..Self::default()
        }
    }

    /// Create a point with asymmetric `(low, high)` errors.
    #[must_use]
    pub fn with_asymm_errors(x: f64, y: f64, ex: (f64, f64), ey: (f64, f64)) -> Self {
        Self {
            x,
            y,
            ex_lo: ex.0,
            ex_hi: ex.1,
            ey_lo: ey.0,
            ey_hi: ey.1,
            ..Self::default()
        }
    }

    /// Total x error (low plus high side).
    #[must_use]
    pub fn ex(&self) -> f64 {
        self.ex_lo + self.ex_hi
    }

    /// Total y error (low plus high side).
    #[must_use]
    pub fn ey(&self) -> f64 {
        self.ey_lo + self.ey_hi
    }

    /// Total z error (low plus high side).
    #[must_use]
    pub fn ez(&self) -> f64 {
        self.ez_lo + self.ez_hi
    }
}

/// A member of a [`GraphPoint`], used for bulk extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum PointMember {
    X,
    Y,
    Z,
    ExLo,
    ExHi,
    EyLo,
    EyHi,
    EzLo,
    EzHi,
}

/// A graph definition: a named list of points.
///
/// Consolidates the data needed to draw a scatter or line graph, and
/// decomposes its points into per-member vectors for rendering.
#[derive(Debug, Clone, Default)]
pub struct GraphSpec {
    name: String,
    points: Vec<GraphPoint>,
}

impl GraphSpec {
    /// Create an empty graph with a name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            points: Vec::new(),
        }
    }

    /// Build a graph from the bins of a 1-D histogram.
    ///
    /// Each bin becomes a point at (center, content) with the bin width
    /// as symmetric x error and the bin error as symmetric y error.
    #[must_use]
    pub fn from_hist1d(hist: &Hist1D, name: &str) -> Self {
        let binning = hist.binning();
        let centers = binning.centers();
        let widths = binning.widths();

        let mut graph = Self::new(name);
        for bin in 0..binning.num() as usize {
            graph.add_point(GraphPoint::with_errors(
                centers[bin],
                hist.bin_content(bin).unwrap_or(0.0),
                widths[bin],
                hist.bin_error(bin).unwrap_or(0.0),
            ));
        }
        graph
    }

    /// Graph name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the graph.
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// The point list.
    #[must_use]
    pub fn points(&self) -> &[GraphPoint] {
        &self.points
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the graph has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append a point.
    pub fn add_point(&mut self, point: GraphPoint) {
        self.points.push(point);
    }

    /// Replace all points.
    pub fn set_points(&mut self, points: Vec<GraphPoint>) {
        self.points = points;
    }

    /// Remove all points.
    pub fn reset_points(&mut self) {
        self.points.clear();
    }

    /// Extract one member from every point.
    #[must_use]
    pub fn member(&self, member: PointMember) -> Vec<f64> {
        self.points
            .iter()
            .map(|p| match member {
                PointMember::X => p.x,
                PointMember::Y => p.y,
                PointMember::Z => p.z,
                PointMember::ExLo => p.ex_lo,
                PointMember::ExHi => p.ex_hi,
                PointMember::EyLo => p.ey_lo,
                PointMember::EyHi => p.ey_hi,
                PointMember::EzLo => p.ez_lo,
                PointMember::EzHi => p.ez_hi,
            })
            .collect()
    }

    /// X values of every point.
    #[must_use]
    pub fn xs(&self) -> Vec<f64> {
        self.member(PointMember::X)
    }

    /// Y values of every point.
    #[must_use]
    pub fn ys(&self) -> Vec<f64> {
        self.member(PointMember::Y)
    }

    /// Z values of every point.
    #[must_use]
    pub fn zs(&self) -> Vec<f64> {
        self.member(PointMember::Z)
    }

    /// Data range as `((x_min, x_max), (y_min, y_max))`, error bars
    /// included.
    ///
    /// Returns `None` for an empty graph.
    #[must_use]
    pub fn range(&self) -> Option<((f64, f64), (f64, f64))> {
        if self.points.is_empty() {
            return None;
        }
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for p in &self.points {
            x_min = x_min.min(p.x - p.ex_lo);
            x_max = x_max.max(p.x + p.ex_hi);
            y_min = y_min.min(p.y - p.ey_lo);
            y_max = y_max.max(p.y + p.ey_hi);
        }
        Some(((x_min, x_max), (y_min, y_max)))
    }
}

/// Validate that a graph is drawable.
///
/// # Errors
///
/// Returns an error if the graph has no points.
pub fn require_points(graph: &GraphSpec) -> Result<()> {
    if graph.is_empty() {
        return Err(Error::EmptyData);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binning::Binning;
    use crate::hist::HistSpec;
    use approx::assert_relative_eq;

    #[test]
    fn test_point_plain() {
        let p = GraphPoint::new(1.0, 2.0);
        assert_relative_eq!(p.x, 1.0);
        assert_relative_eq!(p.y, 2.0);
        assert_relative_eq!(p.ex(), 0.0);
    }

    #[test]
    fn test_point_symmetric_errors_split() {
        let p = GraphPoint::with_errors(1.0, 2.0, 0.5, 1.0);
        assert_relative_eq!(p.ex_lo, 0.25);
        assert_relative_eq!(p.ex_hi, 0.25);
        assert_relative_eq!(p.ey(), 1.0);
    }

    #[test]
    fn test_point_asymmetric_errors() {
        let p = GraphPoint::with_asymm_errors(1.0, 2.0, (0.1, 0.3), (0.2, 0.4));
        assert_relative_eq!(p.ex(), 0.4);
        assert_relative_eq!(p.ey_lo, 0.2);
        assert_relative_eq!(p.ey_hi, 0.4);
    }

    #[test]
    fn test_graph_add_and_reset() {
        let mut g = GraphSpec::new("g");
        g.add_point(GraphPoint::new(1.0, 2.0));
        g.add_point(GraphPoint::new(3.0, 4.0));
        assert_eq!(g.len(), 2);
        g.reset_points();
        assert!(g.is_empty());
    }

    #[test]
    fn test_graph_members() {
        let mut g = GraphSpec::new("g");
        g.set_points(vec![GraphPoint::new(1.0, 10.0), GraphPoint::new(2.0, 20.0)]);
        assert_eq!(g.xs(), vec![1.0, 2.0]);
        assert_eq!(g.ys(), vec![10.0, 20.0]);
        assert_eq!(g.member(PointMember::ExLo), vec![0.0, 0.0]);
    }

    #[test]
    fn test_graph_range_includes_errors() {
        let mut g = GraphSpec::new("g");
        g.add_point(GraphPoint::with_errors(1.0, 5.0, 1.0, 2.0));
        let ((x_min, x_max), (y_min, y_max)) = g.range().unwrap();
        assert_relative_eq!(x_min, 0.5);
        assert_relative_eq!(x_max, 1.5);
        assert_relative_eq!(y_min, 4.0);
        assert_relative_eq!(y_max, 6.0);
    }

    #[test]
    fn test_graph_range_empty() {
        assert!(GraphSpec::new("g").range().is_none());
    }

    #[test]
    fn test_require_points() {
        let g = GraphSpec::new("g");
        assert!(require_points(&g).is_err());
    }

    #[test]
    fn test_from_hist1d() {
        let spec = HistSpec::new("h")
            .with_bins(crate::binning::Axis::X, Binning::uniform(2, 0.0, 2.0).unwrap());
        let mut hist = spec.build_1d().unwrap();
        hist.fill(0.5);
        hist.fill(0.5);
        hist.fill(1.5);

        let g = GraphSpec::from_hist1d(&hist, "g");
        assert_eq!(g.len(), 2);
        assert_relative_eq!(g.points()[0].x, 0.5);
        assert_relative_eq!(g.points()[0].y, 2.0);
        assert_relative_eq!(g.points()[1].y, 1.0);
        // bin width becomes the symmetric x error
        assert_relative_eq!(g.points()[0].ex(), 1.0);
    }
}
