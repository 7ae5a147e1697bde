//! Histogram book: managed grids of repeated histograms.
//!
//! A [`HistBook`] manages large collections of repeated histograms, e.g.
//! the same set of distributions filled once per cut combination. The
//! caller registers specs and a list of indices; the book stamps out the
//! full index-by-spec grid with unique names.

use std::collections::HashMap;
use std::hash::Hash;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::hist::{Hist1D, Hist2D, Hist3D, HistSpec};
use crate::plot::{Canvas, HistDrawMode};
use crate::style::PlotStyle;

/// An index into a histogram grid.
///
/// Implementors provide a stable label used to suffix histogram names,
/// so every cell of the grid gets a unique, recognizable name.
pub trait BinIndex: Clone + Eq + Hash {
    /// Stable string form of this index.
    fn label(&self) -> String;
}

/// A ready-made N-dimensional index: one bin ordinal per dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellIndex<const N: usize>(
    /// Bin ordinals, one per dimension.
    pub [usize; N],
);

impl<const N: usize> BinIndex for CellIndex<N> {
    fn label(&self) -> String {
        self.0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("_")
    }
}

/// Map from base spec name to a histogram.
pub type HistMap<T> = HashMap<String, T>;

/// Grid of histograms keyed by index, then by base spec name.
pub type HistGrid<I, T> = HashMap<I, HistMap<T>>;

/// A managed collection of histogram grids.
#[derive(Debug, Clone)]
pub struct HistBook<I: BinIndex> {
    weighted: bool,
    indices: Vec<I>,
    specs_1d: Vec<HistSpec>,
    specs_2d: Vec<HistSpec>,
    specs_3d: Vec<HistSpec>,
    hists_1d: HistGrid<I, Hist1D>,
    hists_2d: HistGrid<I, Hist2D>,
    hists_3d: HistGrid<I, Hist3D>,
}

impl<I: BinIndex> Default for HistBook<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: BinIndex> HistBook<I> {
    /// Create an empty book.
    #[must_use]
    pub fn new() -> Self {
        Self {
            weighted: false,
            indices: Vec::new(),
            specs_1d: Vec::new(),
            specs_2d: Vec::new(),
            specs_3d: Vec::new(),
            hists_1d: HashMap::new(),
            hists_2d: HashMap::new(),
            hists_3d: HashMap::new(),
        }
    }

    /// Create a book with weight-error tracking preset.
    #[must_use]
    pub fn with_weighted(weighted: bool) -> Self {
        let mut book = Self::new();
        book.weighted = weighted;
        book
    }

    /// Whether generated histograms track summed squared weights.
    #[must_use]
    pub const fn weighted(&self) -> bool {
        self.weighted
    }

    /// Set weight-error tracking for subsequently generated histograms.
    pub fn set_weighted(&mut self, weighted: bool) {
        self.weighted = weighted;
    }

    /// Append an index cell.
    pub fn add_index(&mut self, index: I) {
        self.indices.push(index);
    }

    /// Replace the index list.
    pub fn set_indices(&mut self, indices: Vec<I>) {
        self.indices = indices;
    }

    /// The index list.
    #[must_use]
    pub fn indices(&self) -> &[I] {
        &self.indices
    }

    /// Register a 1-D spec.
    pub fn register_1d(&mut self, spec: HistSpec) {
        self.specs_1d.push(spec);
    }

    /// Register a 2-D spec.
    pub fn register_2d(&mut self, spec: HistSpec) {
        self.specs_2d.push(spec);
    }

    /// Register a 3-D spec.
    pub fn register_3d(&mut self, spec: HistSpec) {
        self.specs_3d.push(spec);
    }

    /// Number of index cells.
    #[must_use]
    pub fn num_indices(&self) -> usize {
        self.indices.len()
    }

    /// Number of 1-D histograms the grid holds once generated.
    #[must_use]
    pub fn num_hist_1d(&self) -> usize {
        self.indices.len() * self.specs_1d.len()
    }

    /// Number of 2-D histograms the grid holds once generated.
    #[must_use]
    pub fn num_hist_2d(&self) -> usize {
        self.indices.len() * self.specs_2d.len()
    }

    /// Number of 3-D histograms the grid holds once generated.
    #[must_use]
    pub fn num_hist_3d(&self) -> usize {
        self.indices.len() * self.specs_3d.len()
    }

    /// Histogram name for a spec at an index.
    fn cell_name(spec_name: &str, index: &I) -> String {
        format!("{spec_name}_{}", index.label())
    }

    /// Generate the full index-by-spec grids.
    ///
    /// Existing grids are discarded. Every histogram gets the spec name
    /// suffixed with the index label.
    ///
    /// # Errors
    ///
    /// Returns an error if any spec is missing a required binning.
    pub fn generate(&mut self) -> Result<()> {
        self.hists_1d.clear();
        self.hists_2d.clear();
        self.hists_3d.clear();

        for index in &self.indices {
            let mut row_1d = HistMap::new();
            for spec in &self.specs_1d {
                let mut cell_spec = spec.clone();
                cell_spec.set_name(&Self::cell_name(spec.name(), index));
                let mut hist = cell_spec.build_1d()?;
                if self.weighted {
                    hist.enable_weight_errors();
                }
                row_1d.insert(spec.name().to_string(), hist);
            }
            self.hists_1d.insert(index.clone(), row_1d);

            let mut row_2d = HistMap::new();
            for spec in &self.specs_2d {
                let mut cell_spec = spec.clone();
                cell_spec.set_name(&Self::cell_name(spec.name(), index));
                let mut hist = cell_spec.build_2d()?;
                if self.weighted {
                    hist.enable_weight_errors();
                }
                row_2d.insert(spec.name().to_string(), hist);
            }
            self.hists_2d.insert(index.clone(), row_2d);

            let mut row_3d = HistMap::new();
            for spec in &self.specs_3d {
                let mut cell_spec = spec.clone();
                cell_spec.set_name(&Self::cell_name(spec.name(), index));
                let mut hist = cell_spec.build_3d()?;
                if self.weighted {
                    hist.enable_weight_errors();
                }
                row_3d.insert(spec.name().to_string(), hist);
            }
            self.hists_3d.insert(index.clone(), row_3d);
        }
        Ok(())
    }

    /// Get a generated 1-D histogram by index and base spec name.
    #[must_use]
    pub fn get_1d(&self, index: &I, name: &str) -> Option<&Hist1D> {
        self.hists_1d.get(index).and_then(|row| row.get(name))
    }

    /// Get a generated 2-D histogram by index and base spec name.
    #[must_use]
    pub fn get_2d(&self, index: &I, name: &str) -> Option<&Hist2D> {
        self.hists_2d.get(index).and_then(|row| row.get(name))
    }

    /// Get a generated 3-D histogram by index and base spec name.
    #[must_use]
    pub fn get_3d(&self, index: &I, name: &str) -> Option<&Hist3D> {
        self.hists_3d.get(index).and_then(|row| row.get(name))
    }

    /// Fill a 1-D histogram with unit weight.
    ///
    /// # Errors
    ///
    /// Returns an error if the index or name has no histogram.
    pub fn fill_1d(&mut self, index: &I, name: &str, x: f64) -> Result<()> {
        self.fill_1d_weighted(index, name, x, 1.0)
    }

    /// Fill a 1-D histogram with an explicit weight.
    ///
    /// # Errors
    ///
    /// Returns an error if the index or name has no histogram.
    pub fn fill_1d_weighted(&mut self, index: &I, name: &str, x: f64, weight: f64) -> Result<()> {
        self.hists_1d
            .get_mut(index)
            .and_then(|row| row.get_mut(name))
            .ok_or_else(|| Error::UnknownHistogram(name.to_string()))?
            .fill_weighted(x, weight);
        Ok(())
    }

    /// Fill a 2-D histogram with unit weight.
    ///
    /// # Errors
    ///
    /// Returns an error if the index or name has no histogram.
    pub fn fill_2d(&mut self, index: &I, name: &str, x: f64, y: f64) -> Result<()> {
        self.fill_2d_weighted(index, name, x, y, 1.0)
    }

    /// Fill a 2-D histogram with an explicit weight.
    ///
    /// # Errors
    ///
    /// Returns an error if the index or name has no histogram.
    pub fn fill_2d_weighted(
        &mut self,
        index: &I,
        name: &str,
        x: f64,
        y: f64,
        weight: f64,
    ) -> Result<()> {
        self.hists_2d
            .get_mut(index)
            .and_then(|row| row.get_mut(name))
            .ok_or_else(|| Error::UnknownHistogram(name.to_string()))?
            .fill_weighted(x, y, weight);
        Ok(())
    }

    /// Fill a 3-D histogram with unit weight.
    ///
    /// # Errors
    ///
    /// Returns an error if the index or name has no histogram.
    pub fn fill_3d(&mut self, index: &I, name: &str, x: f64, y: f64, z: f64) -> Result<()> {
        self.fill_3d_weighted(index, name, x, y, z, 1.0)
    }

    /// Fill a 3-D histogram with an explicit weight.
    ///
    /// # Errors
    ///
    /// Returns an error if the index or name has no histogram.
    #[allow(clippy::too_many_arguments)]
    pub fn fill_3d_weighted(
        &mut self,
        index: &I,
        name: &str,
        x: f64,
        y: f64,
        z: f64,
        weight: f64,
    ) -> Result<()> {
        self.hists_3d
            .get_mut(index)
            .and_then(|row| row.get_mut(name))
            .ok_or_else(|| Error::UnknownHistogram(name.to_string()))?
            .fill_weighted(x, y, z, weight);
        Ok(())
    }

    /// Iterate over every generated 1-D histogram.
    pub fn iter_1d(&self) -> impl Iterator<Item = &Hist1D> {
        self.hists_1d.values().flat_map(HistMap::values)
    }

    /// Iterate over every generated 2-D histogram.
    pub fn iter_2d(&self) -> impl Iterator<Item = &Hist2D> {
        self.hists_2d.values().flat_map(HistMap::values)
    }

    /// Iterate over every generated 3-D histogram.
    pub fn iter_3d(&self) -> impl Iterator<Item = &Hist3D> {
        self.hists_3d.values().flat_map(HistMap::values)
    }

    /// Write every histogram to `<dir>/<name>.svg`.
    ///
    /// 1-D histograms are drawn as steps, 2-D as colored-cell maps.
    /// 3-D histograms have no graphical export and are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or file writing fails.
    pub fn save_svg<P: AsRef<Path>>(&self, dir: P) -> Result<()> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;

        for hist in self.iter_1d() {
            let mut canvas = Canvas::single(hist.name(), 640, 480)?;
            if let Some(pad) = canvas.pad_mut(0) {
                pad.draw_hist(hist.clone(), PlotStyle::new(), HistDrawMode::Steps);
            }
            canvas.save_svg(dir.join(format!("{}.svg", hist.name())))?;
        }
        for hist in self.iter_2d() {
            let mut canvas = Canvas::single(hist.name(), 640, 480)?;
            if let Some(pad) = canvas.pad_mut(0) {
                pad.draw_hist2d(hist.clone(), PlotStyle::new());
            }
            canvas.save_svg(dir.join(format!("{}.svg", hist.name())))?;
        }
        let skipped = self.iter_3d().count();
        if skipped > 0 {
            debug!(skipped, "3-d histograms have no graphical export");
        }
        Ok(())
    }
}
