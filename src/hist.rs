//! Histogram definitions and native histogram objects.
//!
//! A [`HistSpec`] consolidates the data needed to define a histogram
//! (name, titles, per-axis binnings) and builds the native [`Hist1D`],
//! [`Hist2D`], or [`Hist3D`] objects that store bin contents.

use crate::binning::{Axis, Binning};
use crate::error::{Error, Result};

/// A histogram definition.
///
/// Specs are cheap to clone and are stamped out repeatedly by a
/// [`HistBook`](crate::book::HistBook), which suffixes their names per
/// index cell.
#[derive(Debug, Clone, Default)]
pub struct HistSpec {
    name: String,
    title: String,
    axis_titles: [String; Axis::COUNT],
    bins: [Option<Binning>; Axis::COUNT],
}

impl HistSpec {
    /// Create a spec with a name and no binnings.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Set the histogram title.
    #[must_use]
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Set the title of one axis.
    #[must_use]
    pub fn with_axis_title(mut self, axis: Axis, title: &str) -> Self {
        self.axis_titles[axis.index()] = title.to_string();
        self
    }

    /// Set axis titles from a list in x, y, z order.
    ///
    /// Entries beyond the third are ignored.
    #[must_use]
    pub fn with_axis_titles(mut self, titles: &[&str]) -> Self {
        for (slot, title) in self.axis_titles.iter_mut().zip(titles.iter()) {
            *slot = (*title).to_string();
        }
        self
    }

    /// Set the binning of one axis.
    #[must_use]
    pub fn with_bins(mut self, axis: Axis, bins: Binning) -> Self {
        self.bins[axis.index()] = Some(bins);
        self
    }

    /// Set binnings from a list in x, y, z order.
    ///
    /// Entries beyond the third are ignored.
    #[must_use]
    pub fn with_axis_bins(mut self, bins: &[Binning]) -> Self {
        for (slot, binning) in self.bins.iter_mut().zip(bins.iter()) {
            *slot = Some(binning.clone());
        }
        self
    }

    /// Histogram name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Histogram title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Title of one axis.
    #[must_use]
    pub fn axis_title(&self, axis: Axis) -> &str {
        &self.axis_titles[axis.index()]
    }

    /// Binning of one axis, if set.
    #[must_use]
    pub fn bins(&self, axis: Axis) -> Option<&Binning> {
        self.bins[axis.index()].as_ref()
    }

    /// Rename the histogram.
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Replace the title.
    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    /// Prefix the histogram name.
    pub fn prepend_to_name(&mut self, prefix: &str) {
        self.name = format!("{prefix}{}", self.name);
    }

    /// Suffix the histogram name.
    pub fn append_to_name(&mut self, suffix: &str) {
        self.name.push_str(suffix);
    }

    /// Compound title: histogram title plus axis titles, semicolon-joined.
    #[must_use]
    pub fn full_title(&self) -> String {
        let mut title = self.title.clone();
        for axis_title in &self.axis_titles {
            title.push(';');
            title.push_str(axis_title);
        }
        title
    }

    fn require_bins(&self, axis: Axis) -> Result<Binning> {
        self.bins[axis.index()]
            .clone()
            .ok_or(Error::MissingBinning(axis))
    }

    /// Build a 1-D histogram.
    ///
    /// # Errors
    ///
    /// Returns an error if the x binning is not set.
    pub fn build_1d(&self) -> Result<Hist1D> {
        let binning = self.require_bins(Axis::X)?;
        let num = binning.num() as usize;
        Ok(Hist1D {
            name: self.name.clone(),
            title: self.title.clone(),
            axis_titles: self.axis_titles.clone(),
            binning,
            contents: vec![0.0; num],
            sumw2: None,
            underflow: 0.0,
            overflow: 0.0,
            entries: 0,
        })
    }

    /// Build a 2-D histogram.
    ///
    /// # Errors
    ///
    /// Returns an error if the x or y binning is not set.
    pub fn build_2d(&self) -> Result<Hist2D> {
        let x = self.require_bins(Axis::X)?;
        let y = self.require_bins(Axis::Y)?;
        let size = (x.num() as usize) * (y.num() as usize);
        Ok(Hist2D {
            name: self.name.clone(),
            title: self.title.clone(),
            axis_titles: self.axis_titles.clone(),
            x_binning: x,
            y_binning: y,
            contents: vec![0.0; size],
            sumw2: None,
            outside: 0.0,
            entries: 0,
        })
    }

    /// Build a 3-D histogram.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the three binnings is not set.
    pub fn build_3d(&self) -> Result<Hist3D> {
        let x = self.require_bins(Axis::X)?;
        let y = self.require_bins(Axis::Y)?;
        let z = self.require_bins(Axis::Z)?;
        let size = (x.num() as usize) * (y.num() as usize) * (z.num() as usize);
        Ok(Hist3D {
            name: self.name.clone(),
            title: self.title.clone(),
            axis_titles: self.axis_titles.clone(),
            x_binning: x,
            y_binning: y,
            z_binning: z,
            contents: vec![0.0; size],
            sumw2: None,
            outside: 0.0,
            entries: 0,
        })
    }
}

/// A filled 1-D histogram.
#[derive(Debug, Clone)]
pub struct Hist1D {
    name: String,
    title: String,
    axis_titles: [String; Axis::COUNT],
    binning: Binning,
    contents: Vec<f64>,
    sumw2: Option<Vec<f64>>,
    underflow: f64,
    overflow: f64,
    entries: u64,
}

impl Hist1D {
    /// Histogram name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Histogram title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Title of one axis.
    #[must_use]
    pub fn axis_title(&self, axis: Axis) -> &str {
        &self.axis_titles[axis.index()]
    }

    /// The x binning.
    #[must_use]
    pub fn binning(&self) -> &Binning {
        &self.binning
    }

    /// Number of bins.
    #[must_use]
    pub fn num_bins(&self) -> usize {
        self.contents.len()
    }

    /// Start tracking summed squared weights for bin errors.
    ///
    /// Existing contents seed the tracker, matching the behavior of
    /// enabling weight errors after some fills.
    pub fn enable_weight_errors(&mut self) {
        if self.sumw2.is_none() {
            self.sumw2 = Some(self.contents.clone());
        }
    }

    /// Fill with unit weight.
    pub fn fill(&mut self, x: f64) {
        self.fill_weighted(x, 1.0);
    }

    /// Fill with an explicit weight.
    ///
    /// Out-of-range values are counted in the under/overflow totals.
    pub fn fill_weighted(&mut self, x: f64, weight: f64) {
        self.entries += 1;
        match self.binning.find_bin(x) {
            Some(bin) => {
                self.contents[bin] += weight;
                if let Some(sumw2) = &mut self.sumw2 {
                    sumw2[bin] += weight * weight;
                }
            }
            None if x < self.binning.start() => self.underflow += weight,
            None => self.overflow += weight,
        }
    }

    /// Content of one bin, or `None` if out of range.
    #[must_use]
    pub fn bin_content(&self, bin: usize) -> Option<f64> {
        self.contents.get(bin).copied()
    }

    /// Error on one bin.
    ///
    /// With weight tracking enabled this is the square root of the summed
    /// squared weights; otherwise the square root of the content.
    #[must_use]
    pub fn bin_error(&self, bin: usize) -> Option<f64> {
        match &self.sumw2 {
            Some(sumw2) => sumw2.get(bin).map(|w| w.sqrt()),
            None => self.contents.get(bin).map(|c| c.abs().sqrt()),
        }
    }

    /// Sum of all in-range bin contents.
    #[must_use]
    pub fn integral(&self) -> f64 {
        self.contents.iter().sum()
    }

    /// Largest bin content.
    #[must_use]
    pub fn max_content(&self) -> f64 {
        self.contents.iter().copied().fold(0.0, f64::max)
    }

    /// Total weight below the first bin.
    #[must_use]
    pub const fn underflow(&self) -> f64 {
        self.underflow
    }

    /// Total weight above the last bin.
    #[must_use]
    pub const fn overflow(&self) -> f64 {
        self.overflow
    }

    /// Number of fill calls, in-range or not.
    #[must_use]
    pub const fn entries(&self) -> u64 {
        self.entries
    }
}

/// A filled 2-D histogram.
#[derive(Debug, Clone)]
pub struct Hist2D {
    name: String,
    title: String,
    axis_titles: [String; Axis::COUNT],
    x_binning: Binning,
    y_binning: Binning,
    contents: Vec<f64>,
    sumw2: Option<Vec<f64>>,
    outside: f64,
    entries: u64,
}

impl Hist2D {
    /// Histogram name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Histogram title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Title of one axis.
    #[must_use]
    pub fn axis_title(&self, axis: Axis) -> &str {
        &self.axis_titles[axis.index()]
    }

    /// The x binning.
    #[must_use]
    pub fn x_binning(&self) -> &Binning {
        &self.x_binning
    }

    /// The y binning.
    #[must_use]
    pub fn y_binning(&self) -> &Binning {
        &self.y_binning
    }

    /// Start tracking summed squared weights for bin errors.
    pub fn enable_weight_errors(&mut self) {
        if self.sumw2.is_none() {
            self.sumw2 = Some(self.contents.clone());
        }
    }

    fn slot(&self, ix: usize, iy: usize) -> usize {
        iy * (self.x_binning.num() as usize) + ix
    }

    /// Fill with unit weight.
    pub fn fill(&mut self, x: f64, y: f64) {
        self.fill_weighted(x, y, 1.0);
    }

    /// Fill with an explicit weight.
    ///
    /// Values outside either axis range are counted in a single
    /// out-of-range total.
    pub fn fill_weighted(&mut self, x: f64, y: f64, weight: f64) {
        self.entries += 1;
        match (self.x_binning.find_bin(x), self.y_binning.find_bin(y)) {
            (Some(ix), Some(iy)) => {
                let slot = self.slot(ix, iy);
                self.contents[slot] += weight;
                if let Some(sumw2) = &mut self.sumw2 {
                    sumw2[slot] += weight * weight;
                }
            }
            _ => self.outside += weight,
        }
    }

    /// Content of one bin, or `None` if out of range.
    #[must_use]
    pub fn bin_content(&self, ix: usize, iy: usize) -> Option<f64> {
        if ix >= self.x_binning.num() as usize || iy >= self.y_binning.num() as usize {
            return None;
        }
        self.contents.get(self.slot(ix, iy)).copied()
    }

    /// Error on one bin.
    #[must_use]
    pub fn bin_error(&self, ix: usize, iy: usize) -> Option<f64> {
        if ix >= self.x_binning.num() as usize || iy >= self.y_binning.num() as usize {
            return None;
        }
        let slot = self.slot(ix, iy);
        match &self.sumw2 {
            Some(sumw2) => sumw2.get(slot).map(|w| w.sqrt()),
            None => self.contents.get(slot).map(|c| c.abs().sqrt()),
        }
    }

    /// Sum of all in-range bin contents.
    #[must_use]
    pub fn integral(&self) -> f64 {
        self.contents.iter().sum()
    }

    /// Largest bin content.
    #[must_use]
    pub fn max_content(&self) -> f64 {
        self.contents.iter().copied().fold(0.0, f64::max)
    }

    /// Total weight that fell outside either axis range.
    #[must_use]
    pub const fn outside(&self) -> f64 {
        self.outside
    }

    /// Number of fill calls, in-range or not.
    #[must_use]
    pub const fn entries(&self) -> u64 {
        self.entries
    }
}

/// A filled 3-D histogram.
#[derive(Debug, Clone)]
pub struct Hist3D {
    name: String,
    title: String,
    axis_titles: [String; Axis::COUNT],
    x_binning: Binning,
    y_binning: Binning,
    z_binning: Binning,
    contents: Vec<f64>,
    sumw2: Option<Vec<f64>>,
    outside: f64,
    entries: u64,
}

impl Hist3D {
    /// Histogram name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Histogram title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Title of one axis.
    #[must_use]
    pub fn axis_title(&self, axis: Axis) -> &str {
        &self.axis_titles[axis.index()]
    }

    /// The x binning.
    #[must_use]
    pub fn x_binning(&self) -> &Binning {
        &self.x_binning
    }

    /// The y binning.
    #[must_use]
    pub fn y_binning(&self) -> &Binning {
        &self.y_binning
    }

    /// The z binning.
    #[must_use]
    pub fn z_binning(&self) -> &Binning {
        &self.z_binning
    }

    /// Start tracking summed squared weights for bin errors.
    pub fn enable_weight_errors(&mut self) {
        if self.sumw2.is_none() {
            self.sumw2 = Some(self.contents.clone());
        }
    }

    fn slot(&self, ix: usize, iy: usize, iz: usize) -> usize {
        let nx = self.x_binning.num() as usize;
        let ny = self.y_binning.num() as usize;
        (iz * ny + iy) * nx + ix
    }

    /// Fill with unit weight.
    pub fn fill(&mut self, x: f64, y: f64, z: f64) {
        self.fill_weighted(x, y, z, 1.0);
    }

    /// Fill with an explicit weight.
    pub fn fill_weighted(&mut self, x: f64, y: f64, z: f64, weight: f64) {
        self.entries += 1;
        match (
            self.x_binning.find_bin(x),
            self.y_binning.find_bin(y),
            self.z_binning.find_bin(z),
        ) {
            (Some(ix), Some(iy), Some(iz)) => {
                let slot = self.slot(ix, iy, iz);
                self.contents[slot] += weight;
                if let Some(sumw2) = &mut self.sumw2 {
                    sumw2[slot] += weight * weight;
                }
            }
            _ => self.outside += weight,
        }
    }

    /// Content of one bin, or `None` if out of range.
    #[must_use]
    pub fn bin_content(&self, ix: usize, iy: usize, iz: usize) -> Option<f64> {
        if ix >= self.x_binning.num() as usize
            || iy >= self.y_binning.num() as usize
            || iz >= self.z_binning.num() as usize
        {
            return None;
        }
        self.contents.get(self.slot(ix, iy, iz)).copied()
    }

    /// Error on one bin.
    #[must_use]
    pub fn bin_error(&self, ix: usize, iy: usize, iz: usize) -> Option<f64> {
        if ix >= self.x_binning.num() as usize
            || iy >= self.y_binning.num() as usize
            || iz >= self.z_binning.num() as usize
        {
            return None;
        }
        let slot = self.slot(ix, iy, iz);
        match &self.sumw2 {
            Some(sumw2) => sumw2.get(slot).map(|w| w.sqrt()),
            None => self.contents.get(slot).map(|c| c.abs().sqrt()),
        }
    }

    /// Sum of all in-range bin contents.
    #[must_use]
    pub fn integral(&self) -> f64 {
        self.contents.iter().sum()
    }

    /// Total weight that fell outside any axis range.
    #[must_use]
    pub const fn outside(&self) -> f64 {
        self.outside
    }

    /// Number of fill calls, in-range or not.
    #[must_use]
    pub const fn entries(&self) -> u64 {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn spec_1d() -> HistSpec {
        HistSpec::new("h_energy")
            .with_title("Energy")
            .with_axis_titles(&["E [GeV]", "counts"])
            .with_bins(Axis::X, Binning::uniform(10, 0.0, 10.0).unwrap())
    }

    #[test]
    fn test_spec_accessors() {
        let spec = spec_1d();
        assert_eq!(spec.name(), "h_energy");
        assert_eq!(spec.title(), "Energy");
        assert_eq!(spec.axis_title(Axis::X), "E [GeV]");
        assert_eq!(spec.axis_title(Axis::Z), "");
        assert!(spec.bins(Axis::X).is_some());
        assert!(spec.bins(Axis::Y).is_none());
    }

    #[test]
    fn test_spec_name_edits() {
        let mut spec = spec_1d();
        spec.prepend_to_name("pre_");
        spec.append_to_name("_post");
        assert_eq!(spec.name(), "pre_h_energy_post");
    }

    #[test]
    fn test_spec_full_title() {
        let spec = spec_1d();
        assert_eq!(spec.full_title(), "Energy;E [GeV];counts;");
    }

    #[test]
    fn test_build_1d_requires_x_bins() {
        let spec = HistSpec::new("h");
        assert!(matches!(
            spec.build_1d(),
            Err(Error::MissingBinning(Axis::X))
        ));
    }

    #[test]
    fn test_build_2d_requires_y_bins() {
        let spec = spec_1d();
        assert!(matches!(
            spec.build_2d(),
            Err(Error::MissingBinning(Axis::Y))
        ));
    }

    #[test]
    fn test_hist1d_fill_and_content() {
        let mut h = spec_1d().build_1d().unwrap();
        h.fill(0.5);
        h.fill(0.5);
        h.fill(9.5);
        assert_relative_eq!(h.bin_content(0).unwrap(), 2.0);
        assert_relative_eq!(h.bin_content(9).unwrap(), 1.0);
        assert_relative_eq!(h.integral(), 3.0);
        assert_eq!(h.entries(), 3);
    }

    #[test]
    fn test_hist1d_under_overflow() {
        let mut h = spec_1d().build_1d().unwrap();
        h.fill(-1.0);
        h.fill_weighted(11.0, 2.0);
        assert_relative_eq!(h.underflow(), 1.0);
        assert_relative_eq!(h.overflow(), 2.0);
        assert_relative_eq!(h.integral(), 0.0);
        assert_eq!(h.entries(), 2);
    }

    #[test]
    fn test_hist1d_errors_without_tracking() {
        let mut h = spec_1d().build_1d().unwrap();
        h.fill(0.5);
        h.fill(0.5);
        h.fill(0.5);
        h.fill(0.5);
        assert_relative_eq!(h.bin_error(0).unwrap(), 2.0);
    }

    #[test]
    fn test_hist1d_weight_errors() {
        let mut h = spec_1d().build_1d().unwrap();
        h.enable_weight_errors();
        h.fill_weighted(0.5, 2.0);
        h.fill_weighted(0.5, 2.0);
        // content 4, sumw2 8
        assert_relative_eq!(h.bin_content(0).unwrap(), 4.0);
        assert_relative_eq!(h.bin_error(0).unwrap(), 8.0_f64.sqrt());
    }

    #[test]
    fn test_hist1d_max_content() {
        let mut h = spec_1d().build_1d().unwrap();
        h.fill(0.5);
        h.fill(1.5);
        h.fill(1.5);
        assert_relative_eq!(h.max_content(), 2.0);
    }

    #[test]
    fn test_hist2d_fill() {
        let spec = HistSpec::new("h2").with_axis_bins(&[
            Binning::uniform(2, 0.0, 2.0).unwrap(),
            Binning::uniform(3, 0.0, 3.0).unwrap(),
        ]);
        let mut h = spec.build_2d().unwrap();
        h.fill(0.5, 2.5);
        h.fill(1.5, 0.5);
        h.fill(5.0, 0.5);
        assert_relative_eq!(h.bin_content(0, 2).unwrap(), 1.0);
        assert_relative_eq!(h.bin_content(1, 0).unwrap(), 1.0);
        assert_relative_eq!(h.outside(), 1.0);
        assert_relative_eq!(h.integral(), 2.0);
        assert!(h.bin_content(2, 0).is_none());
    }

    #[test]
    fn test_hist3d_fill() {
        let spec = HistSpec::new("h3").with_axis_bins(&[
            Binning::uniform(2, 0.0, 2.0).unwrap(),
            Binning::uniform(2, 0.0, 2.0).unwrap(),
            Binning::uniform(2, 0.0, 2.0).unwrap(),
        ]);
        let mut h = spec.build_3d().unwrap();
        h.fill(0.5, 1.5, 0.5);
        h.fill(0.5, 1.5, 0.5);
        assert_relative_eq!(h.bin_content(0, 1, 0).unwrap(), 2.0);
        assert_relative_eq!(h.bin_error(0, 1, 0).unwrap(), 2.0_f64.sqrt());
        assert_relative_eq!(h.integral(), 2.0);
        assert_eq!(h.entries(), 2);
        assert!(h.bin_content(2, 0, 0).is_none());
    }

    #[test]
    fn test_spec_extra_bins_ignored() {
        let bins = vec![
            Binning::uniform(2, 0.0, 2.0).unwrap(),
            Binning::uniform(2, 0.0, 2.0).unwrap(),
            Binning::uniform(2, 0.0, 2.0).unwrap(),
            Binning::uniform(9, 0.0, 9.0).unwrap(),
        ];
        let spec = HistSpec::new("h").with_axis_bins(&bins);
        assert_eq!(spec.bins(Axis::Z).unwrap().num(), 2);
    }
}
