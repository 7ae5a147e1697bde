//! Data-to-pixel axis mapping.
//!
//! An [`AxisMapper`] carries one axis of a pad: it maps a data interval
//! onto a pixel interval, linearly or logarithmically, and produces
//! tick positions for frame drawing.

use crate::error::{Error, Result};

/// How an axis maps data to pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisScale {
    /// Linear mapping.
    #[default]
    Linear,
    /// Base-10 logarithmic mapping.
    Log,
}

/// Mapping of a data interval onto a pixel interval for one axis.
#[derive(Debug, Clone, Copy)]
pub struct AxisMapper {
    domain: (f64, f64),
    range: (f64, f64),
    scale: AxisScale,
}

impl AxisMapper {
    /// Create a linear mapper.
    ///
    /// # Errors
    ///
    /// Returns an error if the domain is degenerate.
    pub fn linear(domain: (f64, f64), range: (f64, f64)) -> Result<Self> {
        if (domain.1 - domain.0).abs() < f64::EPSILON {
            return Err(Error::InvalidGeometry(
                "axis domain must not be degenerate".to_string(),
            ));
        }
        Ok(Self {
            domain,
            range,
            scale: AxisScale::Linear,
        })
    }

    /// Create a base-10 logarithmic mapper.
    ///
    /// # Errors
    ///
    /// Returns an error if the domain is not strictly positive or is
    /// degenerate.
    pub fn log(domain: (f64, f64), range: (f64, f64)) -> Result<Self> {
        if domain.0 <= 0.0 || domain.1 <= 0.0 {
            return Err(Error::LogDomain {
                start: domain.0,
                stop: domain.1,
            });
        }
        if (domain.1 - domain.0).abs() < f64::EPSILON {
            return Err(Error::InvalidGeometry(
                "axis domain must not be degenerate".to_string(),
            ));
        }
        Ok(Self {
            domain,
            range,
            scale: AxisScale::Log,
        })
    }

    /// Create a mapper for the given scale kind.
    ///
    /// # Errors
    ///
    /// Propagates the validation of [`AxisMapper::linear`] or
    /// [`AxisMapper::log`].
    pub fn with_scale(scale: AxisScale, domain: (f64, f64), range: (f64, f64)) -> Result<Self> {
        match scale {
            AxisScale::Linear => Self::linear(domain, range),
            AxisScale::Log => Self::log(domain, range),
        }
    }

    /// The data interval.
    #[must_use]
    pub const fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// The pixel interval.
    #[must_use]
    pub const fn range(&self) -> (f64, f64) {
        self.range
    }

    /// The scale kind.
    #[must_use]
    pub const fn scale(&self) -> AxisScale {
        self.scale
    }

    fn normalize(&self, value: f64) -> f64 {
        match self.scale {
            AxisScale::Linear => (value - self.domain.0) / (self.domain.1 - self.domain.0),
            AxisScale::Log => {
                let v = value.max(f64::MIN_POSITIVE).log10();
                let lo = self.domain.0.log10();
                let hi = self.domain.1.log10();
                (v - lo) / (hi - lo)
            }
        }
    }

    /// Map a data value to a pixel coordinate.
    #[must_use]
    pub fn map(&self, value: f64) -> f64 {
        let t = self.normalize(value);
        self.range.0 + t * (self.range.1 - self.range.0)
    }

    /// Map a pixel coordinate back to a data value.
    #[must_use]
    pub fn invert(&self, pixel: f64) -> f64 {
        let t = (pixel - self.range.0) / (self.range.1 - self.range.0);
        match self.scale {
            AxisScale::Linear => self.domain.0 + t * (self.domain.1 - self.domain.0),
            AxisScale::Log => {
                let lo = self.domain.0.log10();
                let hi = self.domain.1.log10();
                10.0_f64.powf(lo + t * (hi - lo))
            }
        }
    }

    /// Tick positions in data coordinates.
    ///
    /// Linear axes get `count` evenly spaced ticks including both ends;
    /// log axes get one tick per power of ten inside the domain.
    #[must_use]
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        match self.scale {
            AxisScale::Linear => {
                let n = count.max(2);
                (0..n)
                    .map(|i| {
                        let t = i as f64 / (n - 1) as f64;
                        self.domain.0 + t * (self.domain.1 - self.domain.0)
                    })
                    .collect()
            }
            AxisScale::Log => {
                let lo = self.domain.0.log10().ceil() as i32;
                let hi = self.domain.1.log10().floor() as i32;
                (lo..=hi).map(|p| 10.0_f64.powi(p)).collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_map() {
        let m = AxisMapper::linear((0.0, 10.0), (0.0, 100.0)).unwrap();
        assert_relative_eq!(m.map(0.0), 0.0);
        assert_relative_eq!(m.map(5.0), 50.0);
        assert_relative_eq!(m.map(10.0), 100.0);
    }

    #[test]
    fn test_linear_map_inverted_range() {
        // y axes grow downward in pixel space
        let m = AxisMapper::linear((0.0, 10.0), (100.0, 0.0)).unwrap();
        assert_relative_eq!(m.map(0.0), 100.0);
        assert_relative_eq!(m.map(10.0), 0.0);
    }

    #[test]
    fn test_linear_invert_roundtrip() {
        let m = AxisMapper::linear((-5.0, 5.0), (0.0, 200.0)).unwrap();
        assert_relative_eq!(m.invert(m.map(2.5)), 2.5, epsilon = 1e-9);
    }

    #[test]
    fn test_linear_degenerate_domain() {
        assert!(AxisMapper::linear((3.0, 3.0), (0.0, 1.0)).is_err());
    }

    #[test]
    fn test_log_map_decades() {
        let m = AxisMapper::log((1.0, 1000.0), (0.0, 3.0)).unwrap();
        assert_relative_eq!(m.map(1.0), 0.0, epsilon = 1e-9);
        assert_relative_eq!(m.map(10.0), 1.0, epsilon = 1e-9);
        assert_relative_eq!(m.map(100.0), 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_log_rejects_nonpositive_domain() {
        assert!(matches!(
            AxisMapper::log((0.0, 10.0), (0.0, 1.0)),
            Err(Error::LogDomain { .. })
        ));
        assert!(AxisMapper::log((-1.0, 10.0), (0.0, 1.0)).is_err());
    }

    #[test]
    fn test_log_invert_roundtrip() {
        let m = AxisMapper::log((1.0, 1000.0), (0.0, 300.0)).unwrap();
        assert_relative_eq!(m.invert(m.map(50.0)), 50.0, epsilon = 1e-9);
    }

    #[test]
    fn test_with_scale_dispatch() {
        let lin = AxisMapper::with_scale(AxisScale::Linear, (0.0, 1.0), (0.0, 10.0)).unwrap();
        assert_eq!(lin.scale(), AxisScale::Linear);
        let log = AxisMapper::with_scale(AxisScale::Log, (1.0, 10.0), (0.0, 10.0)).unwrap();
        assert_eq!(log.scale(), AxisScale::Log);
    }

    #[test]
    fn test_linear_ticks() {
        let m = AxisMapper::linear((0.0, 10.0), (0.0, 1.0)).unwrap();
        let ticks = m.ticks(5);
        assert_eq!(ticks.len(), 5);
        assert_relative_eq!(ticks[0], 0.0);
        assert_relative_eq!(ticks[4], 10.0);
    }

    #[test]
    fn test_log_ticks_per_decade() {
        let m = AxisMapper::log((1.0, 1000.0), (0.0, 1.0)).unwrap();
        let ticks = m.ticks(10);
        assert_eq!(ticks.len(), 4);
        assert_relative_eq!(ticks[1], 10.0);
    }

    #[test]
    fn test_log_map_clamps_tiny_values() {
        let m = AxisMapper::log((1.0, 100.0), (0.0, 1.0)).unwrap();
        // no panic, maps far below the range start
        assert!(m.map(0.0) < 0.0);
    }
}
