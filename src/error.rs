//! Error types for recuento operations.

use std::io;
use thiserror::Error;

use crate::binning::Axis;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in recuento operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Weights (de)serialization error.
    #[error("weights serialization error: {0}")]
    WeightsFormat(#[from] serde_json::Error),

    /// A binning was requested with zero bins.
    #[error("bin count must be positive")]
    ZeroBins,

    /// Range bounds are out of order.
    #[error("inverted range: start {start} > stop {stop}")]
    InvertedRange {
        /// Low edge of the range.
        start: f64,
        /// High edge of the range.
        stop: f64,
    },

    /// An explicit edge list is too short or not strictly increasing.
    #[error("invalid bin edges: {0}")]
    InvalidEdges(String),

    /// Logarithmic binning or axis over a non-positive range.
    #[error("log range must be positive: ({start}, {stop})")]
    LogDomain {
        /// Low edge of the range.
        start: f64,
        /// High edge of the range.
        stop: f64,
    },

    /// Invalid logarithm base.
    #[error("log base must be positive and not 1, got {0}")]
    LogBase(f64),

    /// A binning name is not present in the registry.
    #[error("unknown binning: '{0}'")]
    UnknownBinning(String),

    /// A binning name is already present in the registry.
    #[error("binning '{0}' already registered")]
    DuplicateBinning(String),

    /// A histogram spec is missing the binning for a required axis.
    #[error("no binning set for {0} axis")]
    MissingBinning(Axis),

    /// A histogram name is not present in a book.
    #[error("unknown histogram: '{0}'")]
    UnknownHistogram(String),

    /// A variable name is not present in a buffer or variable set.
    #[error("unknown variable: '{0}'")]
    UnknownVariable(String),

    /// A method name maps to no known model kind.
    #[error("unknown method: '{0}'")]
    UnknownMethod(String),

    /// Mismatched lengths between two collections that must align.
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Expected number of elements.
        expected: usize,
        /// Number of elements provided.
        actual: usize,
    },

    /// Empty data provided where non-empty is required.
    #[error("empty data provided")]
    EmptyData,

    /// Invalid dimensions for a surface or canvas.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Invalid pad or legend geometry.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// A weights file is missing on disk.
    #[error("weights file not found: '{0}'")]
    MissingWeights(String),

    /// A weights file exists but does not match the booked configuration.
    #[error("malformed weights: {0}")]
    MalformedWeights(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvertedRange {
            start: 2.0,
            stop: 1.0,
        };
        assert!(err.to_string().contains("inverted range"));
    }

    #[test]
    fn test_unknown_binning_names_offender() {
        let err = Error::UnknownBinning("energy".to_string());
        assert!(err.to_string().contains("energy"));
    }

    #[test]
    fn test_length_mismatch_display() {
        let err = Error::LengthMismatch {
            expected: 3,
            actual: 5,
        };
        assert!(err.to_string().contains('3'));
        assert!(err.to_string().contains('5'));
    }

    #[test]
    fn test_missing_binning_names_axis() {
        let err = Error::MissingBinning(Axis::Y);
        assert!(err.to_string().contains('y'));
    }
}
