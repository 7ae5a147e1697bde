//! On-disk weights format.
//!
//! A weights file holds one linear head per regression target, stored
//! as JSON under `<dir>/weights/<tag>_<method>.weights.json`.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A linear regression head: weight vector plus bias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearWeights {
    /// One weight per training input, in training-input order.
    pub weights: Vec<f32>,
    /// Additive bias.
    pub bias: f32,
}

impl LinearWeights {
    /// Create a head from weights and bias.
    #[must_use]
    pub fn new(weights: Vec<f32>, bias: f32) -> Self {
        Self { weights, bias }
    }

    /// Apply the head to an input vector.
    ///
    /// # Errors
    ///
    /// Returns an error if the input length does not match the weight
    /// vector.
    pub fn predict(&self, inputs: &[f32]) -> Result<f32> {
        if inputs.len() != self.weights.len() {
            return Err(Error::LengthMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }
        let dot: f32 = self
            .weights
            .iter()
            .zip(inputs.iter())
            .map(|(w, x)| w * x)
            .sum();
        Ok(dot + self.bias)
    }
}

/// The contents of one method's weights file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodWeights {
    /// One head per regression target, in target order.
    pub heads: Vec<LinearWeights>,
}

impl MethodWeights {
    /// Create a weights bundle.
    #[must_use]
    pub fn new(heads: Vec<LinearWeights>) -> Self {
        Self { heads }
    }

    /// Write to a JSON file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation, file creation, or
    /// serialization fails.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }

    /// Read from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or malformed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::MissingWeights(path.display().to_string()));
        }
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}

/// The conventional weights-file path for a method.
///
/// Layout: `<dir>/weights/<tag>_<method>.weights.json`.
#[must_use]
pub fn weights_file_path(dir: &Path, tag: &str, method: &str) -> PathBuf {
    dir.join("weights")
        .join(format!("{tag}_{method}.weights.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_predict() {
        let head = LinearWeights::new(vec![2.0, -1.0], 0.5);
        let value = head.predict(&[3.0, 4.0]).unwrap();
        assert_relative_eq!(value, 2.5);
    }

    #[test]
    fn test_predict_length_mismatch() {
        let head = LinearWeights::new(vec![2.0, -1.0], 0.0);
        assert!(matches!(
            head.predict(&[1.0]),
            Err(Error::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = weights_file_path(dir.path(), "calib", "LD");

        let bundle = MethodWeights::new(vec![
            LinearWeights::new(vec![1.0, 2.0], 0.1),
            LinearWeights::new(vec![-1.0, 0.5], -0.2),
        ]);
        bundle.save(&path).unwrap();

        let loaded = MethodWeights::load(&path).unwrap();
        assert_eq!(loaded, bundle);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = MethodWeights::load(dir.path().join("nope.weights.json"));
        assert!(matches!(err, Err(Error::MissingWeights(_))));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.weights.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            MethodWeights::load(&path),
            Err(Error::WeightsFormat(_))
        ));
    }

    #[test]
    fn test_weights_file_path_layout() {
        let path = weights_file_path(Path::new("/tmp/out"), "calib", "BDTG");
        assert_eq!(
            path,
            PathBuf::from("/tmp/out/weights/calib_BDTG.weights.json")
        );
    }
}
