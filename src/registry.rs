//! Centralized database of named binnings.

use std::collections::BTreeMap;

use crate::binning::Binning;
use crate::error::{Error, Result};

/// A bin database: named binnings shared across many histogram specs.
///
/// Centralizes the binning for recurring quantities so every histogram
/// of, say, an energy ends up with identical bins. Entries can be added
/// or updated on the fly, but adding an existing name and updating a
/// missing one are both errors.
#[derive(Debug, Clone, Default)]
pub struct BinRegistry {
    bins: BTreeMap<String, Binning>,
}

impl BinRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded with stock kinematic binnings.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        let defaults = [
            ("number", Binning::uniform(202, -1.5, 200.5)),
            ("fraction", Binning::uniform(104, -0.1, 5.1)),
            ("energy", Binning::uniform(202, -1.0, 100.0)),
            ("eta", Binning::uniform(30, -1.5, 1.5)),
            ("phi", Binning::uniform(320, -3.15, 3.15)),
        ];
        for (name, binning) in defaults {
            if let Ok(binning) = binning {
                registry.bins.insert(name.to_string(), binning);
            }
        }
        registry
    }

    /// Add a new binning.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is already registered.
    pub fn add(&mut self, name: &str, binning: Binning) -> Result<()> {
        if self.bins.contains_key(name) {
            return Err(Error::DuplicateBinning(name.to_string()));
        }
        self.bins.insert(name.to_string(), binning);
        Ok(())
    }

    /// Replace an existing binning.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is not registered.
    pub fn set(&mut self, name: &str, binning: Binning) -> Result<()> {
        match self.bins.get_mut(name) {
            Some(slot) => {
                *slot = binning;
                Ok(())
            }
            None => Err(Error::UnknownBinning(name.to_string())),
        }
    }

    /// Look up a binning.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is not registered.
    pub fn get(&self, name: &str) -> Result<&Binning> {
        self.bins
            .get(name)
            .ok_or_else(|| Error::UnknownBinning(name.to_string()))
    }

    /// Whether a name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.bins.contains_key(name)
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.bins.keys().map(String::as_str).collect()
    }

    /// Iterate over `(name, binning)` pairs, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Binning)> {
        self.bins.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of registered binnings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_registry_add_get() {
        let mut reg = BinRegistry::new();
        reg.add("pt", Binning::uniform(50, 0.0, 100.0).unwrap())
            .unwrap();
        assert!(reg.contains("pt"));
        assert_eq!(reg.get("pt").unwrap().num(), 50);
    }

    #[test]
    fn test_registry_add_duplicate_fails() {
        let mut reg = BinRegistry::new();
        reg.add("pt", Binning::uniform(50, 0.0, 100.0).unwrap())
            .unwrap();
        let err = reg.add("pt", Binning::uniform(10, 0.0, 1.0).unwrap());
        assert!(matches!(err, Err(Error::DuplicateBinning(_))));
    }

    #[test]
    fn test_registry_set_updates() {
        let mut reg = BinRegistry::new();
        reg.add("pt", Binning::uniform(50, 0.0, 100.0).unwrap())
            .unwrap();
        reg.set("pt", Binning::uniform(25, 0.0, 50.0).unwrap())
            .unwrap();
        assert_eq!(reg.get("pt").unwrap().num(), 25);
    }

    #[test]
    fn test_registry_set_missing_fails() {
        let mut reg = BinRegistry::new();
        let err = reg.set("pt", Binning::uniform(10, 0.0, 1.0).unwrap());
        assert!(matches!(err, Err(Error::UnknownBinning(_))));
    }

    #[test]
    fn test_registry_get_missing_fails() {
        let reg = BinRegistry::new();
        assert!(matches!(reg.get("pt"), Err(Error::UnknownBinning(_))));
    }

    #[test]
    fn test_registry_defaults() {
        let reg = BinRegistry::with_defaults();
        assert_eq!(reg.len(), 5);
        assert!(reg.contains("energy"));
        assert!(reg.contains("eta"));
        let eta = reg.get("eta").unwrap();
        assert_eq!(eta.num(), 30);
        assert_relative_eq!(eta.start(), -1.5);
        assert_relative_eq!(eta.stop(), 1.5);
    }

    #[test]
    fn test_registry_names_sorted() {
        let reg = BinRegistry::with_defaults();
        let names = reg.names();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_registry_iter() {
        let reg = BinRegistry::with_defaults();
        assert_eq!(reg.iter().count(), reg.len());
    }
}
