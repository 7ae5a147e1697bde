//! Reading helper.
//!
//! Books weights files for the configured methods and evaluates every
//! booked method on a row of input values, collecting the regression
//! outputs in named slots.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{Error, Result};
use crate::model::variables::UNSET;
use crate::model::{
    compress_list, weights_file_path, MethodWeights, ModelParameters, RowBuffer, VariableSet,
};

/// Bookkeeping helper for model reading and evaluation.
///
/// Output slots are laid out at construction: first every target, then
/// one `<target>_<method>` slot for every booked method and target.
/// The layout never changes afterwards; methods whose weights are not
/// booked leave their slots at the unset sentinel.
#[derive(Debug, Clone, Default)]
pub struct Reader {
    vars: VariableSet,
    options: Vec<String>,
    booked: Vec<Option<MethodWeights>>,
    output_names: Vec<String>,
    output_index: HashMap<String, usize>,
    output_values: Vec<f32>,
}

impl Reader {
    /// Create a reader from parameters.
    #[must_use]
    pub fn new(params: &ModelParameters) -> Self {
        let vars = VariableSet::from_lists(&params.variables, &params.methods);

        let mut output_names = Vec::new();
        for target in vars.targets() {
            output_names.push(target.clone());
        }
        for method in vars.methods() {
            for target in vars.targets() {
                output_names.push(format!("{target}_{method}"));
            }
        }
        let output_index = output_names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();

        Self {
            booked: vec![None; vars.methods().len()],
            output_values: vec![UNSET; output_names.len()],
            vars,
            options: params.reading_options.clone(),
            output_names,
            output_index,
        }
    }

    /// The variable bookkeeping.
    #[must_use]
    pub fn variables(&self) -> &VariableSet {
        &self.vars
    }

    /// The reading option list.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Replace the reading option list.
    pub fn set_options(&mut self, options: Vec<String>) {
        self.options = options;
    }

    /// Compressed reading options.
    #[must_use]
    pub fn compress_options(&self) -> String {
        compress_list(&self.options)
    }

    /// Names of all output slots, targets first.
    #[must_use]
    pub fn outputs(&self) -> &[String] {
        &self.output_names
    }

    /// Value of one output slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is not an output slot.
    pub fn output(&self, name: &str) -> Result<f32> {
        self.output_index
            .get(name)
            .map(|&slot| self.output_values[slot])
            .ok_or_else(|| Error::UnknownVariable(name.to_string()))
    }

    /// Reset every output slot to the unset sentinel.
    pub fn reset_values(&mut self) {
        self.output_values.fill(UNSET);
    }

    /// Number of methods with booked weights.
    #[must_use]
    pub fn num_booked(&self) -> usize {
        self.booked.iter().filter(|b| b.is_some()).count()
    }

    fn validate(&self, bundle: &MethodWeights, origin: &Path) -> Result<()> {
        if bundle.heads.len() != self.vars.targets().len() {
            return Err(Error::MalformedWeights(format!(
                "'{}' has {} heads for {} targets",
                origin.display(),
                bundle.heads.len(),
                self.vars.targets().len()
            )));
        }
        Ok(())
    }

    /// Book methods from a weights directory.
    ///
    /// For each configured method, looks for
    /// `<dir>/weights/<tag>_<method>.weights.json`. A missing file logs
    /// a warning and leaves the method unbooked.
    ///
    /// Returns the number of methods booked.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing weights file is malformed.
    pub fn book_weights_dir(&mut self, dir: &Path, tag: &str) -> Result<usize> {
        for (slot, method) in self.vars.methods().iter().enumerate() {
            let path = weights_file_path(dir, tag, method);
            if !path.exists() {
                warn!(
                    path = %path.display(),
                    method = %method,
                    "weights file does not exist; not booking method"
                );
                continue;
            }
            let bundle = MethodWeights::load(&path)?;
            self.validate(&bundle, &path)?;
            self.booked[slot] = Some(bundle);
        }
        Ok(self.num_booked())
    }

    /// Book methods from an explicit file list.
    ///
    /// The list must match the method list in length and order. A
    /// missing file logs a warning and leaves that method unbooked.
    ///
    /// Returns the number of methods booked.
    ///
    /// # Errors
    ///
    /// Returns an error if the list length does not match the method
    /// list, or an existing file is malformed.
    pub fn book_weights_files(&mut self, files: &[PathBuf]) -> Result<usize> {
        if files.len() != self.vars.methods().len() {
            return Err(Error::LengthMismatch {
                expected: self.vars.methods().len(),
                actual: files.len(),
            });
        }
        for (slot, path) in files.iter().enumerate() {
            if !path.exists() {
                warn!(
                    path = %path.display(),
                    method = %self.vars.methods()[slot],
                    "weights file does not exist; not booking method"
                );
                continue;
            }
            let bundle = MethodWeights::load(path)?;
            self.validate(&bundle, path)?;
            self.booked[slot] = Some(bundle);
        }
        Ok(self.num_booked())
    }

    /// Evaluate every booked method on a row.
    ///
    /// Fills `<target>_<method>` slots with predictions and copies the
    /// row's target values into the plain target slots.
    ///
    /// # Errors
    ///
    /// Returns an error if the row is missing a training input or
    /// target, or a weights head does not match the input count.
    pub fn evaluate(&mut self, row: &RowBuffer) -> Result<()> {
        let mut inputs = Vec::with_capacity(self.vars.trainers().len());
        for name in self.vars.trainers() {
            inputs.push(row.get(name)?);
        }

        for (slot, method) in self.vars.methods().iter().enumerate() {
            let Some(bundle) = &self.booked[slot] else {
                continue;
            };
            for (head, target) in bundle.heads.iter().zip(self.vars.targets()) {
                let value = head.predict(&inputs)?;
                let name = format!("{target}_{method}");
                if let Some(&out) = self.output_index.get(&name) {
                    self.output_values[out] = value;
                }
            }
        }

        for target in self.vars.targets() {
            if let Some(&out) = self.output_index.get(target.as_str()) {
                self.output_values[out] = row.get(target)?;
            }
        }
        Ok(())
    }
}
