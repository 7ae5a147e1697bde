//! Training helper.
//!
//! Assembles everything an external training engine needs: variable
//! roles, booked methods with resolved algorithm kinds, and option
//! lists. Exports fitted weights in the layout the reader expects.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::model::{
    compress_list, method_kind, weights_file_path, MethodWeights, ModelKind, ModelParameters,
    VariableSet,
};

/// A method booked for training.
#[derive(Debug, Clone, PartialEq)]
pub struct BookedMethod {
    /// Method name.
    pub name: String,
    /// Resolved algorithm family.
    pub kind: ModelKind,
    /// Option string handed to the engine.
    pub options: String,
}

/// Everything an external engine needs to run a training.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingPlan {
    /// Regression targets.
    pub targets: Vec<String>,
    /// Training inputs.
    pub variables: Vec<String>,
    /// Spectators to carry through, if enabled.
    pub spectators: Vec<String>,
    /// Booked methods.
    pub methods: Vec<BookedMethod>,
    /// Compressed general options.
    pub factory_options: String,
    /// Compressed training options.
    pub training_options: String,
}

/// Bookkeeping helper for model training.
#[derive(Debug, Clone, Default)]
pub struct Trainer {
    vars: VariableSet,
    add_spectators: bool,
    factory_options: Vec<String>,
    training_options: Vec<String>,
}

impl Trainer {
    /// Create a trainer from parameters.
    #[must_use]
    pub fn new(params: &ModelParameters) -> Self {
        Self {
            vars: VariableSet::from_lists(&params.variables, &params.methods),
            add_spectators: params.add_spectators,
            factory_options: params.factory_options.clone(),
            training_options: params.training_options.clone(),
        }
    }

    /// The variable bookkeeping.
    #[must_use]
    pub fn variables(&self) -> &VariableSet {
        &self.vars
    }

    /// Replace the general option list.
    pub fn set_factory_options(&mut self, options: Vec<String>) {
        self.factory_options = options;
    }

    /// Replace the training option list.
    pub fn set_training_options(&mut self, options: Vec<String>) {
        self.training_options = options;
    }

    /// Compressed general options.
    #[must_use]
    pub fn compress_factory_options(&self) -> String {
        compress_list(&self.factory_options)
    }

    /// Compressed training options.
    #[must_use]
    pub fn compress_training_options(&self) -> String {
        compress_list(&self.training_options)
    }

    /// Assemble the training plan.
    ///
    /// Every booked method is resolved to its algorithm family so the
    /// engine never has to parse method names.
    ///
    /// # Errors
    ///
    /// Returns an error if a method name maps to no known algorithm.
    pub fn training_plan(&self) -> Result<TrainingPlan> {
        let mut methods = Vec::with_capacity(self.vars.methods().len());
        for name in self.vars.methods() {
            let kind =
                method_kind(name).ok_or_else(|| Error::UnknownMethod(name.to_string()))?;
            methods.push(BookedMethod {
                name: name.clone(),
                kind,
                options: self
                    .vars
                    .method_options(name)
                    .unwrap_or_default()
                    .to_string(),
            });
        }

        Ok(TrainingPlan {
            targets: self.vars.targets().to_vec(),
            variables: self.vars.trainers().to_vec(),
            spectators: if self.add_spectators {
                self.vars.watchers().to_vec()
            } else {
                Vec::new()
            },
            methods,
            factory_options: self.compress_factory_options(),
            training_options: self.compress_training_options(),
        })
    }

    /// Write fitted weights for a method into the conventional layout.
    ///
    /// The bundle must carry one head per target, each sized to the
    /// training-input count.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundle shape does not match the booked
    /// variables or the file cannot be written.
    pub fn export_weights(
        &self,
        dir: &Path,
        tag: &str,
        method: &str,
        weights: &MethodWeights,
    ) -> Result<PathBuf> {
        if weights.heads.len() != self.vars.targets().len() {
            return Err(Error::LengthMismatch {
                expected: self.vars.targets().len(),
                actual: weights.heads.len(),
            });
        }
        for head in &weights.heads {
            if head.weights.len() != self.vars.trainers().len() {
                return Err(Error::LengthMismatch {
                    expected: self.vars.trainers().len(),
                    actual: head.weights.len(),
                });
            }
        }
        let path = weights_file_path(dir, tag, method);
        weights.save(&path)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LinearWeights, VariableRole};

    fn params() -> ModelParameters {
        ModelParameters {
            variables: vec![
                (VariableRole::Train, "pt".to_string()),
                (VariableRole::Train, "eta".to_string()),
                (VariableRole::Target, "energy".to_string()),
                (VariableRole::Watch, "run".to_string()),
            ],
            methods: vec![
                ("LD".to_string(), "V".to_string()),
                ("BDTG".to_string(), "NTrees=100".to_string()),
            ],
            factory_options: vec!["Silent".to_string(), "AnalysisType=Regression".to_string()],
            training_options: vec!["SplitMode=Random".to_string()],
            add_spectators: true,
            ..ModelParameters::default()
        }
    }

    #[test]
    fn test_training_plan() {
        let plan = Trainer::new(&params()).training_plan().unwrap();
        assert_eq!(plan.targets, ["energy".to_string()]);
        assert_eq!(plan.variables, ["pt".to_string(), "eta".to_string()]);
        assert_eq!(plan.spectators, ["run".to_string()]);
        assert_eq!(plan.methods.len(), 2);
        assert_eq!(plan.methods[1].kind, ModelKind::BoostedTree);
        assert_eq!(plan.methods[1].options, "NTrees=100");
        assert_eq!(plan.factory_options, "Silent:AnalysisType=Regression");
        assert_eq!(plan.training_options, "SplitMode=Random");
    }

    #[test]
    fn test_training_plan_skips_spectators_when_disabled() {
        let mut p = params();
        p.add_spectators = false;
        let plan = Trainer::new(&p).training_plan().unwrap();
        assert!(plan.spectators.is_empty());
    }

    #[test]
    fn test_training_plan_unknown_method() {
        let mut p = params();
        p.methods.push(("MYSTERY".to_string(), String::new()));
        assert!(matches!(
            Trainer::new(&p).training_plan(),
            Err(Error::UnknownMethod(_))
        ));
    }

    #[test]
    fn test_export_weights() {
        let dir = tempfile::tempdir().unwrap();
        let trainer = Trainer::new(&params());
        let bundle = MethodWeights::new(vec![LinearWeights::new(vec![0.5, 1.5], 0.0)]);
        let path = trainer
            .export_weights(dir.path(), "calib", "LD", &bundle)
            .unwrap();
        assert!(path.exists());
        assert!(path.ends_with("weights/calib_LD.weights.json"));
    }

    #[test]
    fn test_export_weights_wrong_shape() {
        let dir = tempfile::tempdir().unwrap();
        let trainer = Trainer::new(&params());

        // wrong head count
        let empty = MethodWeights::new(vec![]);
        assert!(trainer
            .export_weights(dir.path(), "calib", "LD", &empty)
            .is_err());

        // wrong weight count in a head
        let short = MethodWeights::new(vec![LinearWeights::new(vec![0.5], 0.0)]);
        assert!(trainer
            .export_weights(dir.path(), "calib", "LD", &short)
            .is_err());
    }

    #[test]
    fn test_option_setters() {
        let mut trainer = Trainer::new(&params());
        trainer.set_factory_options(vec!["Color".to_string()]);
        trainer.set_training_options(vec!["nTrain=1000".to_string(), "V".to_string()]);
        assert_eq!(trainer.compress_factory_options(), "Color");
        assert_eq!(trainer.compress_training_options(), "nTrain=1000:V");
    }
}
