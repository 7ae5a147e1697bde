//! Consolidated training/reading parameters.

use crate::model::VariableRole;

/// Parameters used to configure training and reading helpers.
///
/// A plain bundle: variables with their roles, methods with their
/// option strings, and the option lists handed through to the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelParameters {
    /// Input variables and how each is used.
    pub variables: Vec<(VariableRole, String)>,
    /// Methods to book and their option strings.
    pub methods: Vec<(String, String)>,
    /// General engine options.
    pub factory_options: Vec<String>,
    /// Training/testing options.
    pub training_options: Vec<String>,
    /// Reading/evaluating options.
    pub reading_options: Vec<String>,
    /// Whether spectator variables are carried through.
    pub add_spectators: bool,
    /// Selection applied during training.
    pub training_cut: String,
    /// Selection applied during reading.
    pub reading_cut: String,
    /// Weight of the sample being trained on.
    pub sample_weight: f32,
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self {
            variables: Vec::new(),
            methods: Vec::new(),
            factory_options: Vec::new(),
            training_options: Vec::new(),
            reading_options: Vec::new(),
            add_spectators: false,
            training_cut: String::new(),
            reading_cut: String::new(),
            sample_weight: 1.0,
        }
    }
}

impl ModelParameters {
    /// Create empty parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of the variables with a given role.
    #[must_use]
    pub fn variables_with_role(&self, role: VariableRole) -> Vec<&str> {
        self.variables
            .iter()
            .filter(|(r, _)| *r == role)
            .map(|(_, name)| name.as_str())
            .collect()
    }

    /// Names of the booked methods.
    #[must_use]
    pub fn method_names(&self) -> Vec<&str> {
        self.methods.iter().map(|(name, _)| name.as_str()).collect()
    }
}
