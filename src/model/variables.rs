//! Variable bookkeeping shared by the training and reading helpers.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::model::{compress_list, VariableRole};

/// Sentinel marking a value that has not been set since the last reset.
pub const UNSET: f32 = f32::MIN;

/// Variable and method bookkeeping common to [`Trainer`](crate::model::Trainer)
/// and [`Reader`](crate::model::Reader).
///
/// Sorts input variables into targets, training inputs, and spectators,
/// and keeps each method's option string.
#[derive(Debug, Clone, Default)]
pub struct VariableSet {
    targets: Vec<String>,
    trainers: Vec<String>,
    watchers: Vec<String>,
    methods: Vec<String>,
    method_options: HashMap<String, String>,
}

impl VariableSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set from variable/role pairs and method/option pairs.
    #[must_use]
    pub fn from_lists(
        variables: &[(VariableRole, String)],
        methods: &[(String, String)],
    ) -> Self {
        let mut set = Self::new();
        set.set_variables(variables);
        set.set_methods(methods);
        set
    }

    /// Assign input variables to their role lists.
    pub fn set_variables(&mut self, variables: &[(VariableRole, String)]) {
        for (role, name) in variables {
            match role {
                VariableRole::Target => self.targets.push(name.clone()),
                VariableRole::Train => self.trainers.push(name.clone()),
                VariableRole::Watch => self.watchers.push(name.clone()),
            }
        }
    }

    /// Record methods and their option strings.
    pub fn set_methods(&mut self, methods: &[(String, String)]) {
        for (name, options) in methods {
            self.methods.push(name.clone());
            self.method_options.insert(name.clone(), options.clone());
        }
    }

    /// Regression targets.
    #[must_use]
    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    /// Training inputs.
    #[must_use]
    pub fn trainers(&self) -> &[String] {
        &self.trainers
    }

    /// Spectator variables.
    #[must_use]
    pub fn watchers(&self) -> &[String] {
        &self.watchers
    }

    /// Booked method names.
    #[must_use]
    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    /// Option string of a method, if booked.
    #[must_use]
    pub fn method_options(&self, method: &str) -> Option<&str> {
        self.method_options.get(method).map(String::as_str)
    }
}

/// A named row of values, bound once to a fixed variable list.
///
/// Maps variable names to slots so rows can be set and read by name
/// while evaluation code works on the dense value vector.
#[derive(Debug, Clone, Default)]
pub struct RowBuffer {
    values: Vec<f32>,
    variables: Vec<String>,
    index: HashMap<String, usize>,
}

impl RowBuffer {
    /// Create a buffer over a variable list.
    #[must_use]
    pub fn new(variables: &[String]) -> Self {
        let index = variables
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        Self {
            values: vec![UNSET; variables.len()],
            variables: variables.to_vec(),
            index,
        }
    }

    /// The variable list.
    #[must_use]
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// The dense value vector.
    #[must_use]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Get a value by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is not in the buffer.
    pub fn get(&self, variable: &str) -> Result<f32> {
        self.index
            .get(variable)
            .map(|&slot| self.values[slot])
            .ok_or_else(|| Error::UnknownVariable(variable.to_string()))
    }

    /// Set a value by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is not in the buffer.
    pub fn set(&mut self, variable: &str, value: f32) -> Result<()> {
        match self.index.get(variable) {
            Some(&slot) => {
                self.values[slot] = value;
                Ok(())
            }
            None => Err(Error::UnknownVariable(variable.to_string())),
        }
    }

    /// Reset every value to the unset sentinel.
    pub fn reset(&mut self) {
        self.values.fill(UNSET);
    }

    /// Colon-separated variable list.
    #[must_use]
    pub fn compressed_variables(&self) -> String {
        compress_list(&self.variables)
    }
}
