//! Regression-model bookkeeping.
//!
//! This module carries the plumbing around an external training engine:
//! variable roles, method-to-algorithm mapping, option-list handling,
//! row buffers, training plans, and weights-file reading. It does not
//! train models itself; it books, stores, and applies weights.

mod params;
mod read;
mod train;
mod variables;
mod weights;

pub use params::ModelParameters;
pub use read::Reader;
pub use train::{BookedMethod, Trainer, TrainingPlan};
pub use variables::{RowBuffer, VariableSet, UNSET};
pub use weights::{weights_file_path, LinearWeights, MethodWeights};

/// How an input variable is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableRole {
    /// A regression target.
    Target,
    /// A training input.
    Train,
    /// A spectator: carried along but not trained on.
    Watch,
}

/// Algorithm family of a training method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    /// Boosted decision trees.
    BoostedTree,
    /// Deep neural network.
    NeuralNet,
    /// Function discriminant analysis.
    FunctionFit,
    /// K-nearest neighbors.
    NearestNeighbor,
    /// Linear discriminant.
    LinearDiscriminant,
    /// Multilayer perceptron.
    Perceptron,
    /// Self-adapting phase-space foam density estimator.
    FoamDensity,
    /// Probability density estimator with range search.
    DensityEstimate,
    /// Support vector machine.
    SupportVector,
}

/// Map a method name to its algorithm family.
///
/// Method names follow the common convention where variants of an
/// algorithm share a prefix (`BDT` and `BDTG` are both boosted trees;
/// the `FDA_*` family are all function fits).
#[must_use]
pub fn method_kind(name: &str) -> Option<ModelKind> {
    match name {
        "BDT" | "BDTG" => Some(ModelKind::BoostedTree),
        "DNN" => Some(ModelKind::NeuralNet),
        "FDA_GA" | "FDA_GAMT" | "FDA_MC" | "FDA_MT" => Some(ModelKind::FunctionFit),
        "KNN" => Some(ModelKind::NearestNeighbor),
        "LD" => Some(ModelKind::LinearDiscriminant),
        "MLP" => Some(ModelKind::Perceptron),
        "PDEFoam" => Some(ModelKind::FoamDensity),
        "PDERS" => Some(ModelKind::DensityEstimate),
        "SVM" => Some(ModelKind::SupportVector),
        _ => None,
    }
}

/// Compress a list of options into a colon-separated string.
#[must_use]
pub fn compress_list(items: &[String]) -> String {
    items.join(":")
}
