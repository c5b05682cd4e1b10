#![warn(missing_docs)]

//!
//! A crate that evaluates born-again trees against
//! the random forests they are built from.
//!
//! A born-again tree is a single decision tree that reproduces
//! the decision boundary of a tree ensemble.
//! This crate does not build any tree.
//! It reads the forests and the born-again trees from disk,
//! runs them over the pre-split train/test samples of each
//! cross-validation fold, and reports accuracy and F1 score.
//!
//! - [`Experiment::run_test`] evaluates one born-again tree per maximum depth
//!     and writes a `.results.txt` file (and a plot) for each fold.
//! - [`Experiment::run_average`] compares the random forest,
//!     the minimum-depth born-again tree, and the depth-bounded one
//!     on every fold, and writes a workbook per variant.

pub mod error;
pub mod config;
pub mod sample;
pub mod dataset;
pub mod classifier;
pub mod tree_ensemble;
pub mod metrics;
pub mod research;
pub mod prelude;


pub use error::{Error, Result};
pub use config::ExperimentConfig;

pub use sample::{Sample, SampleReader, Feature};
pub use dataset::DatasetInfo;

pub use classifier::{Classifier, Label};

pub use tree_ensemble::{
    TreeClassifier,
    EnsembleClassifier,
    classifier_from_file,
};

pub use metrics::{ClassificationReport, classification_report};

pub use research::{Experiment, ResultTable};
