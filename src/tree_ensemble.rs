//! Decision trees and tree ensembles loaded from disk.
//!
//! A row goes to the left child of a branch
//! iff `x[feature] <= threshold.`

mod node;
mod split_rule;
mod tree_classifier;
mod ensemble_classifier;
mod tree_reader;


pub use node::{Node, BranchNode, LeafNode};
pub use split_rule::{Splitter, LR};
pub use tree_classifier::TreeClassifier;
pub use ensemble_classifier::{EnsembleClassifier, EnsembleHeader};
pub use tree_reader::{
    classifier_from_file,
    read_ensemble,
    parse_ensemble,
};
