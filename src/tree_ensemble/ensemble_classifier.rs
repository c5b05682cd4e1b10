//! Defines the tree ensemble classifier.
use serde::{Serialize, Deserialize};

use crate::{Classifier, Label, Sample};
use crate::error::{Error, Result};
use super::tree_classifier::TreeClassifier;


/// The metadata written at the top of a tree file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnsembleHeader {
    /// Name of the dataset the ensemble was trained on.
    pub dataset_name: String,
    /// Ensemble method, e.g., `RF` or `BA`.
    pub ensemble: String,
    /// Number of trees.
    pub n_trees: usize,
    /// Number of features.
    pub n_features: usize,
    /// Number of classes.
    pub n_classes: usize,
    /// Maximum tree depth, as declared by the file.
    pub max_depth: usize,
}


/// A majority vote over decision trees.
/// A born-again tree is an ensemble of one tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnsembleClassifier {
    header: EnsembleHeader,
    trees: Vec<TreeClassifier>,
}


impl EnsembleClassifier {
    /// Construct an ensemble from its parts.
    /// The caller guarantees that every leaf predicts
    /// a class below `header.n_classes.`
    pub(crate) fn from_raw(
        header: EnsembleHeader,
        trees: Vec<TreeClassifier>,
    ) -> Self
    {
        Self { header, trees }
    }


    /// Returns the metadata of the ensemble.
    pub fn header(&self) -> &EnsembleHeader {
        &self.header
    }


    /// Returns the trees of the ensemble.
    pub fn trees(&self) -> &[TreeClassifier] {
        &self.trees[..]
    }


    /// Depth of the deepest tree.
    pub fn depth(&self) -> usize {
        self.trees.iter()
            .map(|tree| tree.depth())
            .max()
            .unwrap_or(0)
    }


    /// Total number of leaves.
    pub fn n_leaves(&self) -> usize {
        self.trees.iter()
            .map(|tree| tree.n_leaves())
            .sum()
    }


    /// Prune every tree with the examples of `sample`.
    pub fn prune(self, sample: &Sample) -> Self {
        let trees = self.trees.into_iter()
            .map(|tree| tree.prune(sample))
            .collect();
        Self { header: self.header, trees }
    }


    /// Check whether every split reads a column of `sample`.
    pub fn check_compatible(&self, sample: &Sample) -> Result<()> {
        let n_feature = sample.shape().1;
        let max_feature = self.trees.iter()
            .filter_map(|tree| tree.max_feature())
            .max();

        match max_feature {
            Some(feature) if feature >= n_feature => {
                Err(Error::Incompatible(format!(
                    "a split reads feature {feature}, \
                     but the sample has {n_feature} features"
                )))
            },
            _ => Ok(()),
        }
    }
}


impl Classifier for EnsembleClassifier {
    /// Returns the class predicted by most trees.
    /// Ties go to the smallest class.
    fn predict(&self, sample: &Sample, row: usize) -> Label {
        let mut votes = vec![0_usize; self.header.n_classes];
        for tree in &self.trees {
            votes[tree.predict(sample, row) as usize] += 1;
        }

        votes.into_iter()
            .enumerate()
            .fold((0, 0), |(best, max), (class, count)| {
                if count > max { (class, count) } else { (best, max) }
            })
            .0 as Label
    }
}
