//! Defines the decision tree classifier.
use crate::{Classifier, Label, Sample};
use crate::error::{Error, Result};


use super::node::*;
use serde::{Serialize, Deserialize};

use std::path::Path;
use std::fs::File;
use std::io::prelude::*;


/// Decision tree classifier.
/// This struct is just a wrapper of `Node`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeClassifier {
    root: Node
}


impl From<Node> for TreeClassifier {
    #[inline]
    fn from(root: Node) -> Self {
        Self { root }
    }
}


impl Classifier for TreeClassifier {
    fn predict(&self, sample: &Sample, row: usize) -> Label {
        self.root.predict(sample, row)
    }
}


impl TreeClassifier {
    /// Returns the root node.
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Depth of this tree. A tree made of a single leaf has depth `0`.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }


    /// Number of leaves.
    pub fn n_leaves(&self) -> usize {
        self.root.n_leaves()
    }


    /// Number of nodes.
    pub fn n_nodes(&self) -> usize {
        self.root.n_nodes()
    }


    pub(crate) fn max_feature(&self) -> Option<usize> {
        self.root.max_feature()
    }


    /// Prune this tree with the examples of `sample`.
    /// See [`Node`] for the rules.
    pub fn prune(self, sample: &Sample) -> Self {
        let rows = (0..sample.shape().0).collect::<Vec<_>>();
        Self { root: self.root.prune(sample, &rows) }
    }


    /// Write the current decision tree to dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        let path = path.as_ref();
        let mut f = File::create(path).map_err(|e| Error::io(path, e))?;

        let mut body = String::from("graph DecisionTree {\n");
        self.root.to_dot_info(0).0
            .into_iter()
            .for_each(|row| body.push_str(&row));
        body.push_str("}\n");

        f.write_all(body.as_bytes()).map_err(|e| Error::io(path, e))?;

        Ok(())
    }
}
