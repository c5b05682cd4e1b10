//! This file defines split rules for decision tree.
use serde::{Serialize, Deserialize};

use crate::Sample;


/// The output of the function `split` of `Splitter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LR {
    /// The example goes to the left child.
    Left,
    /// The example goes to the right child.
    Right,
}


/// Axis-aligned split `x[feature] <= threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Splitter {
    pub(crate) feature: usize,
    pub(crate) threshold: f64,
}


impl Splitter {
    #[inline]
    pub(crate) fn new(feature: usize, threshold: f64) -> Self {
        Self { feature, threshold }
    }


    /// Index of the feature this rule reads.
    pub fn feature(&self) -> usize {
        self.feature
    }


    /// Threshold of this rule.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }


    /// Defines the splitting.
    #[inline]
    pub fn split(&self, sample: &Sample, row: usize) -> LR {
        let value = sample.value(row, self.feature);

        if value <= self.threshold {
            LR::Left
        } else {
            LR::Right
        }
    }
}
