//! The prediction interface shared by trees and ensembles.
use crate::Sample;


/// A class label. Labels are class indices starting at `0`.
pub type Label = i64;


/// A trait that defines the function used by every loaded classifier.
pub trait Classifier {

    /// Predicts the label of the `row`-th example of `sample`.
    fn predict(&self, sample: &Sample, row: usize) -> Label;


    /// Predicts the labels of the given examples.
    fn predict_all(&self, sample: &Sample) -> Vec<Label> {
        let n_sample = sample.shape().0;
        (0..n_sample).map(|row| self.predict(sample, row))
            .collect()
    }
}
