//! Averages of the per-fold results of one method.
use serde::{Serialize, Deserialize};

use super::result_table::ReportRow;


/// The average of one method over the folds of a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodAverage {
    /// Dataset name.
    pub dataset: String,
    /// Number of folds averaged.
    pub n_folds: usize,
    /// The averaged metrics.
    pub average: ReportRow,
}


/// Running sums of the four metrics of one method.
#[derive(Debug, Clone)]
pub struct FoldAverage {
    method: String,
    sums: [f64; 4],
    n_folds: usize,
}


impl FoldAverage {
    /// Construct a new instance of `FoldAverage.`
    pub fn new<S: ToString>(method: S) -> Self {
        Self {
            method: method.to_string(),
            sums: [0.0; 4],
            n_folds: 0,
        }
    }


    /// Add the results of one fold.
    pub fn add(&mut self, row: &ReportRow) {
        self.sums.iter_mut()
            .zip(row.values())
            .for_each(|(sum, value)| *sum += value);
        self.n_folds += 1;
    }


    /// Number of folds added so far.
    pub fn n_folds(&self) -> usize {
        self.n_folds
    }


    /// Returns the averages, or `None` if no fold has been added.
    pub fn average(&self) -> Option<ReportRow> {
        if self.n_folds == 0 { return None; }

        let n = self.n_folds as f64;
        let [train_accuracy, train_f1, test_accuracy, test_f1] = self.sums
            .map(|sum| sum / n);
        Some(ReportRow {
            method: self.method.clone(),
            train_accuracy,
            train_f1,
            test_accuracy,
            test_f1,
        })
    }
}
