//! Classification metrics.
//!
//! [`classification_report`] follows the conventions of
//! `sklearn.metrics.classification_report`:
//! the labels are the sorted union of the true and predicted labels, and
//! an undefined precision/recall/F1 (division by zero) counts as `0`.
use serde::{Serialize, Deserialize};

use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::Label;


/// Precision, recall, F1 score and support of one label (or an average).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassMetrics {
    /// `tp / (tp + fp)`.
    pub precision: f64,
    /// `tp / (tp + fn)`.
    pub recall: f64,
    /// Harmonic mean of precision and recall.
    pub f1_score: f64,
    /// Number of examples whose true label is this label.
    pub support: usize,
}


/// Per-label and averaged metrics of a prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationReport {
    /// Metrics for each label, sorted by label.
    pub per_class: Vec<(Label, ClassMetrics)>,
    /// Fraction of correct predictions.
    pub accuracy: f64,
    /// Unweighted mean over the labels.
    pub macro_avg: ClassMetrics,
    /// Mean over the labels weighted by their support.
    pub weighted_avg: ClassMetrics,
}


impl ClassificationReport {
    /// Shorthand for `self.weighted_avg.f1_score`.
    pub fn weighted_f1(&self) -> f64 {
        self.weighted_avg.f1_score
    }
}


/// Compare the predictions `y_pred` with the true labels `y_true`.
pub fn classification_report(y_true: &[Label], y_pred: &[Label])
    -> Result<ClassificationReport>
{
    if y_true.len() != y_pred.len() {
        return Err(Error::Metric(format!(
            "got {} labels and {} predictions",
            y_true.len(),
            y_pred.len(),
        )));
    }
    if y_true.is_empty() {
        return Err(Error::Metric("no examples".to_string()));
    }

    let labels = y_true.iter()
        .chain(y_pred)
        .copied()
        .collect::<BTreeSet<_>>();

    let per_class = labels.into_iter()
        .map(|label| (label, class_metrics(label, y_true, y_pred)))
        .collect::<Vec<_>>();

    let n_sample = y_true.len();
    let n_correct = y_true.iter()
        .zip(y_pred)
        .filter(|(y, p)| y == p)
        .count();
    let accuracy = n_correct as f64 / n_sample as f64;

    let n_label = per_class.len() as f64;
    let macro_avg = average(&per_class, |_| 1.0 / n_label);
    let weighted_avg = average(
        &per_class, |m| m.support as f64 / n_sample as f64
    );

    Ok(ClassificationReport {
        per_class, accuracy, macro_avg, weighted_avg,
    })
}


fn class_metrics(label: Label, y_true: &[Label], y_pred: &[Label])
    -> ClassMetrics
{
    let (tp, n_pred, support) = y_true.iter()
        .zip(y_pred)
        .fold((0_usize, 0_usize, 0_usize), |(tp, n_pred, support), (y, p)| {
            let is_true = *y == label;
            let is_pred = *p == label;
            (
                tp + (is_true && is_pred) as usize,
                n_pred + is_pred as usize,
                support + is_true as usize,
            )
        });

    let precision = ratio(tp, n_pred);
    let recall = ratio(tp, support);
    let f1_score = if precision + recall > 0.0 {
        2.0 * precision * recall / (precision + recall)
    } else {
        0.0
    };

    ClassMetrics { precision, recall, f1_score, support }
}


#[inline]
fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 { 0.0 } else { num as f64 / den as f64 }
}


fn average<F>(per_class: &[(Label, ClassMetrics)], weight: F) -> ClassMetrics
    where F: Fn(&ClassMetrics) -> f64
{
    let support = per_class.iter()
        .map(|(_, m)| m.support)
        .sum::<usize>();
    per_class.iter()
        .fold(
            ClassMetrics { precision: 0.0, recall: 0.0, f1_score: 0.0, support },
            |mut acc, (_, m)| {
                let w = weight(m);
                acc.precision += w * m.precision;
                acc.recall += w * m.recall;
                acc.f1_score += w * m.f1_score;
                acc
            },
        )
}
