//! Loads the pre-split train/test samples of a cross-validation fold.
use serde::{Serialize, Deserialize};
use tracing::debug;

use std::collections::BTreeSet;
use std::path::Path;

use crate::error::{Error, Result};
use crate::research::layout;
use crate::Sample;


/// Describes the dataset a fold belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetInfo {
    /// Dataset name.
    pub name: String,
    /// Fold number.
    pub fold: usize,
    /// Feature names, in column order.
    pub feature_names: Vec<String>,
    /// Number of features.
    pub n_features: usize,
    /// Class labels that appear in the train or test split, sorted.
    pub classes: Vec<i64>,
}


impl DatasetInfo {
    /// Returns the number of classes.
    pub fn n_classes(&self) -> usize {
        self.classes.len()
    }
}


/// Read the training and test splits of `dataset` at `fold`.
/// Both files have a header row and keep the class in the last column.
pub fn load<P>(source_path: P, dataset: &str, fold: usize)
    -> Result<(Sample, Sample, DatasetInfo)>
    where P: AsRef<Path>
{
    let source_path = source_path.as_ref();
    let train_file = layout::train_file(source_path, dataset, fold);
    let test_file = layout::test_file(source_path, dataset, fold);

    let train = Sample::from_csv(&train_file, true)?.set_last_as_target()?;
    let test = Sample::from_csv(&test_file, true)?.set_last_as_target()?;

    let feature_names = train.feature_names();
    if feature_names != test.feature_names() {
        return Err(Error::Incompatible(format!(
            "{} and {} have different columns",
            train_file.display(),
            test_file.display(),
        )));
    }

    let classes = train.labels()?
        .into_iter()
        .chain(test.labels()?)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect::<Vec<_>>();

    let info = DatasetInfo {
        name: dataset.to_string(),
        fold,
        n_features: feature_names.len(),
        feature_names,
        classes,
    };
    debug!(
        dataset,
        fold,
        n_train = train.shape().0,
        n_test = test.shape().0,
        "loaded split"
    );

    Ok((train, test, info))
}
