//! Experiment settings.
//!
//! The settings are read from a TOML file such as
//! ```toml
//! source_path = "/path/to/src"
//! output_path = "/path/to/src/output"
//! datasets    = ["COMPAS-ProPublica", "FICO", "HTRU2"]
//! n_folds     = 10
//! n_trees     = 10
//! variants    = [0, 2]
//! plot        = true
//! pruning     = false
//! ```
//! Every key is optional.
use serde::{Serialize, Deserialize};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};


/// Datasets evaluated by default.
pub const DEFAULT_DATASETS: [&str; 3] = ["COMPAS-ProPublica", "FICO", "HTRU2"];
const DEFAULT_N_FOLDS: usize = 10;
const DEFAULT_N_TREES: usize = 10;
const DEFAULT_VARIANTS: [u32; 2] = [0, 2];


/// Settings of an evaluation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Root directory that holds `resources/datasets` and `resources/forests`.
    pub source_path: PathBuf,
    /// Root directory that holds the born-again trees and receives reports.
    pub output_path: PathBuf,
    /// Names of the datasets to evaluate.
    pub datasets: Vec<String>,
    /// Number of cross-validation folds. Folds are numbered from `1`.
    pub n_folds: usize,
    /// Number of trees of the random forests the born-again trees
    /// were built from.
    pub n_trees: usize,
    /// Values of the `V` parameter of the depth-bounded objective.
    pub variants: Vec<u32>,
    /// Draws a plot for every depth-sweep result file.
    pub plot: bool,
    /// Prunes every loaded tree with the training sample.
    pub pruning: bool,
}


impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from("."),
            output_path: PathBuf::from("./output"),
            datasets: DEFAULT_DATASETS.iter().map(|s| s.to_string()).collect(),
            n_folds: DEFAULT_N_FOLDS,
            n_trees: DEFAULT_N_TREES,
            variants: DEFAULT_VARIANTS.to_vec(),
            plot: true,
            pruning: false,
        }
    }
}


impl ExperimentConfig {
    /// Construct the default settings.
    pub fn new() -> Self {
        Self::default()
    }


    /// Read the settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| Error::io(path, e))?;
        text.parse()
    }


    /// Set the source directory.
    pub fn source_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.source_path = path.as_ref().to_path_buf();
        self
    }


    /// Set the output directory.
    pub fn output_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_path = path.as_ref().to_path_buf();
        self
    }


    /// Set the datasets to evaluate.
    pub fn datasets<S, T>(mut self, datasets: T) -> Self
        where S: ToString,
              T: IntoIterator<Item = S>,
    {
        self.datasets = datasets.into_iter()
            .map(|s| s.to_string())
            .collect();
        self
    }


    /// Set the number of folds.
    /// Default value is `10.`
    pub fn n_folds(mut self, n_folds: usize) -> Self {
        self.n_folds = n_folds;
        self
    }


    /// Set the number of trees of the source forests.
    /// Default value is `10.`
    pub fn n_trees(mut self, n_trees: usize) -> Self {
        self.n_trees = n_trees;
        self
    }


    /// Set the variants of the depth-bounded objective.
    /// Default value is `[0, 2].`
    pub fn variants<T: AsRef<[u32]>>(mut self, variants: T) -> Self {
        self.variants = variants.as_ref().to_vec();
        self
    }


    /// Enable/disable plotting.
    pub fn plot(mut self, flag: bool) -> Self {
        self.plot = flag;
        self
    }


    /// Enable/disable pruning of the loaded trees.
    pub fn pruning(mut self, flag: bool) -> Self {
        self.pruning = flag;
        self
    }
}


impl std::str::FromStr for ExperimentConfig {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_take_defaults() {
        let config: ExperimentConfig = r#"
            source_path = "/data/src"
            variants = [2]
        "#.parse().unwrap();

        assert_eq!(config.source_path, PathBuf::from("/data/src"));
        assert_eq!(config.output_path, PathBuf::from("./output"));
        assert_eq!(config.variants, vec![2]);
        assert_eq!(config.n_folds, 10);
        assert_eq!(config.datasets.len(), 3);
        assert!(config.plot);
        assert!(!config.pruning);
    }


    #[test]
    fn unknown_types_are_rejected() {
        let config = "n_folds = \"ten\"".parse::<ExperimentConfig>();
        assert!(matches!(config, Err(Error::Config(_))));
    }
}
