//! File naming conventions of the experiment directory tree.
//!
//! ```txt
//! <source>/resources/datasets/<D>/<D>.train<f>.csv
//! <source>/resources/datasets/<D>/<D>.test<f>.csv
//! <source>/resources/forests/<D>/<D>.RF<f>.txt
//! <output>/trees<T>/<D>/<D>.BA<f>.O0.T<T>.tree
//! <output>/trees<T>/<D>/ExactDepth/<D>.BA<f>.O5.T<T>.V<v>.tree
//! <output>/trees<T>/<D>/<D>.BA<f>.O5.T<T>.V<v>/*.D<depth>.tree
//! <output>/trees<T>/<D>/Results_<D>/<D>.BA<f>.O5.T<T>.V<v>.results.txt
//! <output>/ResultsV<v>.xlsx
//! ```
use std::path::{Path, PathBuf};

use crate::config::ExperimentConfig;


/// Path of the training split of `dataset` at `fold`.
pub fn train_file<P: AsRef<Path>>(source: P, dataset: &str, fold: usize)
    -> PathBuf
{
    dataset_dir(source, dataset).join(format!("{dataset}.train{fold}.csv"))
}


/// Path of the test split of `dataset` at `fold`.
pub fn test_file<P: AsRef<Path>>(source: P, dataset: &str, fold: usize)
    -> PathBuf
{
    dataset_dir(source, dataset).join(format!("{dataset}.test{fold}.csv"))
}


fn dataset_dir<P: AsRef<Path>>(source: P, dataset: &str) -> PathBuf {
    source.as_ref()
        .join("resources")
        .join("datasets")
        .join(dataset)
}


/// Resolves every file of one experiment.
#[derive(Debug, Clone)]
pub struct Layout<'a> {
    config: &'a ExperimentConfig,
}


impl<'a> Layout<'a> {
    /// Construct a new instance of `Layout.`
    pub fn new(config: &'a ExperimentConfig) -> Self {
        Self { config }
    }


    /// The random forest the born-again trees of `fold` are built from.
    pub fn forest_file(&self, dataset: &str, fold: usize) -> PathBuf {
        self.config.source_path
            .join("resources")
            .join("forests")
            .join(dataset)
            .join(format!("{dataset}.RF{fold}.txt"))
    }


    fn trees_dir(&self, dataset: &str) -> PathBuf {
        self.config.output_path
            .join(format!("trees{}", self.config.n_trees))
            .join(dataset)
    }


    /// Base name of the depth-bounded born-again trees,
    /// e.g., `FICO.BA3.O5.T10.V2`.
    pub fn sweep_name(&self, dataset: &str, fold: usize, variant: u32)
        -> String
    {
        format!(
            "{dataset}.BA{fold}.O5.T{}.V{variant}",
            self.config.n_trees,
        )
    }


    /// The exact born-again tree (objective `O0`).
    pub fn born_again_file(&self, dataset: &str, fold: usize) -> PathBuf {
        self.trees_dir(dataset)
            .join(format!("{dataset}.BA{fold}.O0.T{}.tree", self.config.n_trees))
    }


    /// The depth-bounded born-again tree (objective `O5`).
    pub fn born_again_new_file(
        &self,
        dataset: &str,
        fold: usize,
        variant: u32,
    ) -> PathBuf
    {
        let name = self.sweep_name(dataset, fold, variant);
        self.trees_dir(dataset)
            .join("ExactDepth")
            .join(format!("{name}.tree"))
    }


    /// Directory holding one depth-bounded tree per maximum depth.
    pub fn sweep_dir(&self, dataset: &str, fold: usize, variant: u32)
        -> PathBuf
    {
        self.trees_dir(dataset).join(self.sweep_name(dataset, fold, variant))
    }


    /// Directory receiving the depth-sweep results of `dataset`.
    pub fn results_dir(&self, dataset: &str) -> PathBuf {
        self.trees_dir(dataset).join(format!("Results_{dataset}"))
    }


    /// The depth-sweep result file.
    pub fn results_file(&self, dataset: &str, fold: usize, variant: u32)
        -> PathBuf
    {
        let name = self.sweep_name(dataset, fold, variant);
        self.results_dir(dataset).join(format!("{name}.results.txt"))
    }


    /// The summary workbook of `variant`.
    pub fn summary_file(&self, variant: u32) -> PathBuf {
        self.config.output_path.join(format!("ResultsV{variant}.xlsx"))
    }
}


/// Parse the maximum depth out of a depth-sweep tree file name,
/// i.e., the text between the last `.D` and `.tree`.
pub fn depth_from_file_name<P: AsRef<Path>>(path: P) -> Option<usize> {
    let name = path.as_ref().file_name()?.to_str()?;
    let stem = name.strip_suffix(".tree")?;
    let pos = stem.rfind(".D")?;
    stem[pos + 2..].parse().ok()
}
