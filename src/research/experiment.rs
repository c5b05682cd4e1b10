//! Runs the evaluation over `dataset x fold x variant`.
use colored::Colorize;
use serde::{Serialize, Deserialize};
use tracing::{debug, info, warn};

use std::fs;
use std::io;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use crate::config::ExperimentConfig;
use crate::dataset;
use crate::error::{Error, Result};
use crate::metrics::classification_report;
use crate::tree_ensemble::classifier_from_file;
use crate::{Classifier, Label, Sample};

use super::depth_results::{write_depth_results, DepthResult};
use super::fold_average::{FoldAverage, MethodAverage};
use super::layout::{self, Layout};
use super::plot::plot_statistics;
use super::result_table::{ReportRow, ResultTable};

const WIDTH: usize = 14;
const PREC: usize = 4;


/// The classifiers compared by [`Experiment::run_average`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// The random forest the born-again trees are built from.
    RandomForest,
    /// The born-again tree of minimum depth (objective `O0`).
    BornAgain,
    /// The depth-bounded born-again tree (objective `O5`).
    BornAgainNew,
}


impl Method {
    /// Every method, in the order the table lists them.
    pub const ALL: [Method; 3] = [
        Method::RandomForest,
        Method::BornAgain,
        Method::BornAgainNew,
    ];


    /// Returns the name written to the reports.
    pub fn name(&self) -> &'static str {
        match self {
            Method::RandomForest => "RandomForest",
            Method::BornAgain => "BornAgain",
            Method::BornAgainNew => "BornAgainNew",
        }
    }


    fn file(&self, layout: &Layout, dataset: &str, fold: usize, variant: u32)
        -> PathBuf
    {
        match self {
            Method::RandomForest => layout.forest_file(dataset, fold),
            Method::BornAgain => layout.born_again_file(dataset, fold),
            Method::BornAgainNew
                => layout.born_again_new_file(dataset, fold, variant),
        }
    }
}


/// The outcome of [`Experiment::run_average`] for one variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// The variant of the depth-bounded objective.
    pub variant: u32,
    /// One row per dataset, fold and method, in evaluation order.
    /// The rows of the variants evaluated before this one come first.
    pub table: ResultTable,
    /// One row per dataset and method.
    pub averages: Vec<MethodAverage>,
    /// The workbook the summary was written to.
    pub file: PathBuf,
}


impl Summary {
    /// Write the summary as JSON.
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|e| Error::io(path, e))
    }
}


/// An evaluation run.
/// # Example
/// ```no_run
/// use born_again_eval::{Experiment, ExperimentConfig};
///
/// let config = ExperimentConfig::new()
///     .source_path("/path/to/src")
///     .output_path("/path/to/src/output");
/// let experiment = Experiment::new(config);
/// experiment.run_test()?;
/// experiment.run_average()?;
/// # Ok::<(), born_again_eval::Error>(())
/// ```
pub struct Experiment {
    config: ExperimentConfig,
}


impl Experiment {
    /// Construct a new instance of `Experiment.`
    pub fn new(config: ExperimentConfig) -> Self {
        Self { config }
    }


    /// Returns the settings.
    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }


    /// Returns the file layout of this experiment.
    pub fn layout(&self) -> Layout<'_> {
        Layout::new(&self.config)
    }


    fn folds(&self) -> RangeInclusive<usize> {
        1..=self.config.n_folds
    }


    /// Evaluate every tree of the depth-sweep directories on the test split
    /// and write one `.results.txt` file per dataset, fold and variant.
    /// Returns the written files.
    pub fn run_test(&self) -> Result<Vec<PathBuf>> {
        let layout = self.layout();
        let mut written = Vec::new();

        for dataset in &self.config.datasets {
            let results_dir = layout.results_dir(dataset);
            fs::create_dir_all(&results_dir)
                .map_err(|e| Error::io(&results_dir, e))?;

            for fold in self.folds() {
                let (train, test, _) = dataset::load(
                    &self.config.source_path, dataset, fold
                )?;
                let y_test = test.labels()?;

                for &variant in &self.config.variants {
                    let sweep_dir = layout.sweep_dir(dataset, fold, variant);
                    let results = self.sweep(&sweep_dir, &train, &test, &y_test)?;

                    let results_file = layout.results_file(dataset, fold, variant);
                    write_depth_results(&results_file, &results)?;
                    info!(
                        file = %results_file.display(),
                        n_trees = results.len(),
                        "wrote depth sweep"
                    );

                    if self.config.plot && !results.is_empty() {
                        match plot_statistics(&results_file) {
                            Ok(plot) => debug!(plot = %plot.display(), "plotted"),
                            Err(e) => warn!(error = %e, "skipped plot"),
                        }
                    }
                    written.push(results_file);
                }
            }
        }
        Ok(written)
    }


    /// Evaluate the trees `*.D<depth>.tree` in `dir`, shallowest first.
    fn sweep(
        &self,
        dir: &Path,
        train: &Sample,
        test: &Sample,
        y_test: &[Label],
    ) -> Result<Vec<DepthResult>>
    {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(dir = %dir.display(), "no depth sweep");
                return Ok(Vec::new());
            },
            Err(e) => return Err(Error::io(dir, e)),
        };

        let mut files = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| Error::io(dir, e))?.path();
            if path.extension().map_or(true, |ext| ext != "tree") {
                continue;
            }
            match layout::depth_from_file_name(&path) {
                Some(depth) => files.push((depth, path)),
                None => warn!(file = %path.display(), "no depth in file name"),
            }
        }
        files.sort();

        files.into_iter()
            .map(|(depth, path)| -> Result<DepthResult> {
                let tree = classifier_from_file(&path, train, self.config.pruning)?;
                tree.check_compatible(test)?;
                let report = classification_report(y_test, &tree.predict_all(test))?;
                debug!(
                    file = %path.display(),
                    depth,
                    accuracy = report.accuracy,
                    "evaluated"
                );
                Ok(DepthResult {
                    depth,
                    accuracy: report.accuracy,
                    f1_score: report.weighted_f1(),
                })
            })
            .collect()
    }


    /// Compare the random forest with both born-again trees on every fold,
    /// print the per-dataset averages and write one workbook per variant.
    /// The table accumulates over the variants, so each workbook holds
    /// every row evaluated so far.
    pub fn run_average(&self) -> Result<Vec<Summary>> {
        let layout = self.layout();
        let output_path = &self.config.output_path;
        fs::create_dir_all(output_path)
            .map_err(|e| Error::io(output_path, e))?;

        let mut table = ResultTable::new();
        let mut summaries = Vec::with_capacity(self.config.variants.len());
        for &variant in &self.config.variants {
            let mut averages = Vec::new();

            for dataset in &self.config.datasets {
                let mut sums = Method::ALL.map(|m| FoldAverage::new(m.name()));

                for fold in self.folds() {
                    let (train, test, _) = dataset::load(
                        &self.config.source_path, dataset, fold
                    )?;
                    let y_train = train.labels()?;
                    let y_test = test.labels()?;

                    for (method, sum) in Method::ALL.iter().zip(&mut sums) {
                        let path = method.file(&layout, dataset, fold, variant);
                        debug!(file = %path.display(), "loading");
                        let classifier = classifier_from_file(
                            &path, &train, self.config.pruning
                        )?;
                        classifier.check_compatible(&test)?;

                        let train_report = classification_report(
                            &y_train, &classifier.predict_all(&train)
                        )?;
                        let test_report = classification_report(
                            &y_test, &classifier.predict_all(&test)
                        )?;
                        let row = table.add_report(
                            method.name(), &train_report, &test_report
                        );
                        sum.add(row);
                    }
                }

                for sum in &sums {
                    if let Some(average) = sum.average() {
                        print_average(dataset, variant, &average);
                        averages.push(MethodAverage {
                            dataset: dataset.clone(),
                            n_folds: sum.n_folds(),
                            average,
                        });
                    }
                }
            }

            let file = layout.summary_file(variant);
            table.write_xlsx(&file, &averages)?;
            table.write_csv(file.with_extension("csv"))?;
            let summary = Summary {
                variant,
                table: table.clone(),
                averages,
                file,
            };
            summary.write_json(summary.file.with_extension("json"))?;
            info!(file = %summary.file.display(), "wrote summary");

            summaries.push(summary);
        }
        Ok(summaries)
    }
}


fn print_average(dataset: &str, variant: u32, average: &ReportRow) {
    println!(
        "{}    {}    {}    {}",
        format!("[{dataset} V{variant}]").bold().red(),
        format!("{:<WIDTH$}", average.method).bold().green(),
        format!(
            "[TRAIN acc {:.PREC$} f1 {:.PREC$}]",
            average.train_accuracy, average.train_f1,
        ).bold().yellow(),
        format!(
            "[TEST acc {:.PREC$} f1 {:.PREC$}]",
            average.test_accuracy, average.test_f1,
        ).bold().cyan(),
    );
}
