//! This directory provides the evaluation runs and their reports.
//! - Depth sweeps of the born-again trees (`.results.txt` + plot)
//! - Per-fold comparison with the random forest (workbook)

/// Runs the evaluation.
pub mod experiment;

/// Naming conventions of the experiment directory tree.
pub mod layout;

/// Accumulates per-fold results and writes them.
pub mod result_table;

/// Averages results over folds.
pub mod fold_average;

/// Reads and writes depth-sweep results.
pub mod depth_results;

/// Plots depth-sweep results.
pub mod plot;


pub use experiment::{Experiment, Method, Summary};
pub use layout::Layout;
pub use result_table::{ReportRow, ResultTable};
pub use fold_average::{FoldAverage, MethodAverage};
pub use depth_results::{DepthResult, read_depth_results, write_depth_results};
pub use plot::plot_statistics;
