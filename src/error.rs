//! Defines the error type shared by every module of this crate.
use std::io;
use std::path::{Path, PathBuf};


/// The result type of this crate.
pub type Result<T> = std::result::Result<T, Error>;


/// Errors raised while loading samples/classifiers or writing reports.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to read or write a file.
    #[error("{}: {source}", path.display())]
    Io {
        /// The file that caused the error.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },


    /// A file does not follow the expected format.
    #[error("{}:{line}: {message}", path.display())]
    Parse {
        /// The file that caused the error.
        path: PathBuf,
        /// 1-indexed line number.
        line: usize,
        /// What went wrong.
        message: String,
    },


    /// A tree file parsed but does not describe a valid tree ensemble.
    #[error("invalid tree ensemble in {}: {message}", path.display())]
    InvalidTree {
        /// The tree file.
        path: PathBuf,
        /// What went wrong.
        message: String,
    },


    /// A classifier does not fit the sample it is applied to.
    #[error("classifier is incompatible with the sample: {0}")]
    Incompatible(String),


    /// The requested column does not exist.
    #[error("column `{0}` does not exist")]
    MissingColumn(String),


    /// A target value is not an integral class label.
    #[error("target value {value} at row {row} is not a class label")]
    NonIntegerLabel {
        /// The row of the offending value.
        row: usize,
        /// The offending value.
        value: f64,
    },


    /// A builder was run without a required setting.
    #[error("`{0}` is not set")]
    MissingSetting(&'static str),


    /// Predictions and labels cannot be compared.
    #[error("invalid metric input: {0}")]
    Metric(String),


    /// Failed to parse the configuration file.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),


    /// Failed to write a spreadsheet.
    #[error("spreadsheet: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),


    /// Failed to build or write a dataframe.
    #[error("dataframe: {0}")]
    Polars(#[from] polars::prelude::PolarsError),


    /// Failed to serialize a report.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),


    /// Failed to draw a plot.
    #[error("plot: {0}")]
    Plot(String),
}


impl Error {
    /// Attach `path` to an I/O error.
    pub(crate) fn io<P: AsRef<Path>>(path: P, source: io::Error) -> Self {
        Self::Io { path: path.as_ref().to_path_buf(), source }
    }


    pub(crate) fn parse<P, S>(path: P, line: usize, message: S) -> Self
        where P: AsRef<Path>,
              S: ToString,
    {
        Self::Parse {
            path: path.as_ref().to_path_buf(),
            line,
            message: message.to_string(),
        }
    }


    pub(crate) fn invalid_tree<P, S>(path: P, message: S) -> Self
        where P: AsRef<Path>,
              S: ToString,
    {
        Self::InvalidTree {
            path: path.as_ref().to_path_buf(),
            message: message.to_string(),
        }
    }
}
