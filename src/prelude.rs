//! Exports the standard structs and traits.
//!
pub use crate::{
    // Errors ---------------------------------
    Error,
    Result,


    // Settings -------------------------------
    ExperimentConfig,


    // Samples --------------------------------
    Sample,
    SampleReader,
    DatasetInfo,


    // Classifiers ----------------------------
    Classifier,
    Label,
    TreeClassifier,
    EnsembleClassifier,
    classifier_from_file,


    // Reports --------------------------------
    ClassificationReport,
    classification_report,
    ResultTable,
    Experiment,
};


pub use crate::dataset::load;
pub use crate::research::{
    Method,
    Summary,
    ReportRow,
    DepthResult,
    plot_statistics,
};
