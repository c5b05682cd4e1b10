//! The table of per-fold results and its exporters.
use polars::prelude::*;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use serde::{Serialize, Deserialize};

use std::fs::File;
use std::path::Path;

use crate::error::{Error, Result};
use crate::metrics::ClassificationReport;
use super::fold_average::MethodAverage;


/// Column names of the result table.
/// The first column holds the method name.
pub const COLUMNS: [&str; 5] = [" ", "Train-Acc", "Train-F1", "Test-Acc", "Test-F1"];
const AVERAGE_COLUMNS: [&str; 7] = [
    "Dataset", "Method", "Train-Acc", "Train-F1", "Test-Acc", "Test-F1", "Folds",
];


/// One row of the result table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Name of the evaluated method.
    pub method: String,
    /// Accuracy on the training split.
    pub train_accuracy: f64,
    /// Weighted F1 score on the training split.
    pub train_f1: f64,
    /// Accuracy on the test split.
    pub test_accuracy: f64,
    /// Weighted F1 score on the test split.
    pub test_f1: f64,
}


impl ReportRow {
    /// Build a row from the train/test reports of `method`.
    pub fn new<S: ToString>(
        method: S,
        train: &ClassificationReport,
        test: &ClassificationReport,
    ) -> Self
    {
        Self {
            method: method.to_string(),
            train_accuracy: train.accuracy,
            train_f1: train.weighted_f1(),
            test_accuracy: test.accuracy,
            test_f1: test.weighted_f1(),
        }
    }


    pub(crate) fn values(&self) -> [f64; 4] {
        [self.train_accuracy, self.train_f1, self.test_accuracy, self.test_f1]
    }
}


/// Rows accumulated during a run, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultTable {
    rows: Vec<ReportRow>,
}


impl ResultTable {
    /// Construct an empty table.
    pub fn new() -> Self {
        Self::default()
    }


    /// Append the train/test reports of `method`.
    /// Returns the appended row.
    pub fn add_report<S: ToString>(
        &mut self,
        method: S,
        train: &ClassificationReport,
        test: &ClassificationReport,
    ) -> &ReportRow
    {
        self.push(ReportRow::new(method, train, test))
    }


    /// Append `row`.
    pub fn push(&mut self, row: ReportRow) -> &ReportRow {
        self.rows.push(row);
        &self.rows[self.rows.len() - 1]
    }


    /// Returns the rows.
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows[..]
    }


    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }


    /// Returns `true` if no row has been added.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }


    /// Convert the table into a `polars::DataFrame`.
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let methods = self.rows.iter()
            .map(|row| row.method.as_str())
            .collect::<Vec<_>>();

        let mut columns = vec![Series::new(COLUMNS[0], methods)];
        for (k, name) in COLUMNS[1..].iter().enumerate() {
            let values = self.rows.iter()
                .map(|row| row.values()[k])
                .collect::<Vec<f64>>();
            columns.push(Series::new(name, values));
        }

        Ok(DataFrame::new(columns)?)
    }


    /// Write the table to a CSV file.
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut df = self.to_dataframe()?;
        let mut file = File::create(path).map_err(|e| Error::io(path, e))?;
        CsvWriter::new(&mut file).finish(&mut df)?;
        Ok(())
    }


    /// Write the table to a spreadsheet.
    /// The sheet `Results` holds the rows behind an index column.
    /// If `averages` is not empty, the sheet `Averages` holds them.
    pub fn write_xlsx<P: AsRef<Path>>(
        &self,
        path: P,
        averages: &[MethodAverage],
    ) -> Result<()>
    {
        let bold = Format::new().set_bold();
        let mut workbook = Workbook::new();

        let sheet = workbook.add_worksheet();
        sheet.set_name("Results")?;
        for (col, name) in COLUMNS.iter().enumerate() {
            sheet.write_string_with_format(0, col as u16 + 1, *name, &bold)?;
        }
        for (i, row) in self.rows.iter().enumerate() {
            let r = i as u32 + 1;
            sheet.write_number_with_format(r, 0, i as f64, &bold)?;
            write_row(sheet, r, 1, row)?;
        }

        if !averages.is_empty() {
            let sheet = workbook.add_worksheet();
            sheet.set_name("Averages")?;
            for (col, name) in AVERAGE_COLUMNS.iter().enumerate() {
                sheet.write_string_with_format(0, col as u16, *name, &bold)?;
            }
            for (i, avg) in averages.iter().enumerate() {
                let r = i as u32 + 1;
                sheet.write_string(r, 0, &avg.dataset)?;
                write_row(sheet, r, 1, &avg.average)?;
                sheet.write_number(r, 6, avg.n_folds as f64)?;
            }
        }

        workbook.save(path.as_ref())?;
        Ok(())
    }
}


/// Write the method name followed by the four metrics,
/// starting at column `col`.
fn write_row(sheet: &mut Worksheet, r: u32, col: u16, row: &ReportRow)
    -> std::result::Result<(), XlsxError>
{
    sheet.write_string(r, col, &row.method)?;
    for (k, value) in row.values().into_iter().enumerate() {
        sheet.write_number(r, col + 1 + k as u16, value)?;
    }
    Ok(())
}
