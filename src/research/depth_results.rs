//! Reads and writes the `.results.txt` files of a depth sweep.
//!
//! Each line holds `depth test_accuracy test_f1`,
//! separated by a white space.
use serde::{Serialize, Deserialize};

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};


/// Test metrics of the born-again tree of one maximum depth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthResult {
    /// Maximum depth given to the born-again tree builder.
    pub depth: usize,
    /// Test accuracy.
    pub accuracy: f64,
    /// Weighted F1 score on the test split.
    pub f1_score: f64,
}


/// Write `results` to `path`, one line each, in the given order.
/// Scores keep their decimal point, so a perfect score reads `1.0`.
pub fn write_depth_results<P: AsRef<Path>>(path: P, results: &[DepthResult])
    -> Result<()>
{
    let path = path.as_ref();
    let text = results.iter()
        .map(|r| format!("{} {:?} {:?}\n", r.depth, r.accuracy, r.f1_score))
        .collect::<String>();
    fs::write(path, text).map_err(|e| Error::io(path, e))
}


/// Read the results written by [`write_depth_results`].
/// Blank lines are skipped.
pub fn read_depth_results<P: AsRef<Path>>(path: P) -> Result<Vec<DepthResult>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            let words = line.split_whitespace().collect::<Vec<_>>();
            let bad_line = || Error::parse(
                path, i + 1, "expected `depth accuracy f1`"
            );
            if words.len() != 3 { return Err(bad_line()); }

            Ok(DepthResult {
                depth: words[0].parse().map_err(|_| bad_line())?,
                accuracy: words[1].parse().map_err(|_| bad_line())?,
                f1_score: words[2].parse().map_err(|_| bad_line())?,
            })
        })
        .collect()
}
