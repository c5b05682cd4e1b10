use std::path::Path;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::collections::HashMap;
use std::ops::Index;

use polars::prelude::*;

use super::feature_struct::*;
use crate::error::{Error, Result};


/// Struct `Sample` holds a batch sample with dense format.
#[derive(Debug, Clone)]
pub struct Sample {
    pub(super) name_to_index: HashMap<String, usize>,
    pub(super) features: Vec<Feature>,
    pub(super) target: Vec<f64>,
    pub(super) n_sample: usize,
    pub(super) n_feature: usize,
}


impl Sample {
    /// Convert `polars::DataFrame` and `polars::Series` into `Sample`.
    /// This method takes the ownership for the given pair
    /// `data` and `target`.
    pub fn from_dataframe(data: DataFrame, target: Series) -> Result<Self> {
        let (n_sample, n_feature) = data.shape();
        if target.len() != n_sample {
            return Err(Error::Incompatible(format!(
                "the target has {} rows, expected {n_sample}",
                target.len(),
            )));
        }
        let target = Feature::from_series(&target)?.into_target();

        let features = data.get_columns()
            .iter()
            .map(Feature::from_series)
            .collect::<Result<Vec<_>>>()?;

        let name_to_index = index_names(&features);

        let sample = Self {
            name_to_index, features, target, n_sample, n_feature,
        };
        Ok(sample)
    }


    /// Read a CSV format file to `Sample` type.
    /// Blank lines are skipped.
    /// Each row must have the same number of columns as the first one.
    pub fn from_csv<P>(file: P, has_header: bool) -> Result<Self>
        where P: AsRef<Path>,
    {
        let path = file.as_ref();
        // Open the given `file`.
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        let mut lines = BufReader::new(file)
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line));

        let mut features: Vec<Feature> = Vec::new();
        if has_header {
            if let Some((_, line)) = lines.next() {
                features = line.map_err(|e| Error::io(path, e))?
                    .split(',')
                    .map(|name| Feature::new(name.trim().trim_matches('"')))
                    .collect::<Vec<_>>();
            }
        }
        let mut n_sample = 0_usize;

        // For each line of the file
        for (lineno, line) in lines {
            let line = line.map_err(|e| Error::io(path, e))?;
            if line.trim().is_empty() { continue; }

            let xs = line.split(',')
                .map(|x| {
                    x.trim().parse::<f64>()
                        .map_err(|_| Error::parse(
                            path, lineno, format!("`{}` is not a number", x.trim())
                        ))
                })
                .collect::<Result<Vec<_>>>()?;

            // if the header does not exists,
            // construct a dummy header.
            if features.is_empty() {
                features = (1..=xs.len())
                    .map(|i| Feature::new(format!("Feat. [{i}]")))
                    .collect::<Vec<_>>();
            }

            if xs.len() != features.len() {
                return Err(Error::parse(
                    path,
                    lineno,
                    format!(
                        "expected {} columns, got {}",
                        features.len(),
                        xs.len(),
                    ),
                ));
            }

            for (feat, x) in features.iter_mut().zip(xs) {
                feat.append(x);
            }
            n_sample += 1;
        }

        let n_feature = features.len();
        let target = Vec::with_capacity(0);
        let name_to_index = index_names(&features);

        let sample = Self {
            name_to_index, features, target, n_sample, n_feature,
        };

        Ok(sample)
    }


    /// Returns a slice of type `f64`.
    pub fn target(&self) -> &[f64] {
        &self.target[..]
    }


    /// Returns the target values as class labels.
    /// Each target value must be an integer.
    pub fn labels(&self) -> Result<Vec<i64>> {
        self.target_is_specified()?;
        self.target.iter()
            .enumerate()
            .map(|(row, &y)| {
                if y.trunc() == y {
                    Ok(y as i64)
                } else {
                    Err(Error::NonIntegerLabel { row, value: y })
                }
            })
            .collect()
    }


    /// Returns a slice of type `Feature`.
    pub fn features(&self) -> &[Feature] {
        &self.features[..]
    }


    /// Returns the feature named `name`, if any.
    pub fn feature<S: AsRef<str>>(&self, name: S) -> Option<&Feature> {
        self.name_to_index.get(name.as_ref())
            .map(|&k| &self.features[k])
    }


    /// Returns the feature names in column order.
    pub fn feature_names(&self) -> Vec<String> {
        self.features.iter()
            .map(|feat| feat.name().to_string())
            .collect()
    }


    /// Returns the value of the `col`-th feature of the `row`-th example.
    #[inline]
    pub fn value(&self, row: usize, col: usize) -> f64 {
        self.features[col][row]
    }


    /// Set the feature of name `target` to `self.target`.
    /// The old value assigned to `self.target` will be dropped.
    pub fn set_target<S: AsRef<str>>(mut self, target: S) -> Result<Self> {
        let target = target.as_ref();
        let pos = self.features.iter()
            .position(|feat| feat.name() == target)
            .ok_or_else(|| Error::MissingColumn(target.to_string()))?;

        self.take_target_at(pos);
        Ok(self)
    }


    /// Set the last column to `self.target`.
    pub fn set_last_as_target(mut self) -> Result<Self> {
        if self.features.is_empty() {
            return Err(Error::MissingColumn("<last column>".to_string()));
        }
        let pos = self.features.len() - 1;
        self.take_target_at(pos);
        Ok(self)
    }


    fn take_target_at(&mut self, pos: usize) {
        self.target = self.features.remove(pos).into_target();
        self.n_feature -= 1;
        self.name_to_index = index_names(&self.features);
    }


    /// Returns the pair of the number of examples and
    /// the number of features
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.n_feature)
    }


    /// Set the feature (column) names.
    /// Returns the old names.
    pub fn replace_names<S, T>(&mut self, names: T) -> Result<Vec<String>>
        where S: ToString,
              T: AsRef<[S]>,
    {
        let names = names.as_ref();

        let n_features = self.shape().1;
        let n_names = names.len();
        if n_features != n_names {
            return Err(Error::Incompatible(format!(
                "got {n_names} names for {n_features} features"
            )));
        }

        let old_names = names.iter()
            .zip(&mut self.features[..])
            .map(|(name, feature)| feature.replace_name(name.to_string()))
            .collect();

        self.name_to_index = index_names(&self.features);
        Ok(old_names)
    }


    /// Returns the `idx`-th instance `(x, y)`.
    pub fn at(&self, idx: usize) -> (Vec<f64>, f64) {
        let x = self.features.iter()
            .map(|feat| feat[idx])
            .collect::<Vec<f64>>();
        let y = self.target.get(idx).copied().unwrap_or(f64::NAN);

        (x, y)
    }


    fn target_is_specified(&self) -> Result<()> {
        if self.n_sample != self.target.len() {
            return Err(Error::MissingColumn("<target>".to_string()));
        }
        Ok(())
    }
}


fn index_names(features: &[Feature]) -> HashMap<String, usize> {
    features.iter()
        .enumerate()
        .map(|(i, f)| (f.name().to_string(), i))
        .collect()
}


impl<S> Index<S> for Sample
    where S: AsRef<str>
{
    type Output = Feature;


    fn index(&self, name: S) -> &Self::Output {
        let name: &str = name.as_ref();
        self.feature(name)
            .unwrap_or_else(|| panic!("The feature `{name}` does not exist"))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn csv_file(text: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }


    #[test]
    fn reads_header_and_target() {
        let file = csv_file("x,y,Class\n1.0,2.0,0\n\n3.5,4.0,1\n");
        let sample = Sample::from_csv(file.path(), true)
            .unwrap()
            .set_last_as_target()
            .unwrap();

        assert_eq!(sample.shape(), (2, 2));
        assert_eq!(sample.feature_names(), vec!["x", "y"]);
        assert_eq!(sample["y"][1], 4.0);
        assert_eq!(sample.value(1, 0), 3.5);
        assert_eq!(sample.labels().unwrap(), vec![0, 1]);
    }


    #[test]
    fn dummy_names_without_header() {
        let file = csv_file("1,2\n3,4\n");
        let sample = Sample::from_csv(file.path(), false).unwrap();
        assert_eq!(sample.shape(), (2, 2));
        assert_eq!(sample.feature_names(), vec!["Feat. [1]", "Feat. [2]"]);
        assert!(matches!(sample.labels(), Err(Error::MissingColumn(_))));
    }


    #[test]
    fn ragged_rows_are_rejected() {
        let file = csv_file("x,y\n1,2\n3\n");
        let err = Sample::from_csv(file.path(), true).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 3, .. }));
    }


    #[test]
    fn fractional_labels_are_rejected() {
        let file = csv_file("x,y\n1,0.5\n");
        let sample = Sample::from_csv(file.path(), true)
            .unwrap()
            .set_target("y")
            .unwrap();
        assert!(matches!(
            sample.labels(),
            Err(Error::NonIntegerLabel { row: 0, .. })
        ));
    }


    #[test]
    fn unknown_target_column() {
        let file = csv_file("x,y\n1,0\n");
        let sample = Sample::from_csv(file.path(), true).unwrap();
        assert!(matches!(
            sample.set_target("class"),
            Err(Error::MissingColumn(_))
        ));
    }
}
