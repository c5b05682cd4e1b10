use polars::prelude::*;
use std::ops::Index;
use std::slice::Iter;

use crate::error::Result;


/// Dense representation of a feature.
#[derive(Debug,Clone,PartialEq)]
pub struct Feature {
    /// Feature name
    pub name: String,
    /// Feature values.
    pub sample: Vec<f64>,
}


impl Feature {
    /// Construct an empty feature named `name`.
    pub fn new<T: ToString>(name: T) -> Self {
        Self {
            name: name.to_string(),
            sample: Vec::new(),
        }
    }


    /// Convert `polars::Series` into `Feature`.
    /// Missing values are read as `NaN`.
    pub fn from_series(series: &Series) -> Result<Self> {
        let name = series.name().to_string();

        let sample = series.cast(&DataType::Float64)?
            .f64()?
            .into_iter()
            .map(|v| v.unwrap_or(f64::NAN))
            .collect::<Vec<_>>();

        Ok(Self { name, sample })
    }


    /// Get the feature name.
    pub fn name(&self) -> &str {
        &self.name
    }


    pub(super) fn replace_name<S: ToString>(&mut self, name: S) -> String {
        std::mem::replace(&mut self.name, name.to_string())
    }


    pub(crate) fn append(&mut self, x: f64) {
        self.sample.push(x);
    }


    pub(crate) fn into_target(self) -> Vec<f64> {
        self.sample
    }


    /// Returns an iterator over the values.
    pub fn iter(&self) -> Iter<'_, f64> {
        self.sample.iter()
    }


    /// Returns the number of items in this feature.
    pub fn len(&self) -> usize {
        self.sample.len()
    }


    /// Returns `true` if the number of examples is equals to `0`.
    pub fn is_empty(&self) -> bool {
        self.sample.is_empty()
    }
}


impl Index<usize> for Feature {
    type Output = f64;
    fn index(&self, idx: usize) -> &Self::Output {
        &self.sample[idx]
    }
}
