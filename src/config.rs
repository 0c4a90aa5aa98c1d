use anyhow::{Result, ensure};
use pyo3::prelude::*;
use pyo3::types::PyTuple;
use serde::Deserialize;

use crate::families::{extract_seqs_string, extract_seqs_uint, to_pyerr};
use crate::slices::{Element, REPEAT_BIAS, RankedItem, squish_ranked, squish_with_bias};

/// Holds the settings for merging ranked sequences with squish
#[pyclass]
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Maximum number of values returned, 0 returns all values
    #[pyo3(get, set)]
    pub maxlen: usize,
    /// Score bonus applied to a value each time it's seen again. Must be positive.
    #[pyo3(get, set)]
    pub repeat_bias: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            maxlen: 0,
            repeat_bias: REPEAT_BIAS,
        }
    }
}

impl Config {
    pub fn new(maxlen: usize, repeat_bias: i64) -> Result<Self> {
        ensure!(
            repeat_bias > 0,
            "Invalid repeat bias {repeat_bias}, the repeat bias must be positive"
        );
        Ok(Self {
            maxlen,
            repeat_bias,
        })
    }

    /// Merges `seqs` with the settings of this config, see [`crate::squish()`].
    pub fn squish<T, S>(&self, seqs: &[S]) -> Result<Vec<T>>
    where
        T: Element,
        S: AsRef<[T]>,
    {
        squish_with_bias(self.maxlen, self.repeat_bias, seqs)
    }

    /// Like [`Config::squish()`] but returns the score of each value as well.
    pub fn squish_ranked<T, S>(&self, seqs: &[S]) -> Result<Vec<RankedItem<T>>>
    where
        T: Element,
        S: AsRef<[T]>,
    {
        squish_ranked(self.maxlen, self.repeat_bias, seqs)
    }
}

#[pymethods]
impl Config {
    #[new]
    #[pyo3(signature = (maxlen=0, repeat_bias=REPEAT_BIAS))]
    fn new_py(maxlen: usize, repeat_bias: i64) -> PyResult<Self> {
        Self::new(maxlen, repeat_bias).map_err(|e| to_pyerr(&e))
    }

    fn __repr__(&self) -> String {
        format!("{self:#?}")
    }

    /// Merges the ranked lists of unsigned integers with the settings of this config.
    #[pyo3(signature = (*seqs))]
    fn squish_uint(&self, seqs: &Bound<'_, PyTuple>) -> PyResult<Vec<u64>> {
        let seqs = extract_seqs_uint(seqs)?;
        self.squish(&seqs).map_err(|e| to_pyerr(&e))
    }

    /// Merges the ranked lists of strings with the settings of this config.
    #[pyo3(signature = (*seqs))]
    fn squish_string(&self, seqs: &Bound<'_, PyTuple>) -> PyResult<Vec<String>> {
        let seqs = extract_seqs_string(seqs)?;
        self.squish(&seqs).map_err(|e| to_pyerr(&e))
    }
}
