#![deny(clippy::suspicious)]
#![warn(clippy::pedantic)]
#![warn(let_underscore_drop)]
// Allows need to be after warn/deny
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

//! Generic helpers for working with sequences of values: order-preserving and fast deduplication,
//! intersection and removal across any number of sequences, and "squish", which merges multiple
//! ranked sequences into a single ranked sequence.
//!
//! All operations are generic over [`Element`], i.e. any `Eq + Hash + Clone` type. The operations
//! never modify their inputs, and always return newly allocated results.
//!
//! The crate can also be built as the Python module `aslices_rs`, which provides each operation
//! for unsigned integers (`array_*_uint()`) and strings (`array_*_string()`).

mod config;
mod families;
mod slices;

use pyo3::prelude::*;

pub use config::Config;
pub use slices::*;

include!(concat!(env!("OUT_DIR"), "/rustc_version.rs"));

/// Adds all classes, functions and attributes of the `aslices_rs` Python module to `m`.
pub fn register_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Register the `Config` class which holds the squish settings
    m.add_class::<Config>()?;
    // Register the `array_*_uint()` and `array_*_string()` functions
    families::register(m)?;
    m.add("__rustc_version__", RUSTC_VERSION)?;
    Ok(())
}

#[pymodule]
fn aslices_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    register_module(m)
}
