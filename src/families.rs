//! Python bindings for the sequence operations.
//!
//! Python callers get one function per operation and element kind, e.g. `array_unique_uint()` and
//! `array_unique_string()`. All of them are thin wrappers around the generic implementations in
//! `crate::slices`.

use paste::paste;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyTuple;
use std::collections::HashSet;

use crate::slices;

/// Converts an error returned by one of the sequence operations into a Python `ValueError`.
pub(crate) fn to_pyerr(e: &anyhow::Error) -> PyErr {
    PyValueError::new_err(format!("{e}"))
}

/// Generates the Python function family for each given element kind.
///
/// For kind `foo` with Rust type `T`, the macro generates `extract_seqs_foo()` (which converts the
/// variadic arguments of a Python call into `Vec<Vec<T>>`), the `array_*_foo()` Python functions,
/// and `register_foo()` which adds the functions to a Python module.
macro_rules! slice_family {
    ($($kind:ident $ty:ty),*) => {
        $(
            paste! {
            pub(crate) fn [<extract_seqs_ $kind>](
                seqs: &Bound<'_, PyTuple>,
            ) -> PyResult<Vec<Vec<$ty>>> {
                seqs.iter()
                    .map(|s| s.extract::<Vec<$ty>>().map_err(Into::into))
                    .collect()
            }

            /// Returns the set of distinct values in `a`.
            #[pyfunction]
            fn [<array_to_set_ $kind>](a: Vec<$ty>) -> HashSet<$ty> {
                slices::to_presence_set(&a)
            }

            /// Returns `a` with all duplicates removed, keeping the order of first occurrence.
            #[pyfunction]
            fn [<array_unique_retain_ $kind>](a: Vec<$ty>) -> Vec<$ty> {
                slices::unique_retain(&a)
            }

            /// Returns `a` with all duplicates removed. The order of the result is unspecified.
            #[pyfunction]
            fn [<array_unique_ $kind>](a: Vec<$ty>) -> Vec<$ty> {
                slices::unique(&a)
            }

            /// Returns the values of the first list which are present in all other lists, in the
            /// order of the first list.
            #[pyfunction]
            #[pyo3(signature = (*seqs))]
            fn [<array_intersect_ $kind>](seqs: &Bound<'_, PyTuple>) -> PyResult<Vec<$ty>> {
                let seqs = [<extract_seqs_ $kind>](seqs)?;
                slices::intersect(&seqs).map_err(|e| to_pyerr(&e))
            }

            /// Returns the values of the first list which don't occur in any of the other lists,
            /// in the order of the first list.
            #[pyfunction]
            #[pyo3(signature = (*seqs))]
            fn [<array_remove_ $kind>](seqs: &Bound<'_, PyTuple>) -> PyResult<Vec<$ty>> {
                let seqs = [<extract_seqs_ $kind>](seqs)?;
                slices::remove(&seqs).map_err(|e| to_pyerr(&e))
            }

            /// Merges the ranked lists into a single ranked list without duplicates. Values which
            /// occur more than once are moved up. Returns at most `maxlen` values, `maxlen=0`
            /// returns all values.
            #[pyfunction]
            #[pyo3(signature = (maxlen, *seqs))]
            fn [<array_squish_ $kind>](
                maxlen: usize,
                seqs: &Bound<'_, PyTuple>,
            ) -> PyResult<Vec<$ty>> {
                let seqs = [<extract_seqs_ $kind>](seqs)?;
                slices::squish(maxlen, &seqs).map_err(|e| to_pyerr(&e))
            }

            fn [<register_ $kind>](m: &Bound<'_, PyModule>) -> PyResult<()> {
                m.add_function(wrap_pyfunction!([<array_to_set_ $kind>], m)?)?;
                m.add_function(wrap_pyfunction!([<array_unique_retain_ $kind>], m)?)?;
                m.add_function(wrap_pyfunction!([<array_unique_ $kind>], m)?)?;
                m.add_function(wrap_pyfunction!([<array_intersect_ $kind>], m)?)?;
                m.add_function(wrap_pyfunction!([<array_remove_ $kind>], m)?)?;
                m.add_function(wrap_pyfunction!([<array_squish_ $kind>], m)?)?;
                Ok(())
            }
            }
        )*

        /// Adds the functions of all element kinds to `m`.
        pub(crate) fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
            $(
                paste! { [<register_ $kind>](m)?; }
            )*
            Ok(())
        }
    }
}

slice_family! {
    uint u64,
    string String
}
