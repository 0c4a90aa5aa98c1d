mod intersect;
mod presence;
mod remove;
mod squish;
mod unique;

use anyhow::{Result, anyhow};
use std::hash::Hash;

/// Bound shared by every sequence operation.
///
/// Any type which can be hashed, compared for equality and cloned into the output sequence can be
/// used as an element. The Python bindings instantiate the operations for `u64` and `String`.
pub trait Element: Eq + Hash + Clone {}

impl<T: Eq + Hash + Clone> Element for T {}

/// Splits the variadic input of an N-way operation into the first sequence and the remaining
/// ones.
///
/// Returns an error naming `op` if no sequence was passed at all.
fn split_first<'a, T, S>(op: &str, seqs: &'a [S]) -> Result<(&'a [T], &'a [S])>
where
    S: AsRef<[T]>,
{
    let (first, rest) = seqs
        .split_first()
        .ok_or_else(|| anyhow!("{op} requires at least one sequence"))?;
    Ok((first.as_ref(), rest))
}

pub use intersect::*;
pub use presence::*;
pub use remove::*;
pub use squish::*;
pub use unique::*;
