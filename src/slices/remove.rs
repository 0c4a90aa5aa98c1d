use anyhow::Result;
use std::collections::HashSet;

use super::{Element, split_first};

/// Returns the first sequence with all values which occur in any of the following sequences
/// removed.
///
/// The order and any duplicates of the surviving values are kept as they are in the first
/// sequence. Passing a single sequence returns a copy of that sequence.
///
/// Returns an error if `seqs` is empty.
pub fn remove<T, S>(seqs: &[S]) -> Result<Vec<T>>
where
    T: Element,
    S: AsRef<[T]>,
{
    let (first, rest) = split_first("remove", seqs)?;
    let removed: HashSet<&T> = rest.iter().flat_map(|s| s.as_ref().iter()).collect();
    Ok(first
        .iter()
        .filter(|tok| !removed.contains(tok))
        .cloned()
        .collect())
}
