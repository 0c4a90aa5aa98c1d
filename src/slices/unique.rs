use indexmap::IndexSet;

use super::{Element, to_presence_set};

/// Returns the distinct elements of `seq` in the order in which they first occur.
///
/// The insert-ordered set assigns each element its output position the first time the element is
/// seen, later occurrences are ignored.
pub fn unique_retain<T: Element>(seq: &[T]) -> Vec<T> {
    let seen: IndexSet<&T> = seq.iter().collect();
    seen.into_iter().cloned().collect()
}

/// Returns the distinct elements of `seq` in unspecified order.
///
/// Faster than [`unique_retain()`], since there's no order to maintain. The order of the result
/// follows the iteration order of the underlying hash set and must not be relied on.
pub fn unique<T: Element>(seq: &[T]) -> Vec<T> {
    to_presence_set(seq).into_iter().collect()
}
