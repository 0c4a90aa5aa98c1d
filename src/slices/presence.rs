use std::collections::HashSet;

use super::Element;

/// Returns the set of distinct elements which occur in `seq`.
pub fn to_presence_set<T: Element>(seq: &[T]) -> HashSet<T> {
    seq.iter().cloned().collect()
}
