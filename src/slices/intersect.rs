use anyhow::Result;
use std::collections::HashMap;

use super::{Element, split_first};

/// Returns the elements of the first sequence which are present in all of the following
/// sequences.
///
/// The result keeps the order of the first sequence. Duplicate values in the first sequence are
/// kept as well, as long as the value qualifies. Passing a single sequence returns a copy of that
/// sequence.
///
/// Returns an error if `seqs` is empty.
pub fn intersect<T, S>(seqs: &[S]) -> Result<Vec<T>>
where
    T: Element,
    S: AsRef<[T]>,
{
    let (first, rest) = split_first("intersect", seqs)?;

    // Maps each value to the number of consecutive sequences (starting from the second one) which
    // contain it. The count for a value is only raised for sequence `i` if the value was found in
    // all sequences before `i`, which also makes repeated values in a single sequence count once.
    let mut counts: HashMap<&T, usize> = HashMap::new();
    for (i, seq) in rest.iter().enumerate() {
        for tok in seq.as_ref() {
            if i == 0 {
                counts.insert(tok, 1);
            } else if let Some(c) = counts.get_mut(tok) {
                if *c == i {
                    *c += 1;
                }
            }
        }
    }

    let required = rest.len();
    Ok(first
        .iter()
        .filter(|tok| counts.get(tok).copied().unwrap_or(0) == required)
        .cloned()
        .collect())
}

#[cfg(test)]
mod intersect_tests {
    use super::*;
    use paste::paste;

    fn conv<T, F: Fn(u64) -> T>(seqs: &[&[u64]], f: F) -> Vec<Vec<T>> {
        seqs.iter()
            .map(|s| s.iter().copied().map(&f).collect())
            .collect()
    }

    macro_rules! test_intersect {
        ($($kind:ident $conv:expr),*) => {
            $(
                paste! {
                #[test]
                fn [<test_intersect_two_ $kind>]() {
                    let seqs = conv(&[&[1, 2, 2, 3], &[2, 3, 4]], $conv);
                    let expected = conv(&[&[2, 2, 3]], $conv).remove(0);
                    assert_eq!(intersect(&seqs).unwrap(), expected);
                }

                #[test]
                fn [<test_intersect_three_ $kind>]() {
                    let seqs = conv(&[&[5, 1, 4, 3, 1], &[1, 3, 5], &[3, 1, 7]], $conv);
                    let expected = conv(&[&[1, 3, 1]], $conv).remove(0);
                    assert_eq!(intersect(&seqs).unwrap(), expected);
                }

                #[test]
                fn [<test_intersect_single_ $kind>]() {
                    let seqs = conv(&[&[3, 3, 1, 2]], $conv);
                    assert_eq!(intersect(&seqs).unwrap(), seqs[0]);
                }

                #[test]
                fn [<test_intersect_disjoint_ $kind>]() {
                    let seqs = conv(&[&[1, 2], &[3, 4]], $conv);
                    assert!(intersect(&seqs).unwrap().is_empty());
                }

                #[test]
                fn [<test_intersect_all_empty_ $kind>]() {
                    let seqs = conv(&[&[], &[], &[]], $conv);
                    assert!(intersect(&seqs).unwrap().is_empty());
                }
                }
            )*
        }
    }

    test_intersect! {
        uint |n: u64| n,
        string |n: u64| format!("s{n}")
    }

    #[test]
    fn test_intersect_duplicates_in_later_sequence() {
        // `2` appears twice in the second sequence but is missing from the third one. The
        // duplicate must not make up for the missing occurrence.
        let seqs: Vec<Vec<u64>> = vec![vec![1, 2], vec![1, 2, 2], vec![1]];
        assert_eq!(intersect(&seqs).unwrap(), vec![1]);
    }

    #[test]
    fn test_intersect_missing_from_middle_sequence() {
        let seqs: Vec<Vec<u64>> = vec![vec![1, 2], vec![1], vec![1, 2]];
        assert_eq!(intersect(&seqs).unwrap(), vec![1]);
    }

    #[test]
    fn test_intersect_empty_later_sequence() {
        let seqs: Vec<Vec<u64>> = vec![vec![1, 2], vec![]];
        assert!(intersect(&seqs).unwrap().is_empty());
    }

    #[test]
    fn test_intersect_many_sequences() {
        // More sequences than fit into an 8-bit counter
        let seqs: Vec<Vec<u64>> = (0..300).map(|_| vec![7, 8]).collect();
        assert_eq!(intersect(&seqs).unwrap(), vec![7, 8]);
    }

    #[test]
    fn test_intersect_slices() {
        let a = [1u64, 2, 3];
        let b = vec![3u64, 1];
        let seqs: [&[u64]; 2] = [&a, &b];
        assert_eq!(intersect(&seqs).unwrap(), vec![1, 3]);
    }

    #[test]
    fn test_intersect_no_sequences() {
        let seqs: Vec<Vec<String>> = vec![];
        let e = intersect(&seqs).unwrap_err();
        assert_eq!(format!("{e}"), "intersect requires at least one sequence");
    }
}
