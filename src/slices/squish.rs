use anyhow::{Result, ensure};
use indexmap::IndexMap;

use super::Element;

/// Default score bonus for each repeated sighting of a value in [`squish()`].
///
/// The bias assumes that input ranks are small compared to it. A value which is seen twice always
/// sorts ahead of all values which are seen only once, as long as no input sequence is longer than
/// the bias.
pub const REPEAT_BIAS: i64 = 100_000;

/// A value and the final score which [`squish_ranked()`] computed for it. Lower scores rank
/// higher.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RankedItem<T> {
    pub item: T,
    pub score: i64,
}

/// Merges the ranked sequences in `seqs` into a single ranked sequence without duplicates.
///
/// Each sequence is taken to be ordered by rank, best first, e.g. the results of one search
/// backend. Values which occur more than once (in the same or in different sequences) are moved
/// towards the top of the result. Values with the same score are returned in the order in which
/// they were first seen, which interleaves the sequences: `seqs[0][0]`, `seqs[1][0]`,
/// `seqs[0][1]`, `seqs[1][1]`, ...
///
/// At most `maxlen` values are returned. `maxlen = 0` returns all values.
///
/// Uses [`REPEAT_BIAS`] as the bonus for repeated values, see [`squish_with_bias()`] to customize
/// it. Returns an error if `seqs` is empty.
pub fn squish<T, S>(maxlen: usize, seqs: &[S]) -> Result<Vec<T>>
where
    T: Element,
    S: AsRef<[T]>,
{
    squish_with_bias(maxlen, REPEAT_BIAS, seqs)
}

/// Same as [`squish()`] but with a custom bonus for repeated values.
///
/// Returns an error if `seqs` is empty or if `repeat_bias` isn't positive.
pub fn squish_with_bias<T, S>(maxlen: usize, repeat_bias: i64, seqs: &[S]) -> Result<Vec<T>>
where
    T: Element,
    S: AsRef<[T]>,
{
    Ok(squish_ranked(maxlen, repeat_bias, seqs)?
        .into_iter()
        .map(|r| r.item)
        .collect())
}

/// Computes the ranked result of [`squish_with_bias()`], including the score of each value.
///
/// The first time a value is seen at position `p` of any sequence, its score is set to `p`. Every
/// further sighting at position `p` lowers the score by `repeat_bias - p`.
pub fn squish_ranked<T, S>(
    maxlen: usize,
    repeat_bias: i64,
    seqs: &[S],
) -> Result<Vec<RankedItem<T>>>
where
    T: Element,
    S: AsRef<[T]>,
{
    ensure!(!seqs.is_empty(), "squish requires at least one sequence");
    ensure!(
        repeat_bias > 0,
        "squish repeat bias must be positive, got {repeat_bias}"
    );

    // Insert order of the map is the order in which values were first seen, which we use to break
    // ties between equal scores.
    let mut scores: IndexMap<&T, i64> = IndexMap::new();
    for seq in seqs {
        for (pos, tok) in seq.as_ref().iter().enumerate() {
            let rank = i64::try_from(pos).unwrap_or(i64::MAX);
            scores
                .entry(tok)
                .and_modify(|score| {
                    *score = score.saturating_sub(repeat_bias.saturating_sub(rank));
                })
                .or_insert(rank);
        }
    }

    let mut ranked: Vec<(&T, i64)> = scores.into_iter().collect();
    // stable sort, equal scores stay in first-seen order
    ranked.sort_by_key(|(_, score)| *score);
    if maxlen > 0 {
        ranked.truncate(maxlen);
    }
    Ok(ranked
        .into_iter()
        .map(|(item, score)| RankedItem {
            item: item.clone(),
            score,
        })
        .collect())
}
