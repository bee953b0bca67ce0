//! # Adjacent Pair Counter

use core::cmp::Reverse;

use crate::types::{BPHashMap, Pair, TokenType, hash_map_new};

/// Count statistics for one [`Pair`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairStat {
    /// Number of (possibly overlapping) occurrences.
    pub count: usize,

    /// Window index of the first occurrence.
    pub first_seen: usize,
}

/// Counts adjacent pairs over a token sequence.
///
/// Every window ``(tokens[i], tokens[i + 1])`` is counted, so overlapping
/// occurrences all count: ``[a, a, a]`` yields ``(a, a): 2``.
///
/// The counter is reusable; [`PairCounter::count`] clears the previous
/// counts but keeps the allocation.
#[derive(Debug, Clone)]
pub struct PairCounter<T: TokenType> {
    stats: BPHashMap<Pair<T>, PairStat>,
}

impl<T: TokenType> Default for PairCounter<T> {
    fn default() -> Self {
        Self {
            stats: hash_map_new(),
        }
    }
}

impl<T: TokenType> PairCounter<T> {
    /// Build a counter over `tokens`.
    pub fn from_tokens(tokens: &[T]) -> Self {
        let mut counter = Self::default();
        counter.count(tokens);
        counter
    }

    /// Replace the current counts with the pair counts of `tokens`.
    ///
    /// Sequences shorter than two tokens produce no pairs.
    pub fn count(
        &mut self,
        tokens: &[T],
    ) {
        self.stats.clear();
        for (idx, w) in tokens.windows(2).enumerate() {
            self.stats
                .entry((w[0], w[1]))
                .and_modify(|stat| stat.count += 1)
                .or_insert(PairStat {
                    count: 1,
                    first_seen: idx,
                });
        }
    }

    /// The number of distinct pairs.
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    /// Returns true if no pairs were counted.
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// The count of `pair`; zero if absent.
    pub fn get_count(
        &self,
        pair: &Pair<T>,
    ) -> usize {
        self.stats.get(pair).map_or(0, |stat| stat.count)
    }

    /// The statistics of `pair`, if it was seen.
    pub fn get_stat(
        &self,
        pair: &Pair<T>,
    ) -> Option<PairStat> {
        self.stats.get(pair).copied()
    }

    /// Iterate over the counted pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (Pair<T>, PairStat)> + '_ {
        self.stats.iter().map(|(&pair, &stat)| (pair, stat))
    }

    /// Select the most frequent pair.
    ///
    /// Ties on count go to the pair whose first occurrence is leftmost
    /// (first-seen wins). First-seen indices are unique per pair, so the
    /// choice does not depend on hash iteration order.
    pub fn most_frequent(&self) -> Option<(Pair<T>, PairStat)> {
        self.iter()
            .max_by_key(|(_, stat)| (stat.count, Reverse(stat.first_seen)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_sequences() {
        let counter: PairCounter<u32> = PairCounter::from_tokens(&[]);
        assert!(counter.is_empty());
        assert_eq!(counter.most_frequent(), None);

        let counter: PairCounter<u32> = PairCounter::from_tokens(&[7]);
        assert!(counter.is_empty());
    }

    #[test]
    fn test_overlapping_pairs() {
        let counter: PairCounter<u32> = PairCounter::from_tokens(&[1, 1, 1]);

        assert_eq!(counter.len(), 1);
        assert_eq!(
            counter.get_stat(&(1, 1)),
            Some(PairStat {
                count: 2,
                first_seen: 0
            })
        );
    }

    #[test]
    fn test_counts_are_ordered_pairs() {
        let counter: PairCounter<u16> = PairCounter::from_tokens(&[1, 2, 1, 2, 3]);

        assert_eq!(counter.get_count(&(1, 2)), 2);
        assert_eq!(counter.get_count(&(2, 1)), 1);
        assert_eq!(counter.get_count(&(2, 3)), 1);
        assert_eq!(counter.get_count(&(3, 2)), 0);
        assert_eq!(counter.get_stat(&(2, 3)).unwrap().first_seen, 3);

        let total: usize = counter.iter().map(|(_, stat)| stat.count).sum();
        assert_eq!(total, 4);
    }

    #[test]
    fn test_most_frequent_first_seen_wins() {
        // (3, 4) and (1, 2) both occur twice; (3, 4) is seen first.
        let counter: PairCounter<u32> = PairCounter::from_tokens(&[3, 4, 1, 2, 9, 3, 4, 1, 2]);

        assert_eq!(counter.get_count(&(3, 4)), 2);
        assert_eq!(counter.get_count(&(1, 2)), 2);
        assert_eq!(counter.get_count(&(4, 1)), 2);

        let (pair, stat) = counter.most_frequent().unwrap();
        assert_eq!(pair, (3, 4));
        assert_eq!(stat.count, 2);
        assert_eq!(stat.first_seen, 0);
    }

    #[test]
    fn test_most_frequent_prefers_count() {
        let counter: PairCounter<u32> = PairCounter::from_tokens(&[5, 6, 7, 7, 7, 7]);

        assert_eq!(counter.most_frequent().unwrap().0, (7, 7));
    }

    #[test]
    fn test_recount_clears() {
        let mut counter: PairCounter<u32> = PairCounter::from_tokens(&[1, 2, 3]);
        counter.count(&[4, 5]);

        assert_eq!(counter.len(), 1);
        assert_eq!(counter.get_count(&(1, 2)), 0);
        assert_eq!(counter.get_count(&(4, 5)), 1);
    }
}
