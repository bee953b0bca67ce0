//! # Ranked Merge Table
//!
//! The ordered ``(T, T) -> T`` rules learned by training.

use crate::{
    errors::{BPResult, BytePairError},
    types::{Pair, TokenType, hash_map_new},
    vocab::PairRankMap,
};

/// A learned merge rule: ``pair -> token``, learned at position `rank`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MergeRule<T: TokenType> {
    /// The merged pair.
    pub pair: Pair<T>,

    /// The token the pair is rewritten to.
    pub token: T,

    /// The learn order; ``0`` is the first merge learned.
    pub rank: usize,
}

/// Append-only table of [`MergeRule`]s.
///
/// Rules are stored in rank order, with a ``{ pair -> rank }`` index
/// for constant time lookup during encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeTable<T: TokenType> {
    rules: Vec<MergeRule<T>>,
    pair_ranks: PairRankMap<T>,
}

impl<T: TokenType> Default for MergeTable<T> {
    fn default() -> Self {
        Self {
            rules: Vec::new(),
            pair_ranks: hash_map_new(),
        }
    }
}

impl<T: TokenType> MergeTable<T> {
    /// The number of learned merges.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no merges have been learned.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The rules, in rank order.
    pub fn rules(&self) -> &[MergeRule<T>] {
        &self.rules
    }

    /// Iterate over the rules, in rank order.
    pub fn iter(&self) -> impl Iterator<Item = &MergeRule<T>> {
        self.rules.iter()
    }

    /// The most recently learned rule.
    pub fn last(&self) -> Option<&MergeRule<T>> {
        self.rules.last()
    }

    /// Looks up the rank of a pair.
    ///
    /// ## Returns
    /// The rank, or `None` if the pair was never merged.
    #[inline]
    pub fn lookup_rank(
        &self,
        pair: &Pair<T>,
    ) -> Option<usize> {
        self.pair_ranks.get(pair).copied()
    }

    /// Looks up the rule for a pair.
    #[inline]
    pub fn lookup_rule(
        &self,
        pair: &Pair<T>,
    ) -> Option<&MergeRule<T>> {
        self.lookup_rank(pair).map(|rank| &self.rules[rank])
    }

    /// Looks up the rule learned at `rank`.
    pub fn get(
        &self,
        rank: usize,
    ) -> Option<&MergeRule<T>> {
        self.rules.get(rank)
    }

    /// Returns true if the pair has a rule.
    pub fn contains_pair(
        &self,
        pair: &Pair<T>,
    ) -> bool {
        self.pair_ranks.contains_key(pair)
    }

    /// Appends a new rule with the next rank.
    ///
    /// ## Arguments
    /// * `pair` - the merged pair; must not already have a rule.
    /// * `token` - the token the pair is rewritten to.
    ///
    /// ## Returns
    /// The appended rule.
    pub fn push(
        &mut self,
        pair: Pair<T>,
        token: T,
    ) -> BPResult<MergeRule<T>> {
        if let Some(rank) = self.lookup_rank(&pair) {
            return Err(BytePairError::VocabConflict(format!(
                "pair {pair:?} already merged at rank {rank}"
            )));
        }

        let rule = MergeRule {
            pair,
            token,
            rank: self.rules.len(),
        };
        self.pair_ranks.insert(pair, rule.rank);
        self.rules.push(rule);
        Ok(rule)
    }

    /// Reduce the capacity of the internal storage to fit its contents.
    pub fn shrink_to_fit(&mut self) {
        self.rules.shrink_to_fit();
        self.pair_ranks.shrink_to_fit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_table() {
        type T = u32;
        let mut table: MergeTable<T> = MergeTable::default();
        assert!(table.is_empty());
        assert_eq!(table.last(), None);

        let rule = table.push((104, 101), 256).unwrap();
        assert_eq!(
            rule,
            MergeRule {
                pair: (104, 101),
                token: 256,
                rank: 0
            }
        );

        table.push((256, 108), 257).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup_rank(&(104, 101)), Some(0));
        assert_eq!(table.lookup_rank(&(256, 108)), Some(1));

        // Order matters.
        assert_eq!(table.lookup_rank(&(101, 104)), None);
        assert!(!table.contains_pair(&(101, 104)));

        assert_eq!(table.lookup_rule(&(256, 108)).unwrap().token, 257);
        assert_eq!(table.get(0).unwrap().pair, (104, 101));
        assert_eq!(table.get(2), None);
        assert_eq!(table.last().unwrap().rank, 1);

        assert_eq!(
            table.iter().map(|r| r.token).collect::<Vec<_>>(),
            vec![256, 257]
        );
    }

    #[test]
    fn test_duplicate_pair_rejected() {
        let mut table: MergeTable<u16> = MergeTable::default();
        table.push((1, 2), 256).unwrap();

        let err = table.push((1, 2), 257).unwrap_err();
        assert!(matches!(err, BytePairError::VocabConflict(_)));

        // Failed pushes leave the table untouched.
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup_rule(&(1, 2)).unwrap().token, 256);
    }
}
