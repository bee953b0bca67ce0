//! # Pair Merge ``{ (T, T) -> T }`` Token Vocabulary

use crate::{
    errors::{BPResult, BytePairError},
    types::{Pair, TokenType, token_to_u64},
    vocab::{
        ByteMapVocab,
        MergeRule,
        MergeTable,
        SpanVocab,
        TokenPairMap,
        utility::validators::U8_SIZE,
    },
};

/// Pair Merge Vocabulary.
///
/// - Grounded in a [`ByteMapVocab`] for byte-to-token mapping.
/// - A ranked [`MergeTable`] of ``(T, T) -> T`` rules.
/// - A [`SpanVocab`] holding the byte expansion of every token.
///
/// Merges are only ever appended, through [`PairMergeVocab::push_merge`],
/// which keeps the three tables consistent: merge `rank` produces token
/// ``256 + rank``, whose span is the concatenation of its parents' spans.
#[derive(Debug, Clone, PartialEq)]
pub struct PairMergeVocab<T: TokenType> {
    /// Byte/token mapping table.
    byte_vocab: ByteMapVocab<T>,

    /// Learned merges, in rank order.
    merges: MergeTable<T>,

    /// Token expansions.
    spans: SpanVocab<T>,
}

impl<T: TokenType> Default for PairMergeVocab<T> {
    fn default() -> Self {
        Self {
            byte_vocab: Default::default(),
            merges: Default::default(),
            spans: Default::default(),
        }
    }
}

impl<T: TokenType> PairMergeVocab<T> {
    /// Rebuild a vocabulary from an ordered list of merged pairs.
    ///
    /// Pair `i` is assigned token ``256 + i``.
    ///
    /// ## Arguments
    /// * `pairs` - the merged pairs, in rank order.
    ///
    /// ## Returns
    /// The vocabulary, or an error if a pair is repeated or references
    /// a token which is not yet defined.
    pub fn from_merges<I>(pairs: I) -> BPResult<Self>
    where
        I: IntoIterator<Item = Pair<T>>,
    {
        let mut vocab = Self::default();
        for pair in pairs {
            vocab.push_merge(pair)?;
        }
        Ok(vocab)
    }

    /// Get the byte/token mapping table.
    pub fn byte_vocab(&self) -> &ByteMapVocab<T> {
        &self.byte_vocab
    }

    /// Get the merge table.
    pub fn merges(&self) -> &MergeTable<T> {
        &self.merges
    }

    /// Get the span expansion table.
    pub fn spans(&self) -> &SpanVocab<T> {
        &self.spans
    }

    /// Get the number of tokens in the vocabulary.
    ///
    /// ## Returns
    /// The total number of tokens (bytes + merges).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Gets the highest token in the vocabulary.
    pub fn max_token(&self) -> T {
        self.merges
            .last()
            .map(|rule| rule.token)
            .unwrap_or_else(|| self.byte_vocab.max_token())
    }

    /// Looks up the merge rule for a pair.
    #[inline]
    pub fn lookup_pair(
        &self,
        pair: &Pair<T>,
    ) -> Option<&MergeRule<T>> {
        self.merges.lookup_rule(pair)
    }

    /// Looks up the byte expansion of a token.
    #[inline]
    pub fn lookup_span(
        &self,
        token: T,
    ) -> Option<&[u8]> {
        self.spans.lookup_span(token)
    }

    /// Appends a merge of `pair` into the next token.
    ///
    /// Either every table is updated, or (on error) none are.
    ///
    /// ## Returns
    /// The new rule.
    pub fn push_merge(
        &mut self,
        pair: Pair<T>,
    ) -> BPResult<MergeRule<T>> {
        if let Some(rank) = self.merges.lookup_rank(&pair) {
            return Err(BytePairError::VocabConflict(format!(
                "pair {pair:?} already merged at rank {rank}"
            )));
        }
        let token = self.spans.push_pair(pair)?;
        self.merges.push(pair, token)
    }

    /// Build the ``{ T -> (T, T) }`` inverse of the merge table.
    pub fn token_pairs(&self) -> TokenPairMap<T> {
        self.merges
            .iter()
            .map(|rule| (rule.token, rule.pair))
            .collect()
    }

    /// Reduce the capacity of the internal storage to fit its contents.
    pub fn shrink_to_fit(&mut self) {
        self.merges.shrink_to_fit();
        self.spans.shrink_to_fit();
    }

    /// Check the cross-table invariants.
    ///
    /// - `len() == 256 + merges().len()`.
    /// - merge `rank` produces token ``256 + rank``.
    /// - both parents of every merge precede its token.
    /// - every merge span is the concatenation of its parents' spans.
    pub fn try_validate(&self) -> BPResult<()> {
        if self.spans.len() != U8_SIZE + self.merges.len() {
            return Err(BytePairError::VocabConflict(format!(
                "span count {} does not match {} merges",
                self.spans.len(),
                self.merges.len()
            )));
        }

        for rule in self.merges.iter() {
            let token = token_to_u64(rule.token);
            if token != (U8_SIZE + rule.rank) as u64 {
                return Err(BytePairError::VocabConflict(format!(
                    "merge rank {} produces token {token}",
                    rule.rank
                )));
            }

            let (a, b) = rule.pair;
            if a >= rule.token || b >= rule.token {
                return Err(BytePairError::VocabConflict(format!(
                    "merge {:?} -> {token} references a later token",
                    rule.pair
                )));
            }

            let expected = [self.lookup_span(a), self.lookup_span(b)];
            let actual = self.lookup_span(rule.token);
            let consistent = match (expected, actual) {
                ([Some(a), Some(b)], Some(span)) => {
                    span.len() == a.len() + b.len() && span.starts_with(a) && span.ends_with(b)
                }
                _ => false,
            };
            if !consistent {
                return Err(BytePairError::VocabConflict(format!(
                    "span of token {token} does not expand merge {:?}",
                    rule.pair
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vocab() {
        let vocab: PairMergeVocab<u32> = PairMergeVocab::default();

        assert_eq!(vocab.len(), 256);
        assert_eq!(vocab.max_token(), 255);
        assert!(vocab.merges().is_empty());
        assert!(vocab.token_pairs().is_empty());
        vocab.try_validate().unwrap();
    }

    #[test]
    fn test_push_merge() {
        type T = u16;
        let mut vocab: PairMergeVocab<T> = PairMergeVocab::default();

        let rule = vocab.push_merge((97, 98)).unwrap();
        assert_eq!(
            rule,
            MergeRule {
                pair: (97, 98),
                token: 256,
                rank: 0
            }
        );

        let rule = vocab.push_merge((256, 256)).unwrap();
        assert_eq!(rule.token, 257);
        assert_eq!(rule.rank, 1);

        assert_eq!(vocab.len(), 258);
        assert_eq!(vocab.max_token(), 257);
        assert_eq!(vocab.lookup_span(257), Some(&b"abab"[..]));
        assert_eq!(vocab.lookup_pair(&(256, 256)).unwrap().token, 257);
        assert_eq!(vocab.lookup_pair(&(98, 97)), None);

        let token_pairs = vocab.token_pairs();
        assert_eq!(token_pairs.get(&256), Some(&(97, 98)));
        assert_eq!(token_pairs.get(&257), Some(&(256, 256)));

        vocab.try_validate().unwrap();
    }

    #[test]
    fn test_push_merge_conflicts_leave_vocab_untouched() {
        let mut vocab: PairMergeVocab<u32> = PairMergeVocab::default();
        vocab.push_merge((97, 98)).unwrap();
        let before = vocab.clone();

        assert!(matches!(
            vocab.push_merge((97, 98)),
            Err(BytePairError::VocabConflict(_))
        ));
        assert!(matches!(
            vocab.push_merge((97, 400)),
            Err(BytePairError::VocabConflict(_))
        ));

        assert_eq!(vocab, before);
    }

    #[test]
    fn test_from_merges() {
        let vocab: PairMergeVocab<u32> =
            PairMergeVocab::from_merges([(97, 97), (256, 97), (257, 98)]).unwrap();

        assert_eq!(vocab.len(), 259);
        assert_eq!(vocab.lookup_span(258), Some(&b"aaab"[..]));
        vocab.try_validate().unwrap();

        assert!(PairMergeVocab::<u32>::from_merges([(97, 97), (97, 97)]).is_err());
        assert!(PairMergeVocab::<u32>::from_merges([(257, 97)]).is_err());
    }
}
