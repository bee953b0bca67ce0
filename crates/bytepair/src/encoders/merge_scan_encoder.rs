//! # Merge Scan Encoder
//!
//! Repeatedly scans for the lowest ranked merge available,
//! iterates until no more merges remain.

use std::sync::Arc;

use crate::{
    encoders::TokenEncoder,
    errors::{BPResult, BytePairError},
    training::utility::TokenSpanBuf,
    types::TokenType,
    vocab::{MergeTable, PairMergeVocab},
};

/// Apply the ranked merges of `merges` to `span` until none apply.
///
/// Each round selects, among the adjacent pairs present in the span, the
/// one with the lowest rank (the earliest learned), and merges every
/// non-overlapping occurrence of it. Pairs without a rule are ignored.
pub fn merge_scan<T: TokenType>(
    merges: &MergeTable<T>,
    span: &mut TokenSpanBuf<T>,
) {
    while span.len() >= 2 {
        let best = span
            .pairs()
            .filter_map(|pair| merges.lookup_rule(&pair))
            .min_by_key(|rule| rule.rank)
            .copied();

        let Some(rule) = best else {
            // No more merges possible.
            break;
        };
        span.merge_pair(rule.pair, rule.token);
    }
}

/// A [`TokenEncoder`] using [`merge_scan`].
///
/// ## Style Hints
///
/// When there is no local ambiguity, instance names should prefer `encoder`.
#[derive(Debug, Clone)]
pub struct MergeScanEncoder<T: TokenType> {
    vocab: Arc<PairMergeVocab<T>>,
    max_input_len: Option<usize>,
}

impl<T: TokenType> MergeScanEncoder<T> {
    /// Create a new encoder with no input length limit.
    pub fn new<V>(vocab: V) -> Self
    where
        V: Into<Arc<PairMergeVocab<T>>>,
    {
        Self {
            vocab: vocab.into(),
            max_input_len: None,
        }
    }

    /// Sets the input length limit, in bytes.
    pub fn with_max_input_len(
        self,
        max_input_len: Option<usize>,
    ) -> Self {
        Self {
            max_input_len,
            ..self
        }
    }

    /// Get the attached vocabulary.
    pub fn vocab(&self) -> &Arc<PairMergeVocab<T>> {
        &self.vocab
    }

    /// Get the input length limit.
    pub fn max_input_len(&self) -> Option<usize> {
        self.max_input_len
    }
}

impl<T: TokenType> TokenEncoder<T> for MergeScanEncoder<T> {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text, tokens)))]
    fn try_encode_append(
        &self,
        text: &[u8],
        tokens: &mut Vec<T>,
    ) -> BPResult<()> {
        if let Some(limit) = self.max_input_len
            && text.len() > limit
        {
            return Err(BytePairError::InputTooLarge {
                size: text.len(),
                limit,
            });
        }

        let mut span = TokenSpanBuf::from_bytes(text, self.vocab.byte_vocab());
        merge_scan(self.vocab.merges(), &mut span);

        tokens.extend_from_slice(span.tokens());
        Ok(())
    }
}
