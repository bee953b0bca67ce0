//! # Span ``{ T -> Vec<u8> }`` Expansion Store

use crate::{
    errors::{BPResult, BytePairError},
    types::{Pair, TokenType, token_to_u64},
    vocab::utility::validators::U8_SIZE,
};

/// Dense ``{ T -> Vec<u8> }`` expansion store.
///
/// Token `t` expands to `spans[t]`. Seeded with the 256 single-byte
/// spans; each merge appends the concatenation of its parents' spans.
/// Entries are never modified once written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanVocab<T: TokenType> {
    spans: Vec<Vec<u8>>,
    marker: core::marker::PhantomData<T>,
}

impl<T: TokenType> Default for SpanVocab<T> {
    fn default() -> Self {
        Self {
            spans: (0..U8_SIZE).map(|b| vec![b as u8]).collect(),
            marker: Default::default(),
        }
    }
}

impl<T: TokenType> SpanVocab<T> {
    /// The number of tokens in the vocabulary.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// The next token to be allocated.
    ///
    /// ## Returns
    /// The token, or an error if the token type is exhausted.
    pub fn next_token(&self) -> BPResult<T> {
        T::from_usize(self.spans.len()).ok_or(BytePairError::VocabSizeOverflow {
            size: self.spans.len() + 1,
        })
    }

    /// Looks up the expansion of a token.
    #[inline]
    pub fn lookup_span(
        &self,
        token: T,
    ) -> Option<&[u8]> {
        token
            .to_usize()
            .and_then(|idx| self.spans.get(idx))
            .map(Vec::as_slice)
    }

    /// Append the expansion of a merged pair.
    ///
    /// ## Arguments
    /// * `pair` - the parents; both must already be present.
    ///
    /// ## Returns
    /// The new token.
    pub fn push_pair(
        &mut self,
        pair: Pair<T>,
    ) -> BPResult<T> {
        let token = self.next_token()?;

        let missing = |t: T| {
            BytePairError::VocabConflict(format!(
                "pair {pair:?} parent {} is not defined",
                token_to_u64(t)
            ))
        };
        let a = self.lookup_span(pair.0).ok_or_else(|| missing(pair.0))?;
        let b = self.lookup_span(pair.1).ok_or_else(|| missing(pair.1))?;

        let mut span = Vec::with_capacity(a.len() + b.len());
        span.extend_from_slice(a);
        span.extend_from_slice(b);

        self.spans.push(span);
        Ok(token)
    }

    /// Reduce the capacity of the internal storage to fit its contents.
    pub fn shrink_to_fit(&mut self) {
        self.spans.shrink_to_fit();
    }
}
