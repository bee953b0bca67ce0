//! # Token Span Buffer

use crate::{
    types::{Pair, TokenType},
    vocab::ByteMapVocab,
};

/// A mutable span of tokens.
///
/// Iteratively rewritten during BPE vocabulary training and encoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenSpanBuf<T: TokenType> {
    tokens: Vec<T>,
}

impl<T: TokenType, S: AsRef<[T]>> From<S> for TokenSpanBuf<T> {
    fn from(tokens: S) -> Self {
        Self::from_tokens(tokens)
    }
}

impl<T: TokenType> TokenSpanBuf<T> {
    /// Create a new span buffer from tokens.
    pub fn from_tokens<S>(tokens: S) -> Self
    where
        S: AsRef<[T]>,
    {
        Self {
            tokens: tokens.as_ref().to_vec(),
        }
    }

    /// Create a new span buf from a byte slice.
    ///
    /// # Arguments
    /// * `bytes` - the bytes to translate to byte-level tokens.
    /// * `byte_vocab` - the translation for the byte tokens.
    pub fn from_bytes<B: AsRef<[u8]>>(
        bytes: B,
        byte_vocab: &ByteMapVocab<T>,
    ) -> Self {
        let bytes = bytes.as_ref();
        let mut tokens = Vec::with_capacity(bytes.len());
        byte_vocab.append_tokens(bytes, &mut tokens);
        Self { tokens }
    }

    /// View the tokens as a slice.
    pub fn tokens(&self) -> &[T] {
        &self.tokens
    }

    /// Consume the buffer, returning the tokens.
    pub fn into_tokens(self) -> Vec<T> {
        self.tokens
    }

    /// Get the length of the span.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Is this span empty?
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Get an iterator over [`Pair<T>`] windows of this span.
    pub fn pairs(&self) -> impl Iterator<Item = Pair<T>> + '_ {
        self.tokens.windows(2).map(|w| (w[0], w[1]))
    }

    /// Merge all non-overlapping occurrences of `pair -> replacement`.
    ///
    /// A single left-to-right pass; a matched pair consumes both of its
    /// tokens, so ``[a, a, a]`` merging ``(a, a)`` yields ``[x, a]``.
    ///
    /// # Arguments
    /// * `pair` - the pair to merge.
    /// * `replacement` - the token to replace `pair` with.
    ///
    /// # Returns
    /// The number of merges performed; the span shrinks by that much.
    pub fn merge_pair(
        &mut self,
        pair: Pair<T>,
        replacement: T,
    ) -> usize {
        let n = self.tokens.len();
        if n < 2 {
            return 0;
        }

        // The write cursor never passes the read cursor,
        // so the span is compacted in place.
        let mut write = 0;
        let mut read = 0;
        while read < n {
            let current = self.tokens[read];
            if read + 1 < n && pair == (current, self.tokens[read + 1]) {
                self.tokens[write] = replacement;
                read += 2;
            } else {
                self.tokens[write] = current;
                read += 1;
            }
            write += 1;
        }

        self.tokens.truncate(write);
        n - write
    }
}
