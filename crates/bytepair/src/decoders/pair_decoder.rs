//! # Pair Expansion ``{ T -> (T, T) }`` Token Decoder

use crate::{
    decoders::TokenDecoder,
    errors::{BPResult, BytePairError},
    types::{TokenType, token_to_u64},
    vocab::{ByteMapVocab, PairMergeVocab, TokenPairMap},
};

/// A stack-based pair map `{T -> (T, T) }` [`TokenDecoder`].
///
/// Expands merged tokens through their parent pairs down to byte tokens;
/// it needs only the merge rules, not the span table.
///
/// ## Style Hints
///
/// When there is no local ambiguity, instance names should prefer `decoder`;
/// and expand to `pair_decoder` when there is ambiguity.
#[derive(Debug, Clone)]
pub struct PairExpansionDecoder<T: TokenType> {
    /// Byte/token mapping table.
    pub byte_vocab: ByteMapVocab<T>,

    /// Token to pair mapping.
    pub token_pairs: TokenPairMap<T>,
}

impl<T: TokenType> PairExpansionDecoder<T> {
    /// Build a [`PairExpansionDecoder`] from a [`PairMergeVocab`].
    pub fn from_pair_vocab(pair_vocab: &PairMergeVocab<T>) -> Self {
        Self::init(pair_vocab.byte_vocab().clone(), pair_vocab.token_pairs())
    }

    /// Creates a new decoder.
    ///
    /// ## Arguments
    /// * `byte_vocab` - The byte vocabulary mapping.
    /// * `token_pairs` - The token to pair mapping.
    pub fn init(
        byte_vocab: ByteMapVocab<T>,
        token_pairs: TokenPairMap<T>,
    ) -> Self {
        Self {
            byte_vocab,
            token_pairs,
        }
    }
}

impl<T: TokenType> TokenDecoder<T> for PairExpansionDecoder<T> {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, tokens, buf)))]
    fn try_decode_append(
        &self,
        tokens: &[T],
        buf: &mut Vec<u8>,
    ) -> BPResult<()> {
        let mut stack = Vec::new();

        for (position, &token) in tokens.iter().enumerate() {
            stack.push(token);

            while let Some(t) = stack.pop() {
                if let Some(b) = self.byte_vocab.get_byte(t) {
                    buf.push(b);
                } else if let Some(&(a, b)) = self.token_pairs.get(&t) {
                    stack.push(b);
                    stack.push(a);
                } else {
                    // Parents always resolve, so only the top-level token can miss.
                    return Err(BytePairError::UnknownToken {
                        token: token_to_u64(token),
                        position,
                    });
                }
            }
        }
        Ok(())
    }
}
