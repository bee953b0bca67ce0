//! # Dictionary ``{ T -> Vec<u8> }`` Token Decoder

use std::sync::Arc;

use crate::{
    decoders::TokenDecoder,
    errors::{BPResult, BytePairError},
    types::{TokenType, token_to_u64},
    vocab::PairMergeVocab,
};

/// A token dictionary [`TokenDecoder<T>`].
///
/// Looks up every token's expansion in the vocabulary's span table.
#[derive(Debug, Clone)]
pub struct DictionaryDecoder<T: TokenType> {
    vocab: Arc<PairMergeVocab<T>>,
}

impl<T: TokenType> DictionaryDecoder<T> {
    /// Creates a new decoder.
    pub fn new<V>(vocab: V) -> Self
    where
        V: Into<Arc<PairMergeVocab<T>>>,
    {
        Self {
            vocab: vocab.into(),
        }
    }

    /// Get the attached vocabulary.
    pub fn vocab(&self) -> &Arc<PairMergeVocab<T>> {
        &self.vocab
    }
}

impl<T: TokenType> TokenDecoder<T> for DictionaryDecoder<T> {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, tokens, buf)))]
    fn try_decode_append(
        &self,
        tokens: &[T],
        buf: &mut Vec<u8>,
    ) -> BPResult<()> {
        let spans = self.vocab.spans();
        for (position, &t) in tokens.iter().enumerate() {
            let span = spans
                .lookup_span(t)
                .ok_or_else(|| BytePairError::UnknownToken {
                    token: token_to_u64(t),
                    position,
                })?;
            buf.extend_from_slice(span);
        }
        Ok(())
    }
}
