//! # Combined Tokenizer

use std::sync::Arc;

use crate::{
    decoders::{DictionaryDecoder, TokenDecoder},
    encoders::{MergeScanEncoder, TokenEncoder},
    errors::BPResult,
    training::{BinaryPairVocabTrainerOptions, TrainReport},
    types::TokenType,
    vocab::PairMergeVocab,
};

/// Options for configuring a [`Tokenizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenizerOptions {
    /// Optional limit, in bytes, on text passed to train or encode.
    ///
    /// Longer inputs fail with [`crate::BytePairError::InputTooLarge`];
    /// they are never truncated.
    pub max_input_len: Option<usize>,
}

impl TokenizerOptions {
    /// Sets the input length limit.
    pub fn with_max_input_len(
        self,
        max_input_len: Option<usize>,
    ) -> Self {
        Self { max_input_len }
    }

    /// Build a fresh [`Tokenizer`].
    pub fn build<T: TokenType>(&self) -> Tokenizer<T> {
        Tokenizer::new(*self)
    }
}

/// Byte-level BPE tokenizer.
///
/// Owns a [`PairMergeVocab`], seeded with the 256 byte tokens.
/// [`Tokenizer::train`] is the only mutator; encoding and decoding
/// only read the vocabulary.
///
/// The vocabulary is held in an [`Arc`]; encoders and decoders handed out
/// by [`Tokenizer::encoder`] / [`Tokenizer::decoder`] share it, and keep
/// their snapshot if the tokenizer is trained further.
#[derive(Debug, Clone)]
pub struct Tokenizer<T: TokenType> {
    options: TokenizerOptions,
    vocab: Arc<PairMergeVocab<T>>,
}

impl<T: TokenType> Default for Tokenizer<T> {
    fn default() -> Self {
        Self::new(TokenizerOptions::default())
    }
}

impl<T: TokenType> Tokenizer<T> {
    /// Create a fresh tokenizer: 256 byte tokens, no merges.
    pub fn new(options: TokenizerOptions) -> Self {
        Self::from_vocab(PairMergeVocab::default(), options)
    }

    /// Create a tokenizer over an existing vocabulary.
    pub fn from_vocab<V>(
        vocab: V,
        options: TokenizerOptions,
    ) -> Self
    where
        V: Into<Arc<PairMergeVocab<T>>>,
    {
        Self {
            options,
            vocab: vocab.into(),
        }
    }

    /// Get the options.
    pub fn options(&self) -> &TokenizerOptions {
        &self.options
    }

    /// Get the underlying vocabulary.
    pub fn vocab(&self) -> &Arc<PairMergeVocab<T>> {
        &self.vocab
    }

    /// The number of tokens in the vocabulary.
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    /// Learn merges from `text` until the vocabulary holds `vocab_size`
    /// tokens, or no pair repeats.
    ///
    /// A `vocab_size` at or below the current size learns nothing.
    ///
    /// ## Arguments
    /// * `text` - raw training bytes.
    /// * `vocab_size` - the target total vocabulary size.
    /// * `verbose` - log one ``Merge i/total: (a, b) -> t`` line per merge.
    pub fn train<B: AsRef<[u8]>>(
        &mut self,
        text: B,
        vocab_size: usize,
        verbose: bool,
    ) -> BPResult<TrainReport> {
        let trainer = BinaryPairVocabTrainerOptions::new(vocab_size)
            .with_verbose(verbose)
            .with_max_input_len(self.options.max_input_len)
            .init();

        trainer.train(Arc::make_mut(&mut self.vocab), text.as_ref())
    }

    /// Build an encoder sharing this tokenizer's vocabulary.
    pub fn encoder(&self) -> MergeScanEncoder<T> {
        MergeScanEncoder::new(self.vocab.clone()).with_max_input_len(self.options.max_input_len)
    }

    /// Build a decoder sharing this tokenizer's vocabulary.
    pub fn decoder(&self) -> DictionaryDecoder<T> {
        DictionaryDecoder::new(self.vocab.clone())
    }

    /// Encode bytes into tokens, using only learned merges.
    pub fn encode<B: AsRef<[u8]>>(
        &self,
        text: B,
    ) -> BPResult<Vec<T>> {
        self.encoder().try_encode(text.as_ref())
    }

    /// Decode tokens into bytes.
    ///
    /// ## Returns
    /// The bytes, or [`crate::BytePairError::UnknownToken`].
    pub fn decode(
        &self,
        tokens: &[T],
    ) -> BPResult<Vec<u8>> {
        self.decoder().try_decode_to_bytes(tokens)
    }
}
