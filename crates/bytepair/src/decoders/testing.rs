//! # Decoder Test Utilities

use std::sync::Arc;

use crate::{
    decoders::TokenDecoder,
    encoders::{MergeScanEncoder, TokenEncoder},
    errors::BytePairError,
    types::TokenType,
    vocab::{PairMergeVocab, utility::testing::TEST_SAMPLES},
};

/// Shared decoder checks over a [`build_test_vocab`] vocabulary.
///
/// [`build_test_vocab`]: crate::vocab::utility::testing::build_test_vocab
pub fn common_decoder_unit_test<T: TokenType, D: TokenDecoder<T>>(
    vocab: Arc<PairMergeVocab<T>>,
    decoder: &D,
) {
    let t = |v: usize| T::from_usize(v).unwrap();

    assert_eq!(decoder.try_decode_to_bytes(&[]).unwrap(), b"");
    assert_eq!(
        decoder
            .try_decode_to_bytes(&[t(261), t(111), t(32), t(258)])
            .unwrap(),
        b"hello aaab"
    );

    let encoder = MergeScanEncoder::new(vocab.clone());
    let token_batch: Vec<Vec<T>> = TEST_SAMPLES
        .iter()
        .map(|s| encoder.try_encode(s.as_bytes()).unwrap())
        .collect();
    let token_refs: Vec<&[T]> = token_batch.iter().map(|v| v.as_slice()).collect();

    // Test the batch interfaces.
    assert_eq!(
        decoder.try_decode_batch_to_strings(&token_refs).unwrap(),
        TEST_SAMPLES
    );
    assert_eq!(
        decoder.try_decode_batch_to_bytes(&token_refs).unwrap(),
        TEST_SAMPLES
            .iter()
            .map(|s| s.as_bytes().to_vec())
            .collect::<Vec<_>>()
    );

    // Test the single-sample interfaces.
    for (sample, tokens) in TEST_SAMPLES.iter().zip(token_batch.iter()) {
        assert_eq!(&decoder.try_decode_to_string(tokens).unwrap(), sample);
    }

    // Unknown tokens are reported with their position.
    let unknown = t(vocab.len());
    assert_eq!(
        decoder.try_decode_to_bytes(&[t(104), t(105), unknown]),
        Err(BytePairError::UnknownToken {
            token: vocab.len() as u64,
            position: 2,
        })
    );

    // Invalid UTF-8 is decoded lossily as a string, exactly as bytes.
    assert_eq!(decoder.try_decode_to_bytes(&[t(0xff)]).unwrap(), vec![0xff]);
    assert_eq!(decoder.try_decode_to_string(&[t(0xff)]).unwrap(), "\u{fffd}");
}
