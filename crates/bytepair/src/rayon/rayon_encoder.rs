//! # Parallel Encoder

use rayon::prelude::*;

use crate::{encoders::TokenEncoder, errors::BPResult, types::TokenType};

/// Batch-Level Parallel Encoder Wrapper.
///
/// Enables ``rayon`` encoding of batches.
#[derive(Debug, Clone)]
pub struct ParallelRayonEncoder<T: TokenType, E: TokenEncoder<T>> {
    /// Inner encoder.
    pub inner: E,

    _marker: std::marker::PhantomData<T>,
}

impl<T, E> ParallelRayonEncoder<T, E>
where
    T: TokenType,
    E: TokenEncoder<T>,
{
    /// Create a new parallel encoder.
    ///
    /// ## Arguments
    /// * `inner` - The token encoder to wrap.
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<T, E> TokenEncoder<T> for ParallelRayonEncoder<T, E>
where
    T: TokenType,
    E: TokenEncoder<T>,
{
    fn try_encode_append(
        &self,
        text: &[u8],
        tokens: &mut Vec<T>,
    ) -> BPResult<()> {
        self.inner.try_encode_append(text, tokens)
    }

    fn try_encode_batch(
        &self,
        batch: &[&[u8]],
    ) -> BPResult<Vec<Vec<T>>> {
        batch
            .par_iter()
            .map(|text| self.inner.try_encode(text))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Tokenizer,
        compat::traits::static_is_send_sync_check,
        vocab::utility::testing::TEST_SAMPLES,
    };

    #[test]
    fn test_parallel_encoder() {
        type T = u32;
        let mut tokenizer: Tokenizer<T> = Tokenizer::default();
        tokenizer
            .train(TEST_SAMPLES.concat(), 400, false)
            .unwrap();

        let encoder = ParallelRayonEncoder::new(tokenizer.encoder());
        static_is_send_sync_check(&encoder);

        let batch: Vec<&[u8]> = TEST_SAMPLES.iter().map(|s| s.as_bytes()).collect();
        let expected = tokenizer.encoder().try_encode_batch(&batch).unwrap();

        assert_eq!(encoder.try_encode_batch(&batch).unwrap(), expected);
        assert_eq!(
            encoder.try_encode(b"hello world").unwrap(),
            tokenizer.encode("hello world").unwrap()
        );
    }
}
