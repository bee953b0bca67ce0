//! # Token Decoder Trait

use crate::{errors::BPResult, types::TokenType, vocab::size_hints::EXPECTED_BYTES_PER_TOKEN};

/// Trait for token decoders.
pub trait TokenDecoder<T: TokenType>: Send + Sync {
    /// Decodes tokens, appending the bytes to a target buffer.
    ///
    /// On error, `buf` may hold the bytes of the tokens before the
    /// offending one.
    ///
    /// ## Arguments
    /// * `tokens` - A slice of tokens to decode.
    /// * `buf` - The target byte buffer.
    fn try_decode_append(
        &self,
        tokens: &[T],
        buf: &mut Vec<u8>,
    ) -> BPResult<()>;

    /// Decodes tokens into bytes.
    ///
    /// ## Returns
    /// The decoded bytes, or [`crate::BytePairError::UnknownToken`].
    fn try_decode_to_bytes(
        &self,
        tokens: &[T],
    ) -> BPResult<Vec<u8>> {
        let capacity = (tokens.len() as f32 * EXPECTED_BYTES_PER_TOKEN) as usize;
        let mut buf = Vec::with_capacity(capacity);
        self.try_decode_append(tokens, &mut buf)?;
        Ok(buf)
    }

    /// Decodes a batch of token sequences into bytes.
    fn try_decode_batch_to_bytes(
        &self,
        batch: &[&[T]],
    ) -> BPResult<Vec<Vec<u8>>> {
        batch
            .iter()
            .map(|tokens| self.try_decode_to_bytes(tokens))
            .collect()
    }

    /// Decodes tokens into a string.
    ///
    /// UTF-8 lossy decoding is used to handle invalid UTF-8 sequences.
    fn try_decode_to_string(
        &self,
        tokens: &[T],
    ) -> BPResult<String> {
        self.try_decode_to_bytes(tokens)
            .map(|buf| String::from_utf8_lossy(&buf).into_owned())
    }

    /// Decodes a batch of token sequences into strings.
    ///
    /// UTF-8 lossy decoding is used to handle invalid UTF-8 sequences.
    fn try_decode_batch_to_strings(
        &self,
        batch: &[&[T]],
    ) -> BPResult<Vec<String>> {
        batch
            .iter()
            .map(|tokens| self.try_decode_to_string(tokens))
            .collect()
    }
}
