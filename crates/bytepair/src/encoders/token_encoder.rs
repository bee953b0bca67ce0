//! # Token Encoder Trait

use crate::{errors::BPResult, types::TokenType};

/// A trait for token encoders.
pub trait TokenEncoder<T: TokenType>: Send + Sync {
    /// Encode bytes, appending the tokens to a target buffer.
    ///
    /// ## Arguments
    /// * `text` - The raw bytes to encode.
    /// * `tokens` - The target token buffer to append to.
    fn try_encode_append(
        &self,
        text: &[u8],
        tokens: &mut Vec<T>,
    ) -> BPResult<()>;

    /// Encode bytes into tokens.
    ///
    /// ## Returns
    /// A `Result` containing the vector of tokens or an error.
    fn try_encode(
        &self,
        text: &[u8],
    ) -> BPResult<Vec<T>> {
        let mut tokens = Vec::with_capacity(text.len());
        self.try_encode_append(text, &mut tokens)?;
        Ok(tokens)
    }

    /// Encode a batch of texts into tokens.
    ///
    /// ## Returns
    /// A `Result` containing one token vector per text, or the first error.
    fn try_encode_batch(
        &self,
        batch: &[&[u8]],
    ) -> BPResult<Vec<Vec<T>>> {
        batch.iter().map(|text| self.try_encode(text)).collect()
    }
}
