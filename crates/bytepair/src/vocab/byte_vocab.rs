//! # Byte/Token Mapping Table

use core::fmt::Debug;

use crate::{
    types::TokenType,
    vocab::{ByteTokenArray, utility::validators::U8_SIZE},
};

/// ``0..=255`` Byte/Token Identity Table.
///
/// Byte `b` is always token `b`; the table exists so the hot loops
/// translate bytes without going through fallible numeric casts.
#[derive(Clone, PartialEq)]
pub struct ByteMapVocab<T: TokenType> {
    /// Table mapping from byte ordinal (position) to token.
    byte_tokens: ByteTokenArray<T>,
}

impl<T: TokenType> Debug for ByteMapVocab<T> {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("ByteMapVocab")
            .field("max_token", &self.max_token())
            .finish()
    }
}

impl<T: TokenType> Default for ByteMapVocab<T> {
    fn default() -> Self {
        // Every unsigned token type can hold a u8.
        let byte_tokens = core::array::from_fn(|b| T::from_usize(b).unwrap_or_default());
        Self { byte_tokens }
    }
}

impl<T: TokenType> ByteMapVocab<T> {
    /// Get the byte-ord => token mapping table.
    pub fn byte_tokens(&self) -> &ByteTokenArray<T> {
        &self.byte_tokens
    }

    /// The number of byte tokens; always 256.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        U8_SIZE
    }

    /// The largest byte token.
    pub fn max_token(&self) -> T {
        self.byte_tokens[U8_SIZE - 1]
    }

    /// Get the token corresponding to a given byte.
    #[inline(always)]
    pub fn get_token(
        &self,
        byte: u8,
    ) -> T {
        self.byte_tokens[byte as usize]
    }

    /// Append the translated byte tokens to a target buffer.
    ///
    /// ## Arguments
    /// * `bytes` - The slice of bytes to translate and append.
    /// * `tokens` - The target token buffer.
    #[inline(always)]
    pub fn append_tokens(
        &self,
        bytes: &[u8],
        tokens: &mut Vec<T>,
    ) {
        tokens.extend(bytes.iter().map(|&b| self.get_token(b)));
    }

    /// Get the byte corresponding to a given token, if any.
    #[inline(always)]
    pub fn get_byte(
        &self,
        token: T,
    ) -> Option<u8> {
        token.to_u8()
    }
}
