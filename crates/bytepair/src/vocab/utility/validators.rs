//! Validators for various configuration options.
use crate::{
    errors::{BPResult, BytePairError},
    types::TokenType,
};

/// The size of the u8 space.
pub const U8_SIZE: usize = u8::MAX as usize + 1;

/// Validates that a target vocabulary size fits in the token type `T`.
///
/// Sizes at or below [`U8_SIZE`] are accepted; they request no merges.
///
/// ## Returns
/// The vocab size, or [`BytePairError::VocabSizeOverflow`].
pub fn try_vocab_size<T: TokenType>(vocab_size: usize) -> BPResult<usize> {
    if vocab_size > U8_SIZE && T::from_usize(vocab_size - 1).is_none() {
        Err(BytePairError::VocabSizeOverflow { size: vocab_size })
    } else {
        Ok(vocab_size)
    }
}

/// The number of merges needed to grow a vocabulary of `current` tokens
/// to `vocab_size` tokens; zero if it is already that large.
pub fn merges_to_target(
    current: usize,
    vocab_size: usize,
) -> usize {
    vocab_size.saturating_sub(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocab_size() {
        assert_eq!(try_vocab_size::<u16>(256), Ok(256));
        assert_eq!(try_vocab_size::<u16>(100), Ok(100));
        assert_eq!(try_vocab_size::<u16>(0), Ok(0));

        assert_eq!(
            try_vocab_size::<u16>(u16::MAX as usize + 1),
            Ok(u16::MAX as usize + 1)
        );
        assert_eq!(
            try_vocab_size::<u16>(u16::MAX as usize + 2),
            Err(BytePairError::VocabSizeOverflow {
                size: u16::MAX as usize + 2
            })
        );

        assert_eq!(try_vocab_size::<u8>(256), Ok(256));
        assert!(try_vocab_size::<u8>(257).is_err());
    }

    #[test]
    fn test_merges_to_target() {
        assert_eq!(merges_to_target(256, 300), 44);
        assert_eq!(merges_to_target(256, 256), 0);
        assert_eq!(merges_to_target(256, 10), 0);
        assert_eq!(merges_to_target(290, 300), 10);
    }
}
