//! # Error Types

/// Errors from bytepair operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BytePairError {
    /// A token has no vocabulary entry.
    #[error("unknown token {token} at position {position}")]
    UnknownToken {
        /// The unknown token value.
        token: u64,

        /// The position of the token in the decoded sequence.
        position: usize,
    },

    /// Input exceeds the configured length limit.
    #[error("input too large: {size} bytes exceeds limit of {limit}")]
    InputTooLarge {
        /// The size of the rejected input.
        size: usize,

        /// The configured limit.
        limit: usize,
    },

    /// Vocab size exceeds the capacity of the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// Vocabulary data is inconsistent.
    #[error("{0}")]
    VocabConflict(String),
}

/// Result type for bytepair operations.
pub type BPResult<T> = core::result::Result<T, BytePairError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            BytePairError::UnknownToken {
                token: 99999,
                position: 0
            }
            .to_string(),
            "unknown token 99999 at position 0"
        );
        assert_eq!(
            BytePairError::InputTooLarge {
                size: 2048,
                limit: 1024
            }
            .to_string(),
            "input too large: 2048 bytes exceeds limit of 1024"
        );
        assert_eq!(
            BytePairError::VocabSizeOverflow { size: 70000 }.to_string(),
            "vocab size (70000) exceeds token type capacity"
        );
    }
}
