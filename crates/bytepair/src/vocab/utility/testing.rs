//! # Testing Utilities

use crate::{types::TokenType, vocab::PairMergeVocab};

/// Sample texts shared by encoder and decoder tests.
pub const TEST_SAMPLES: &[&str] = &[
    "",
    "a",
    "hello world",
    "aaabdaaabac",
    "hello san francisco",
    "it's not the heat, it's the salt",
    "caf\u{00e9} na\u{00ef}ve \u{4f60}\u{597d}",
];

/// Build a small hand-written vocabulary.
///
/// | token | pair         | span     |
/// |-------|--------------|----------|
/// | 256   | `(a, a)`     | `"aa"`   |
/// | 257   | `(256, a)`   | `"aaa"`  |
/// | 258   | `(257, b)`   | `"aaab"` |
/// | 259   | `(h, e)`     | `"he"`   |
/// | 260   | `(l, l)`     | `"ll"`   |
/// | 261   | `(259, 260)` | `"hell"` |
pub fn build_test_vocab<T: TokenType>() -> PairMergeVocab<T> {
    let t = |v: usize| T::from_usize(v).unwrap();
    let b = |c: char| t(c as usize);

    PairMergeVocab::from_merges([
        (b('a'), b('a')),
        (t(256), b('a')),
        (t(257), b('b')),
        (b('h'), b('e')),
        (b('l'), b('l')),
        (t(259), t(260)),
    ])
    .unwrap()
}
