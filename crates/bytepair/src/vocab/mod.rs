//! # Vocabulary
//!
//! This module provides the trained tokenizer state.
//!
//! ## Byte Vocabulary
//!
//! Tokens ``0..=255`` are the raw byte values; [`ByteMapVocab`] translates
//! between bytes and byte-tokens.
//!
//! ## Merge Table
//!
//! [`MergeTable`] is the append-only, ranked list of learned
//! ``(T, T) -> T`` [`MergeRule`]s; rank ``0`` is the first merge learned.
//!
//! ## Span Vocabulary
//!
//! [`SpanVocab`] is the dense ``{ T -> Vec<u8> }`` expansion store,
//! seeded with the 256 single-byte spans and grown by one entry per merge.
//!
//! ## Pair Merge Vocabulary
//!
//! The primary user-oriented vocabulary is [`PairMergeVocab`], which
//! keeps the three tables consistent as merges are appended.

pub mod byte_vocab;
pub mod merge_table;
pub mod pair_vocab;
pub mod size_hints;
pub mod span_vocab;
pub mod utility;
pub mod vocab_types;

#[doc(inline)]
pub use byte_vocab::ByteMapVocab;
#[doc(inline)]
pub use merge_table::{MergeRule, MergeTable};
#[doc(inline)]
pub use pair_vocab::PairMergeVocab;
#[doc(inline)]
pub use span_vocab::SpanVocab;
#[doc(inline)]
pub use vocab_types::{ByteTokenArray, PairRankMap, TokenPairMap};
