//! # `bytepair` Byte-Level BPE Tokenizer
//!
//! A byte-level Byte Pair Encoding tokenizer.
//!
//! Training learns an ordered table of merge rules from raw bytes, by
//! repeatedly merging the most frequent adjacent symbol pair. Encoding
//! replays those rules over new text, earliest-learned first; decoding
//! expands every token back into the bytes it stands for.
//!
//! See:
//! * [`Tokenizer`] for the combined construct / train / encode / decode surface.
//! * [`training`] to learn a [`vocab::PairMergeVocab`].
//! * [`encoders`] to encode bytes into tokens.
//! * [`decoders`] to decode tokens into bytes.
//! * [`vocab`] for the byte table, the merge table, and the expansion store.
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
//!
//! ## Example
//!
//! ```rust
//! use bytepair::Tokenizer;
//!
//! let text = "hello world the sky is blue";
//!
//! let mut tokenizer: Tokenizer<u32> = Tokenizer::default();
//! let report = tokenizer.train(text, 300, false).unwrap();
//! assert_eq!(report.merges_done, 1);
//!
//! let tokens = tokenizer.encode(text).unwrap();
//! assert_eq!(&tokens[..2], &[256, 108]);
//!
//! let bytes = tokenizer.decode(&tokens).unwrap();
//! assert_eq!(bytes, text.as_bytes());
//! ```
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod compat;
pub mod decoders;
pub mod encoders;
pub mod errors;
pub mod tokenizer;
pub mod training;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use decoders::TokenDecoder;
#[doc(inline)]
pub use encoders::TokenEncoder;
#[doc(inline)]
pub use errors::{BPResult, BytePairError};
#[doc(inline)]
pub use tokenizer::{Tokenizer, TokenizerOptions};
#[doc(inline)]
pub use types::{Pair, TokenType};
#[doc(inline)]
pub use vocab::PairMergeVocab;
