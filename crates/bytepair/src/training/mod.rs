//! # Vocabulary Training
//!
//! Support for learning [`crate::vocab::PairMergeVocab`] merge tables
//! from raw bytes.
//!
//! Each training step:
//! 1. counts every adjacent pair of the working token sequence,
//! 2. selects the most frequent pair (ties: first-seen wins),
//! 3. appends ``pair -> next token`` to the vocabulary,
//! 4. rewrites every non-overlapping occurrence of the pair.
//!
//! Training stops when the target vocabulary size is reached, or when no
//! pair occurs more than once.
//!
//! ## Training Example
//!
//! ```rust
//! use bytepair::{
//!     training::BinaryPairVocabTrainerOptions,
//!     vocab::PairMergeVocab,
//! };
//!
//! let trainer = BinaryPairVocabTrainerOptions::new(300)
//!     .with_verbose(true)
//!     .init();
//!
//! let mut vocab: PairMergeVocab<u32> = PairMergeVocab::default();
//! let report = trainer.train(&mut vocab, b"aaabdaaabac").unwrap();
//!
//! assert_eq!(report.merges_done, 3);
//! assert!(report.stopped_early);
//! assert_eq!(vocab.lookup_span(258), Some(&b"aaab"[..]));
//! ```

pub mod utility;

mod bpe_trainer;

#[doc(inline)]
pub use bpe_trainer::{BinaryPairVocabTrainer, BinaryPairVocabTrainerOptions, TrainReport};
