//! # Token Encoders
//!
//! Encoders replay a trained [`crate::vocab::MergeTable`] over new bytes.
//! No merges are invented: pairs without a rule are never merged.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use bytepair::{
//!     encoders::{MergeScanEncoder, TokenEncoder},
//!     vocab::PairMergeVocab,
//! };
//!
//! let vocab: Arc<PairMergeVocab<u32>> =
//!     Arc::new(PairMergeVocab::from_merges([(104, 101)]).unwrap());
//!
//! let encoder = MergeScanEncoder::new(vocab);
//! assert_eq!(encoder.try_encode(b"the").unwrap(), vec![116, 256]);
//! ```

mod merge_scan_encoder;
mod token_encoder;

#[doc(inline)]
pub use merge_scan_encoder::{MergeScanEncoder, merge_scan};
#[doc(inline)]
pub use token_encoder::TokenEncoder;
