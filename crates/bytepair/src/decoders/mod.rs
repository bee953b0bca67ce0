//! # Token Decoders
//!
//! Decoder clients should use:
//!
//! * [`DictionaryDecoder`] - direct ``{ T -> Vec<u8> }`` span lookup.
//! * [`PairExpansionDecoder`] - expands merged tokens through their pairs.
//!
//! Both fail with [`crate::BytePairError::UnknownToken`] on a token the
//! vocabulary does not define.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use bytepair::{
//!     decoders::{DictionaryDecoder, TokenDecoder},
//!     vocab::PairMergeVocab,
//! };
//!
//! let vocab: Arc<PairMergeVocab<u32>> =
//!     Arc::new(PairMergeVocab::from_merges([(104, 101)]).unwrap());
//!
//! let decoder = DictionaryDecoder::new(vocab);
//! assert_eq!(decoder.try_decode_to_bytes(&[116, 256]).unwrap(), b"the");
//! assert!(decoder.try_decode_to_bytes(&[99999]).is_err());
//! ```

mod dictionary_decoder;
mod pair_decoder;
mod token_decoder;

#[cfg(test)]
pub(crate) mod testing;

#[doc(inline)]
pub use dictionary_decoder::DictionaryDecoder;
#[doc(inline)]
pub use pair_decoder::PairExpansionDecoder;
#[doc(inline)]
pub use token_decoder::TokenDecoder;
