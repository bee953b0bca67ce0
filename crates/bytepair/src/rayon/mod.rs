//! # Rayon Parallelism Wrappers
//!
//! Batch-level parallel wrappers around any [`crate::TokenEncoder`] or
//! [`crate::TokenDecoder`]. The wrapped vocabulary is read-only, so every
//! worker shares it.

mod rayon_decoder;
mod rayon_encoder;

#[doc(inline)]
pub use rayon_decoder::ParallelRayonDecoder;
#[doc(inline)]
pub use rayon_encoder::ParallelRayonEncoder;
