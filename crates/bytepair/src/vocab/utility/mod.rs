//! # Vocabulary Utilities

pub mod validators;

#[cfg(test)]
pub mod testing;
