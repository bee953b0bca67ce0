//! # Vocabulary Types

use crate::types::{BPHashMap, Pair};

/// `{ Pair<T> -> rank }` map.
///
/// ## Style Hints
/// Instance names should prefer `pair_ranks`, or `pair_rank_map`.
pub type PairRankMap<T> = BPHashMap<Pair<T>, usize>;

/// `{ T -> Pair<T> }` map.
///
/// ## Style Hints
/// Instance names should prefer `token_pairs`, or `token_pair_map`.
pub type TokenPairMap<T> = BPHashMap<T, Pair<T>>;

/// `[T; 256]` array.
///
/// ## Style Hints
/// Instance names should prefer `byte_tokens`, or `byte_token_array`.
pub type ByteTokenArray<T> = [T; 256];
