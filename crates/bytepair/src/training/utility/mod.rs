//! # Trainer Implementation Utilities

mod pair_counter;
mod token_span_buffer;

#[doc(inline)]
pub use pair_counter::{PairCounter, PairStat};
#[doc(inline)]
pub use token_span_buffer::TokenSpanBuf;
