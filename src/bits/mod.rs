//! Bit-level substrate: popcount, rank, select, and the packed [`BitVec`]
//! built from them.

mod bitvec;
mod popcount;
mod rank;
mod select;

pub use bitvec::{BitVec, BitVecBuilder};
pub use popcount::{popcount_word, popcount_word_portable, popcount_words};
pub use rank::RankDirectory;
pub use select::SelectIndex;
