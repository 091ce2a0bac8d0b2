//! Flat rank directory: one cumulative popcount sample per 64-bit word.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use super::popcount::popcount_word;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sampled prefix-popcount array over a packed bit sequence.
///
/// `ranks[j]` holds the number of 1-bits in the first `j * 64` bits of the
/// indexed bitmap, so `rank1(p)` only ever needs one array lookup plus a
/// masked popcount of the partial word. `len() == ceil(bits / 64) + 1`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RankDirectory {
    ranks: Vec<u32>,
}

impl RankDirectory {
    /// Build a rank directory over the given words.
    ///
    /// `words` must be the same backing storage later passed to
    /// [`RankDirectory::rank1`].
    pub fn build(words: &[u64]) -> Self {
        let mut ranks = Vec::with_capacity(words.len() + 1);
        let mut cumulative: u32 = 0;
        ranks.push(0);
        for &word in words {
            cumulative += popcount_word(word);
            ranks.push(cumulative);
        }
        Self { ranks }
    }

    /// The raw sampled array, one entry per word boundary.
    pub fn ranks(&self) -> &[u32] {
        &self.ranks
    }

    /// Number of 1-bits in `words[0..p)` (bit-indexed, not word-indexed).
    ///
    /// `words` must be the same backing storage passed to [`Self::build`].
    #[inline]
    pub fn rank1(&self, words: &[u64], p: usize) -> usize {
        let word_idx = p / 64;
        let bit_idx = p % 64;

        let mut count = self.ranks[word_idx] as usize;
        if bit_idx > 0 {
            let mask = (1u64 << bit_idx) - 1;
            count += popcount_word(words[word_idx] & mask) as usize;
        }
        count
    }

    /// Heap memory used by the sampled array, in bytes.
    pub fn heap_size(&self) -> usize {
        self.ranks.len() * core::mem::size_of::<u32>()
    }
}
