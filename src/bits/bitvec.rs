//! Immutable packed bit vector with rank/select acceleration.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use super::popcount::popcount_word;
use super::rank::RankDirectory;
use super::select::SelectIndex;
use crate::{Config, RankSelect};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A growable bit sequence, packed 64 bits per word.
///
/// Used by the trie builder to assemble `labelBitmap` and `leaves` one bit
/// at a time before they are frozen into a [`BitVec`].
#[derive(Clone, Debug, Default)]
pub struct BitVecBuilder {
    words: Vec<u64>,
    len: usize,
}

impl BitVecBuilder {
    pub fn new() -> Self {
        Self { words: Vec::new(), len: 0 }
    }

    pub fn with_capacity(bits: usize) -> Self {
        Self { words: Vec::with_capacity(bits.div_ceil(64)), len: 0 }
    }

    /// Append a single bit.
    pub fn push_bit(&mut self, bit: bool) {
        let word_idx = self.len / 64;
        if word_idx == self.words.len() {
            self.words.push(0);
        }
        if bit {
            self.words[word_idx] |= 1u64 << (self.len % 64);
        }
        self.len += 1;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Freeze into an immutable [`BitVec`], building rank/select indexes.
    pub fn finish(self) -> BitVec {
        BitVec::from_words_with_config(self.words, self.len, &Config::default())
    }

    /// Freeze with an explicit select-sampling configuration.
    pub fn finish_with_config(self, config: &Config) -> BitVec {
        BitVec::from_words_with_config(self.words, self.len, config)
    }
}

/// An immutable bit sequence with O(1) `rank1` and sampled `select1`.
///
/// See the crate-level documentation for the general contract: `rank1(p)`
/// counts the 1-bits in `[0, p)`, and `select1(n)` returns the position of
/// the `n`-th 1-bit (0-indexed).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BitVec {
    words: Vec<u64>,
    len: usize,
    ranks: RankDirectory,
    selects: SelectIndex,
}

impl BitVec {
    /// Build from a complete, packed word array and a precise bit length.
    ///
    /// `len` may be less than `words.len() * 64` when the last word is only
    /// partially used.
    pub fn from_words(words: Vec<u64>, len: usize) -> Self {
        Self::from_words_with_config(words, len, &Config::default())
    }

    /// Build with an explicit select-sampling stride.
    pub fn from_words_with_config(words: Vec<u64>, len: usize, config: &Config) -> Self {
        debug_assert!(len <= words.len() * 64);
        let ranks = RankDirectory::build(&words);
        let selects = SelectIndex::build(&words, config.select_sample_rate);
        Self { words, len, ranks, selects }
    }

    pub fn words(&self) -> &[u64] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn ranks(&self) -> &RankDirectory {
        &self.ranks
    }

    pub fn selects(&self) -> &SelectIndex {
        &self.selects
    }

    /// The bit at position `i`.
    #[inline]
    pub fn get_bit(&self, i: usize) -> bool {
        debug_assert!(i < self.len);
        (self.words[i / 64] >> (i % 64)) & 1 == 1
    }

    /// Total number of 1-bits in the vector.
    pub fn count_ones(&self) -> usize {
        self.rank1(self.len)
    }

    /// Heap memory used by this bit vector, in bytes.
    pub fn heap_size(&self) -> usize {
        self.words.len() * core::mem::size_of::<u64>() + self.ranks.heap_size() + self.selects.heap_size()
    }
}

impl RankSelect for BitVec {
    #[inline]
    fn rank1(&self, p: usize) -> usize {
        self.ranks.rank1(&self.words, p)
    }

    #[inline]
    fn select1(&self, n: usize) -> Option<usize> {
        self.selects.select1(&self.words, n)
    }
}
