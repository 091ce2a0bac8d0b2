//! Sampled select index accelerating `select1` over a packed bit sequence.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use super::popcount::popcount_word;
use crate::util::select_in_word;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sampled absolute positions of every `stride`-th set bit.
///
/// `selects[k]` holds the bit-position of the `(k * stride)`-th set bit
/// (0-indexed), so `select1(n)` only has to scan at most `stride` set bits
/// forward from the sampled hint `selects[n / stride]`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SelectIndex {
    selects: Vec<u32>,
    stride: u32,
}

impl SelectIndex {
    /// Build a select index over the given words, sampling every
    /// `stride`-th set bit. `stride` must be at least 1.
    pub fn build(words: &[u64], stride: u32) -> Self {
        debug_assert!(stride >= 1);
        let mut selects = Vec::new();
        let mut count: u32 = 0;

        for (word_idx, &word) in words.iter().enumerate() {
            let mut remaining = word;
            while remaining != 0 {
                if count % stride == 0 {
                    let bit = remaining.trailing_zeros();
                    selects.push((word_idx as u32) * 64 + bit);
                }
                count += 1;
                remaining &= remaining - 1; // clear lowest set bit
            }
        }

        Self { selects, stride }
    }

    /// The raw sampled array.
    pub fn selects(&self) -> &[u32] {
        &self.selects
    }

    /// The configured sampling stride.
    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// Position of the `n`-th set bit (0-indexed).
    ///
    /// `words` must be the same backing storage passed to [`Self::build`].
    /// Returns `None` if there are fewer than `n + 1` set bits.
    #[inline]
    pub fn select1(&self, words: &[u64], n: usize) -> Option<usize> {
        let stride = self.stride as usize;
        let k = n / stride;
        let hint = *self.selects.get(k)? as usize;

        let mut remaining = n - k * stride;
        if remaining == 0 {
            return Some(hint);
        }

        let mut word_idx = hint / 64;
        let bit_in_word = hint % 64;

        // Clear the hinted bit and everything below it so the first scan
        // only counts ones strictly after the hint.
        let mut word = if bit_in_word == 63 {
            0
        } else {
            words[word_idx] & (u64::MAX << (bit_in_word + 1))
        };

        loop {
            let ones_in_word = popcount_word(word);
            if (remaining as u32) < ones_in_word {
                let bit = select_in_word(word, remaining as u32);
                return Some(word_idx * 64 + bit as usize);
            }
            remaining -= ones_in_word as usize;
            word_idx += 1;
            if word_idx >= words.len() {
                return None;
            }
            word = words[word_idx];
        }
    }

    /// Heap memory used by the sampled array, in bytes.
    pub fn heap_size(&self) -> usize {
        self.selects.len() * core::mem::size_of::<u32>()
    }
}
