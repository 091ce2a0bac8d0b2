//! # succinct-set
//!
//! A static, compressed set of byte strings backed by a LOUDS-encoded trie
//! with rank/select acceleration.
//!
//! The set is built once from a sorted, duplicate-free key sequence and is
//! immutable thereafter. On natural-language corpora it typically encodes to
//! roughly half the size of the raw concatenated keys, while still answering
//! membership queries in `O(|key|)`.
//!
//! ## Module Organization
//!
//! - [`bits`] - Bitvector with O(1) rank and accelerated select
//! - [`trie`] - The LOUDS-encoded succinct [`trie::Set`] itself
//! - [`binary`] - Raw word/byte serialization for the four encoded arrays
//!
//! ## Quick Start
//!
//! ```
//! use succinct_set::Set;
//!
//! let keys = ["a", "ab", "abc"];
//! let set = Set::construct(keys);
//!
//! assert!(set.has("a"));
//! assert!(set.has("ab"));
//! assert!(!set.has("abcd"));
//! ```
//!
//! ## Features
//!
//! Popcount strategies (mutually exclusive, for benchmarking):
//! - Default: Uses Rust's `count_ones()` which auto-vectorizes
//! - `simd` - Use explicit SIMD intrinsics (NEON on ARM, POPCNT on x86)
//! - `portable-popcount` - Use portable bitwise algorithm (no intrinsics)
//!
//! Other features:
//! - `serde` - Enable serialization/deserialization support
//! - `mmap` - Memory-map a serialized [`trie::Set`] from disk

// Use no_std unless std feature is enabled or we're in test mode
#![cfg_attr(not(any(test, feature = "std")), no_std)]

// When using no_std, we need to explicitly link the alloc crate
#[cfg(not(any(test, feature = "std")))]
extern crate alloc;

// When using std, re-export alloc types from std for compatibility
#[cfg(any(test, feature = "std"))]
extern crate std as alloc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// =============================================================================
// Core modules (organized by category)
// =============================================================================

/// Bitvector implementation with rank and select support.
pub mod bits;

/// Internal utilities (not part of public API).
pub(crate) mod util;

/// Architecture-specific accelerated popcount (not part of public API).
pub(crate) mod simd;

/// Binary serialization utilities for the raw word arrays.
pub mod binary;

/// The LOUDS-encoded succinct key set.
pub mod trie;

// =============================================================================
// Public re-exports (convenience)
// =============================================================================

// Core bit-vector types
pub use bits::BitVec;
pub use bits::{popcount_word, popcount_words, RankDirectory, SelectIndex};

// Core trie type
pub use trie::Set;

// =============================================================================
// Core traits
// =============================================================================

/// Trait for rank/select operations on bitvectors.
///
/// Rank and select are fundamental operations for succinct data structures:
/// - `rank1(i)`: Count 1-bits in positions `[0, i)`
/// - `select1(k)`: Find position of the k-th 1-bit (0-indexed)
pub trait RankSelect {
    /// Count 1-bits in positions `[0, i)`.
    ///
    /// Returns 0 if `i == 0`.
    fn rank1(&self, i: usize) -> usize;

    /// Count 0-bits in positions `[0, i)`.
    ///
    /// Default implementation: `i - rank1(i)`
    #[inline]
    fn rank0(&self, i: usize) -> usize {
        i - self.rank1(i)
    }

    /// Find position of the k-th 1-bit (0-indexed).
    ///
    /// Returns `None` if fewer than `k+1` ones exist.
    fn select1(&self, k: usize) -> Option<usize>;
}

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for building the rank/select index over a bit vector.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Sample rate for select acceleration.
    ///
    /// Every `select_sample_rate`-th set bit has its absolute position
    /// recorded, so `select1` never has to scan more than
    /// `select_sample_rate` set bits from a sampled hint. Defaults to 32,
    /// the reference stride for the LOUDS label bitmap (see
    /// [`trie`](crate::trie)).
    pub select_sample_rate: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            select_sample_rate: 32,
        }
    }
}
