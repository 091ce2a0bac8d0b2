//! The LOUDS-encoded succinct key set.
//!
//! A [`Set`] is built once from a sorted, duplicate-free key sequence via
//! [`Set::construct`] and is immutable thereafter. Internally it is five
//! arrays: `labels`, `labelBitmap`, `leaves`, and the rank/select samples
//! built over `labelBitmap` (see [`crate::bits`]).

mod builder;
mod query;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::bits::BitVec;
use crate::Config;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A static, compressed set of byte strings.
///
/// Construct with [`Set::construct`], then query with [`Set::has`]. See the
/// crate-level documentation for a usage example.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Set {
    labels: Vec<u8>,
    label_bitmap: BitVec,
    leaves: BitVec,
}

impl Set {
    /// Build a set from a sorted, duplicate-free sequence of keys.
    ///
    /// In debug builds, the input is checked to be strictly ascending;
    /// violating this is a programmer-contract error (see module docs) and
    /// triggers a panic rather than silently building a malformed set. In
    /// release builds no such check is performed.
    pub fn construct<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<[u8]>,
    {
        Self::construct_with_config(keys, &Config::default())
    }

    /// Build a set with an explicit select-sampling configuration.
    pub fn construct_with_config<I, K>(keys: I, config: &Config) -> Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<[u8]>,
    {
        let keys: Vec<K> = keys.into_iter().collect();
        debug_assert!(builder::is_sorted_unique(&keys), "keys must be strictly ascending with no duplicates");
        builder::build(&keys, config)
    }

    /// Test whether `key` is a member of this set.
    ///
    /// Pure and total: any byte string is a well-formed query, and this
    /// never panics, even for a set built (in a release build) from
    /// unsorted input.
    pub fn has(&self, key: impl AsRef<[u8]>) -> bool {
        query::has(self, key.as_ref())
    }

    /// The raw BFS-order edge-label bytes.
    pub fn labels(&self) -> &[u8] {
        &self.labels
    }

    /// The packed edge/terminator bitmap underlying the trie.
    pub fn label_bitmap(&self) -> &BitVec {
        &self.label_bitmap
    }

    /// The packed per-node accepting-bit array.
    pub fn leaves(&self) -> &BitVec {
        &self.leaves
    }

    /// Number of trie nodes.
    pub fn node_count(&self) -> usize {
        self.leaves.len()
    }

    /// Total heap memory used by the encoded arrays, in bytes.
    pub fn heap_size(&self) -> usize {
        self.labels.len() + self.label_bitmap.heap_size() + self.leaves.heap_size()
    }
}
