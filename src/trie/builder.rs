//! Breadth-first trie synthesis, without ever materializing trie nodes.
//!
//! The builder processes a FIFO queue of *key ranges* — contiguous slices of
//! the (already sorted) input key list, each paired with a depth (how many
//! leading bytes have been consumed on the path from the root). Each range
//! dequeued produces exactly one trie node, assigned ids in the order
//! nodes are dequeued, which is also the order their edge blocks appear in
//! `labelBitmap`.

use alloc::collections::VecDeque;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use super::Set;
use crate::bits::BitVecBuilder;
use crate::Config;

/// `true` iff `keys` is strictly ascending with no duplicates.
pub(crate) fn is_sorted_unique<K: AsRef<[u8]>>(keys: &[K]) -> bool {
    keys.windows(2).all(|w| w[0].as_ref() < w[1].as_ref())
}

/// A pending trie node: the range of keys `[start, end)` sharing the first
/// `depth` bytes, still to be processed into labels/edges.
struct Range {
    start: usize,
    end: usize,
    depth: usize,
}

pub(crate) fn build<K: AsRef<[u8]>>(keys: &[K], config: &Config) -> Set {
    let mut labels = Vec::new();
    let mut bitmap = BitVecBuilder::new();
    let mut leaves = BitVecBuilder::new();

    let mut queue = VecDeque::new();
    queue.push_back(Range { start: 0, end: keys.len(), depth: 0 });

    while let Some(Range { start, end, depth }) = queue.pop_front() {
        let accepting = start < end && keys[start].as_ref().len() == depth;
        leaves.push_bit(accepting);

        let mut i = if accepting { start + 1 } else { start };
        while i < end {
            let byte = keys[i].as_ref()[depth];
            let partition_start = i;
            while i < end && keys[i].as_ref()[depth] == byte {
                i += 1;
            }

            labels.push(byte);
            bitmap.push_bit(false);
            queue.push_back(Range { start: partition_start, end: i, depth: depth + 1 });
        }

        bitmap.push_bit(true);
    }

    Set {
        labels,
        label_bitmap: bitmap.finish_with_config(config),
        leaves: leaves.finish_with_config(config),
    }
}
