//! Membership lookup: a pure trie descent driven entirely by rank/select
//! over `labelBitmap`, with no trie nodes ever materialized.

use super::Set;
use crate::RankSelect;

/// Test whether `key` is a member of `set`.
///
/// Total and side-effect free: any byte string is a well-formed query.
/// Bounds every scan against `label_bitmap`'s bit length, so a malformed
/// set (one built in a release build from unsorted input) can only ever
/// yield an unspecified boolean, never an out-of-bounds read.
pub(crate) fn has(set: &Set, key: &[u8]) -> bool {
    let bitmap = set.label_bitmap();
    let bitmap_len = bitmap.len();

    let mut node_id = 0usize;
    let mut block_start = 0usize;

    for &c in key {
        let first_edge_ordinal = block_start - node_id;
        let mut bit_pos = block_start;
        let mut j = 0usize;
        let mut matched = None;

        while bit_pos < bitmap_len {
            if bitmap.get_bit(bit_pos) {
                // Terminator reached before a match: no such edge.
                break;
            }
            let label_byte = set.labels()[first_edge_ordinal + j];
            match label_byte.cmp(&c) {
                core::cmp::Ordering::Equal => {
                    matched = Some(bit_pos);
                    break;
                }
                core::cmp::Ordering::Greater => break, // sorted siblings: no later edge can match
                core::cmp::Ordering::Less => {}
            }
            j += 1;
            bit_pos += 1;
        }

        let edge_bit_pos = match matched {
            Some(pos) => pos,
            None => return false,
        };

        let child_node_id = (edge_bit_pos + 1) - bitmap.rank1(edge_bit_pos + 1);
        let block_start_of_child = match bitmap.select1(child_node_id - 1) {
            Some(terminator_pos) => terminator_pos + 1,
            None => return false,
        };

        node_id = child_node_id;
        block_start = block_start_of_child;
    }

    set.leaves().get_bit(node_id)
}

#[cfg(test)]
mod tests {
    use super::super::Set;

    #[test]
    fn test_descent_stops_early_on_greater_label() {
        let set = Set::construct(["b", "d", "f"]);
        // 'a' sorts before every sibling label: must miss without scanning past 'b'.
        assert!(!set.has("a"));
        assert!(!set.has("c"));
        assert!(!set.has("e"));
        assert!(!set.has("g"));
    }

    #[test]
    fn test_single_byte_extension_past_leaf() {
        let set = Set::construct(["a", "ab"]);
        assert!(set.has("a"));
        assert!(set.has("ab"));
        assert!(!set.has("abc"));
    }

    #[test]
    fn test_large_corpus_round_trip() {
        let words: Vec<alloc::string::String> = (0u32..2000).map(|i| alloc::format!("word{i:06}")).collect();
        let set = Set::construct(&words);

        for w in &words {
            assert!(set.has(w), "expected {w} to be present");
        }

        for i in 2000u32..2200 {
            let absent = alloc::format!("word{i:06}");
            assert!(!set.has(&absent), "expected {absent} to be absent");
        }
    }
}
