//! Tests for binary word/byte serialization.

use succinct_set::binary::{bytes_to_words, bytes_to_words_vec, try_bytes_to_words, words_to_bytes};

#[test]
fn test_empty_roundtrip() {
    let words: Vec<u64> = vec![];
    let bytes = words_to_bytes(&words);
    let recovered = bytes_to_words_vec(bytes);
    assert_eq!(words, recovered);
}

#[test]
fn test_single_word_roundtrip() {
    let words = vec![0xDEAD_BEEF_CAFE_BABEu64];
    let bytes = words_to_bytes(&words);
    let recovered = bytes_to_words_vec(bytes);
    assert_eq!(words, recovered);
}

#[test]
fn test_multiple_words_roundtrip() {
    let words: Vec<u64> = (0..100).map(|i: u64| i.wrapping_mul(0x0123_4567_89AB_CDEF)).collect();
    let bytes = words_to_bytes(&words);
    assert_eq!(bytes_to_words(bytes), &words[..]);
    assert_eq!(bytes_to_words_vec(bytes), words);
}

#[test]
fn test_all_zeros() {
    let words = vec![0u64; 1000];
    let bytes = words_to_bytes(&words);
    assert_eq!(bytes_to_words_vec(bytes), words);
}

#[test]
fn test_all_ones() {
    let words = vec![u64::MAX; 1000];
    let bytes = words_to_bytes(&words);
    assert_eq!(bytes_to_words_vec(bytes), words);
}

#[test]
fn test_try_bytes_valid() {
    let bytes = [0u8; 64];
    assert!(try_bytes_to_words(&bytes).is_some());
    assert_eq!(try_bytes_to_words(&bytes).unwrap().len(), 8);
}

#[test]
fn test_try_bytes_invalid() {
    let bytes = [0u8; 7];
    assert!(try_bytes_to_words(&bytes).is_none());
}

#[test]
#[should_panic(expected = "must be a multiple of 8")]
fn test_bytes_to_words_invalid_length() {
    let bytes = [0u8; 13];
    let _ = bytes_to_words(&bytes);
}

// ============================================================================
// Memory-mapped tests (feature-gated)
// ============================================================================

#[cfg(feature = "mmap-tests")]
mod mmap_tests {
    use std::fs;
    use std::io::Write;
    use succinct_set::binary::mmap::MmapWords;
    use succinct_set::binary::words_to_bytes;

    #[test]
    fn test_mmap_words_open() {
        let words = vec![0x1234_5678_9ABC_DEF0u64; 100];
        let bytes = words_to_bytes(&words);

        let dir = std::env::temp_dir();
        let path = dir.join("succinct_set_binary_test_mmap.bin");

        let mut file = fs::File::create(&path).unwrap();
        file.write_all(bytes).unwrap();
        drop(file);

        let mapped = MmapWords::open(&path).unwrap();
        assert_eq!(mapped.len(), 100);
        assert_eq!(&mapped.words()[..], &words[..]);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_mmap_invalid_size() {
        let dir = std::env::temp_dir();
        let path = dir.join("succinct_set_binary_test_invalid_size.bin");
        fs::write(&path, [0u8; 13]).unwrap();

        let result = MmapWords::open(&path);
        assert!(result.is_err());

        let _ = fs::remove_file(&path);
    }
}
