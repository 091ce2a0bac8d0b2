//! aarch64 SIMD implementations.
//!
//! NEON has no direct 64-bit popcount instruction; `vcnt` counts set bits
//! per byte, so a word's popcount is a byte-wise count followed by a
//! horizontal sum.

#[cfg(target_arch = "aarch64")]
use core::arch::aarch64::*;

/// Popcount of a single 64-bit word using NEON.
///
/// # Safety
///
/// CPU must support NEON (always true on aarch64 in practice, but this is
/// marked unsafe to mirror the x86_64 POPCNT entry point).
#[cfg(target_arch = "aarch64")]
#[inline]
pub unsafe fn popcount_word_neon(word: u64) -> u32 {
    unsafe {
        let bytes = vcreate_u8(word);
        let counted = vcnt_u8(bytes);
        vaddv_u8(counted) as u32
    }
}

/// Popcount of arbitrary-length word data using NEON.
///
/// # Safety
///
/// `ptr` must be valid for reading `word_count` x u64 words.
#[cfg(target_arch = "aarch64")]
#[inline]
pub unsafe fn popcount_words_neon(ptr: *const u64, word_count: usize) -> usize {
    unsafe {
        let mut total = 0usize;
        for i in 0..word_count {
            total += popcount_word_neon(*ptr.add(i)) as usize;
        }
        total
    }
}

#[cfg(all(test, target_arch = "aarch64"))]
mod tests {
    use super::*;

    #[test]
    fn test_popcount_word_neon() {
        unsafe {
            assert_eq!(popcount_word_neon(0), 0);
            assert_eq!(popcount_word_neon(u64::MAX), 64);
            assert_eq!(popcount_word_neon(0xDEAD_BEEF_CAFE_BABE), 0xDEAD_BEEF_CAFE_BABEu64.count_ones());
        }
    }

    #[test]
    fn test_popcount_words_neon() {
        let words = [0u64, u64::MAX, 0xAAAA_AAAA_AAAA_AAAA];
        unsafe {
            assert_eq!(
                popcount_words_neon(words.as_ptr(), words.len()),
                words.iter().map(|w| w.count_ones() as usize).sum::<usize>()
            );
        }
    }
}
