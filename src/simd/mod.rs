//! Architecture-specific accelerated popcount implementations.
//!
//! Only compiled in when the `simd` feature is enabled. Falls back to
//! [`crate::bits::popcount_word`]'s default `count_ones()` path on any
//! architecture without an explicit implementation here.

#[cfg(target_arch = "x86_64")]
pub(crate) mod x86;

#[cfg(target_arch = "aarch64")]
pub(crate) mod aarch64;
