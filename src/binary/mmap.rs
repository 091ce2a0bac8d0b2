//! Memory-mapped, read-only access to a serialized word array.
//!
//! Lets a [`crate::trie::Set`] be queried straight out of a file on disk
//! without copying its backing arrays into the heap first.

use std::fs::File;
use std::io;
use std::path::Path;

use memmap2::Mmap;

use super::BinaryError;

/// A read-only memory-mapped `u64` word array.
///
/// The map is kept alive for the lifetime of this value; [`Self::words`]
/// borrows directly from the mapped pages.
pub struct MmapWords {
    mmap: Mmap,
}

impl MmapWords {
    /// Open and memory-map `path`, validating that its length is a multiple
    /// of 8 bytes.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };
        if mmap.len() % 8 != 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                BinaryError::UnalignedLength { len: mmap.len() },
            ));
        }
        Ok(Self { mmap })
    }

    /// Number of `u64` words in the mapped region.
    pub fn len(&self) -> usize {
        self.mmap.len() / 8
    }

    pub fn is_empty(&self) -> bool {
        self.mmap.is_empty()
    }

    /// The mapped region, reinterpreted as a word slice.
    ///
    /// Falls back to a realigning copy if the OS handed back a mapping that
    /// isn't 8-byte aligned (rare, but not guaranteed against by `mmap(2)`).
    pub fn words(&self) -> std::borrow::Cow<'_, [u64]> {
        match bytemuck::try_cast_slice(&self.mmap[..]) {
            Ok(words) => std::borrow::Cow::Borrowed(words),
            Err(_) => std::borrow::Cow::Owned(super::bytes_to_words_vec(&self.mmap[..])),
        }
    }
}
