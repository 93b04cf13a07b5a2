//! Incremental checksum accumulators used to fold grouping terms into a key.
//!
//! The grouping algorithm only depends on [`Checksum`]: bytes go in with
//! `write`, one digest comes out of `finalize`. A fresh accumulator is drawn
//! from a [`ChecksumFactory`] for every error, so no state is shared between
//! events.

pub mod algorithm;
pub mod digest;

pub use algorithm::HashAlgorithm;
pub use digest::{AnyChecksum, Md5Checksum, Sha256Checksum};

pub trait Checksum {
    fn write(&mut self, bytes: &[u8]);

    fn finalize(self) -> Vec<u8>;
}

pub trait ChecksumFactory {
    type Checksum: Checksum;

    fn new_checksum(&self) -> Self::Checksum;
}

impl<F, C> ChecksumFactory for F
where
    F: Fn() -> C,
    C: Checksum,
{
    type Checksum = C;

    fn new_checksum(&self) -> C {
        self()
    }
}

/// Returns exactly the bytes written, in order.
///
/// Not a hash at all: useful when the concatenated terms themselves should be
/// inspected, and the reason an error with no terms can key to `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityChecksum {
    buffer: Vec<u8>,
}

impl Checksum for IdentityChecksum {
    fn write(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    fn finalize(self) -> Vec<u8> {
        self.buffer
    }
}
