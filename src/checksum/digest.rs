use sha2::{Digest, Sha256};

use super::Checksum;

/// 128-bit MD5 accumulator. Keys render as 32 hex characters.
#[derive(Clone)]
pub struct Md5Checksum {
    context: md5::Context,
}

impl Md5Checksum {
    pub fn new() -> Self {
        Self {
            context: md5::Context::new(),
        }
    }
}

impl Default for Md5Checksum {
    fn default() -> Self {
        Self::new()
    }
}

impl Checksum for Md5Checksum {
    fn write(&mut self, bytes: &[u8]) {
        self.context.consume(bytes);
    }

    fn finalize(self) -> Vec<u8> {
        self.context.compute().0.to_vec()
    }
}

/// SHA-256 accumulator. Keys render as 64 hex characters.
#[derive(Debug, Clone, Default)]
pub struct Sha256Checksum {
    hasher: Sha256,
}

impl Sha256Checksum {
    pub fn new() -> Self {
        Self {
            hasher: Sha256::new(),
        }
    }
}

impl Checksum for Sha256Checksum {
    fn write(&mut self, bytes: &[u8]) {
        self.hasher.update(bytes);
    }

    fn finalize(self) -> Vec<u8> {
        self.hasher.finalize().to_vec()
    }
}

/// A production accumulator chosen at runtime from configuration.
#[derive(Clone)]
pub enum AnyChecksum {
    Md5(Md5Checksum),
    Sha256(Sha256Checksum),
}

impl Checksum for AnyChecksum {
    fn write(&mut self, bytes: &[u8]) {
        match self {
            AnyChecksum::Md5(inner) => inner.write(bytes),
            AnyChecksum::Sha256(inner) => inner.write(bytes),
        }
    }

    fn finalize(self) -> Vec<u8> {
        match self {
            AnyChecksum::Md5(inner) => inner.finalize(),
            AnyChecksum::Sha256(inner) => inner.finalize(),
        }
    }
}
