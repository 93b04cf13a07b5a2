use serde::{Deserialize, Serialize};

use super::digest::{AnyChecksum, Md5Checksum, Sha256Checksum};
use super::ChecksumFactory;

/// Digest used to render grouping keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    #[default]
    Md5,
    Sha256,
}

impl HashAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Sha256 => "sha256",
        }
    }

    /// Length of a rendered key, in hex characters.
    pub fn key_len(&self) -> usize {
        match self {
            HashAlgorithm::Md5 => 32,
            HashAlgorithm::Sha256 => 64,
        }
    }
}

impl ChecksumFactory for HashAlgorithm {
    type Checksum = AnyChecksum;

    fn new_checksum(&self) -> AnyChecksum {
        match self {
            HashAlgorithm::Md5 => AnyChecksum::Md5(Md5Checksum::new()),
            HashAlgorithm::Sha256 => AnyChecksum::Sha256(Sha256Checksum::new()),
        }
    }
}
