use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Prefix marking a BLAKE3 digest.
const BLAKE3_PREFIX: &str = "b3:";
/// Bytes of the BLAKE3 output kept in a digest (32 hex characters).
const BLAKE3_DIGEST_BYTES: usize = 16;
/// Hex characters in a rolling-hash digest.
const ROLLING_DIGEST_LEN: usize = 8;

/// Digest algorithm for line content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// 32-bit polynomial rolling hash (`h = h * 31 + unit`) over UTF-16 code
    /// units, rendered as 8 lowercase hex digits.
    #[default]
    Rolling,
    /// Domain-separated BLAKE3, truncated to 128 bits, rendered as `b3:` + 32
    /// lowercase hex digits.
    Blake3,
}

impl HashAlgorithm {
    /// Recognise the algorithm that produced `digest` from its encoding.
    pub fn detect(digest: &str) -> Option<Self> {
        if let Some(hex_part) = digest.strip_prefix(BLAKE3_PREFIX) {
            let valid = hex_part.len() == BLAKE3_DIGEST_BYTES * 2
                && hex_part.bytes().all(|b| b.is_ascii_hexdigit());
            return valid.then_some(Self::Blake3);
        }
        let valid =
            digest.len() == ROLLING_DIGEST_LEN && digest.bytes().all(|b| b.is_ascii_hexdigit());
        valid.then_some(Self::Rolling)
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rolling => f.write_str("rolling"),
            Self::Blake3 => f.write_str("blake3"),
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = HasherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rolling" => Ok(Self::Rolling),
            "blake3" => Ok(Self::Blake3),
            _ => Err(HasherError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Line-content hasher used to snapshot and re-check anchored lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContentHasher {
    algorithm: HashAlgorithm,
}

impl ContentHasher {
    /// Hasher producing rolling-hash digests.
    pub const ROLLING: Self = Self::new(HashAlgorithm::Rolling);
    /// Hasher producing BLAKE3 digests.
    pub const BLAKE3: Self = Self::new(HashAlgorithm::Blake3);

    /// Domain tag prepended to BLAKE3 input.
    const DOMAIN: &'static str = "margin-line-v1";

    pub const fn new(algorithm: HashAlgorithm) -> Self {
        Self { algorithm }
    }

    /// The algorithm used for new digests.
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Digest of `content` under this hasher's algorithm.
    pub fn digest(&self, content: &str) -> String {
        match self.algorithm {
            HashAlgorithm::Rolling => format!("{:08x}", Self::rolling_hash(content)),
            HashAlgorithm::Blake3 => {
                let mut hasher = blake3::Hasher::new();
                hasher.update(Self::DOMAIN.as_bytes());
                hasher.update(b":");
                hasher.update(content.as_bytes());
                let hash = hasher.finalize();
                format!(
                    "{BLAKE3_PREFIX}{}",
                    hex::encode(&hash.as_bytes()[..BLAKE3_DIGEST_BYTES])
                )
            }
        }
    }

    /// Check `content` against a stored digest.
    ///
    /// The digest is re-computed with whichever algorithm produced it, not
    /// with this hasher's algorithm. A digest in an unrecognised format never
    /// matches.
    pub fn matches(&self, content: &str, digest: &str) -> bool {
        match HashAlgorithm::detect(digest) {
            Some(algorithm) => Self::new(algorithm)
                .digest(content)
                .eq_ignore_ascii_case(digest),
            None => false,
        }
    }

    /// The raw 32-bit rolling hash.
    pub fn rolling_hash(content: &str) -> u32 {
        content
            .encode_utf16()
            .fold(0u32, |h, unit| h.wrapping_mul(31).wrapping_add(u32::from(unit)))
    }
}

/// Errors from hashing operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum HasherError {
    #[error("unknown hash algorithm: {0:?} (expected \"rolling\" or \"blake3\")")]
    UnknownAlgorithm(String),
}
