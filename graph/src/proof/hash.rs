//! Content-addressed hashing with domain separation.
//!
//! `canonical_hash(domain, data)` is SHA-256 over `domain.as_bytes() || data`,
//! rendered as `"sha256:<lowercase hex>"`.

use std::fmt;

use sha2::{Digest, Sha256};

use super::hash_domain::HashDomain;

const SHA256: &str = "sha256";

/// A digest tagged with the algorithm that produced it, e.g. `"sha256:ab12..."`.
///
/// Both halves are non-empty; [`ContentHash::parse`] refuses anything else.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    text: String,
    sep: usize,
}

impl ContentHash {
    /// Parse `"algorithm:digest"`. Returns `None` without a separator or when
    /// either side is empty.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let (algorithm, digest) = s.split_once(':')?;
        if algorithm.is_empty() || digest.is_empty() {
            return None;
        }
        Some(Self {
            text: s.to_string(),
            sep: algorithm.len(),
        })
    }

    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.text[..self.sep]
    }

    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.text[self.sep + 1..]
    }

    /// The full `"algorithm:digest"` text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Hash `data` under `domain`.
#[must_use]
pub fn canonical_hash(domain: HashDomain, data: &[u8]) -> ContentHash {
    let digest = Sha256::new()
        .chain_update(domain.as_bytes())
        .chain_update(data)
        .finalize();
    ContentHash {
        text: format!("{SHA256}:{}", hex::encode(digest)),
        sep: SHA256.len(),
    }
}
