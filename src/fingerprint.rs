// ── Content fingerprints ──────────────────────────────────────────────────────
//
// SHA-256 over the raw buffer bytes.  The same representation is hashed on
// load, on save and on every change check, so line endings and encodings are
// never normalised behind the caller's back.

use std::fmt;

use sha2::{Digest, Sha256};

/// Fixed-size digest of a buffer's content.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// Digest `content`.
    pub fn of(content: &[u8]) -> Self {
        let digest = Sha256::digest(content);
        let mut out = [0u8; 32];
        out.copy_from_slice(&digest);
        Self(out)
    }

    /// Fingerprint of an empty buffer; the baseline of an untitled document.
    pub fn empty() -> Self {
        Self::of(b"")
    }

    /// `true` when `content` hashes to this fingerprint.
    pub fn matches(&self, content: &[u8]) -> bool {
        Self::of(content) == *self
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.0 {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({self})")
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
