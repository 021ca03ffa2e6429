// ── Buffer loading ────────────────────────────────────────────────────────────
//
// Whole-file read, fingerprint and profile resolution.  Touches nothing but
// the file it reads.

use std::{fs, path::Path, sync::Arc};

use crate::{
    error::{Result, SpaxError},
    fingerprint::Fingerprint,
    syntax::{SyntaxProfile, SyntaxRegistry},
};

/// Everything a session needs from a freshly read file.
#[derive(Debug, Clone)]
pub struct LoadedBuffer {
    pub content: Vec<u8>,
    pub profile: Arc<SyntaxProfile>,
    pub fingerprint: Fingerprint,
}

/// Read `path` and resolve its profile through `registry`.
///
/// I/O failures come back as `SpaxError::Read` with the path attached; there
/// is no retry.
pub fn load(path: &Path, registry: &SyntaxRegistry) -> Result<LoadedBuffer> {
    let content = fs::read(path).map_err(|source| SpaxError::Read {
        path: path.to_owned(),
        source,
    })?;
    let fingerprint = Fingerprint::of(&content);
    let profile = registry.resolve(path);
    Ok(LoadedBuffer {
        content,
        profile,
        fingerprint,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
