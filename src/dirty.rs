// ── Dirty tracking ────────────────────────────────────────────────────────────
//
// Pure functions of content.  The only memory the tracker has is the previous
// dirty flag passed back in by the caller, used to report transitions.

use crate::fingerprint::Fingerprint;

/// Result of one change check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirtyCheck {
    /// `true` when the content differs from the stored fingerprint.
    pub dirty: bool,
    /// `true` only when `dirty` flipped relative to the previous check.
    pub changed: bool,
}

/// `true` when `current` no longer matches `stored`.
pub fn is_dirty(current: &[u8], stored: &Fingerprint) -> bool {
    !stored.matches(current)
}

/// Produce the new baseline after a successful load or save.
pub fn commit(current: &[u8]) -> Fingerprint {
    Fingerprint::of(current)
}

/// Recompute the dirty flag and report whether it transitioned.
///
/// The flag is recomputed on every call; `changed` lets the UI skip
/// repainting the tab label when nothing visible moved.
pub fn check_changed(current: &[u8], previous_dirty: bool, stored: &Fingerprint) -> DirtyCheck {
    let dirty = is_dirty(current, stored);
    DirtyCheck {
        dirty,
        changed: dirty != previous_dirty,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
