// ── Central error type ────────────────────────────────────────────────────────
//
// All fallible operations in the crate return `error::Result<T>`.  Syntax
// resolution, indentation and brace matching are total and never appear here;
// a cancelled save-as is a `SaveOutcome`, not an error.

use std::{io, path::PathBuf};

/// Every error that a buffer session can produce.
#[derive(Debug, thiserror::Error)]
pub enum SpaxError {
    /// The file could not be read on load.  The session is left untouched.
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The buffer could not be written on save.  The fingerprint is not
    /// committed, so the session stays dirty.
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A syntax registry file is not valid JSON or has the wrong shape.
    #[error("invalid syntax configuration {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A syntax registry file declares a format version we do not know.
    #[error("unsupported syntax configuration version {found} in {}", .path.display())]
    ConfigVersion { path: PathBuf, found: u32 },

    /// Two spellings of one extension (`.py` and `PY`, say) map to different
    /// profiles.
    #[error(
        "extension `{extension}` maps to both `{first}` and `{second}` in {}",
        .path.display()
    )]
    ConflictingExtension {
        path: PathBuf,
        extension: String,
        first: String,
        second: String,
    },

    /// A syntax registry file has no `default` profile to fall back on.
    #[error("syntax configuration {} defines no `default` profile", .path.display())]
    MissingDefaultProfile { path: PathBuf },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SpaxError>;

// ── Tests ─────────────────────────────────────────────────────────────────────
