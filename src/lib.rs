// ── Safety policy ────────────────────────────────────────────────────────────
// No unsafe code anywhere: this crate only hashes, compares and reads/writes
// whole files.  Widgets, dialogs and key events belong to the embedding UI.
#![deny(unsafe_code)]

//! Editor buffer sessions for a source-code editor pane.
//!
//! A [`BufferSession`] tracks one open document: whether it has unsaved
//! changes (by content fingerprint), which [`SyntaxProfile`] styles it, how to
//! auto-indent after a newline and where brace highlights go.  The front end
//! owns the text widget and drives the session through [`UiPort`].

pub mod braces;
pub mod config;
pub mod dirty;
pub mod error;
pub mod fingerprint;
pub mod indent;
pub mod session;
pub mod syntax;
pub mod ui;

pub use braces::{match_brace, BraceHighlight};
pub use dirty::{check_changed, commit, is_dirty, DirtyCheck};
pub use error::{Result, SpaxError};
pub use fingerprint::Fingerprint;
pub use indent::{compute_auto_indent, leading_whitespace, AutoIndent};
pub use session::{load, BufferSession, LoadedBuffer, SaveOutcome, SaveState};
pub use syntax::{Rgb, Style, StyleRule, SyntaxProfile, SyntaxRegistry, DEFAULT_PROFILE};
pub use ui::UiPort;
