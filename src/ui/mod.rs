// ── UI port ───────────────────────────────────────────────────────────────────
//
// The capabilities a front end lends to a buffer session.  The session never
// touches a widget directly; it calls back through this trait on the UI
// thread and otherwise returns plain decisions.

pub mod tabs;

use std::path::{Path, PathBuf};

use crate::{braces::BraceHighlight, syntax::SyntaxProfile};

/// Callbacks a front end implements for the session it hosts.
pub trait UiPort {
    /// Ask the user where to save.  `suggested` is the current path, if any.
    /// Returns `None` when the user cancels.
    fn prompt_save_location(&mut self, suggested: Option<&Path>) -> Option<PathBuf>;

    /// Push `profile`'s styles, keywords and tab settings into the widget.
    fn apply_styling(&mut self, profile: &SyntaxProfile);

    /// Reflect the document name and dirty state in the tab or title.
    fn set_tab_label(&mut self, name: &str, dirty: bool);

    fn insert_text(&mut self, position: usize, text: &str);

    fn move_cursor(&mut self, position: usize);

    fn set_read_only(&mut self, _read_only: bool) {}

    fn highlight_braces(&mut self, _highlight: BraceHighlight) {}
}

// ── Test double ───────────────────────────────────────────────────────────────
