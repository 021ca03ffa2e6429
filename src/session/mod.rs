// ── Buffer sessions ───────────────────────────────────────────────────────────
//
// One `BufferSession` per open document, owned by the pane that shows it.  The
// pane forwards events (text changed, newline, caret moved, save requests)
// and the session answers with decisions, calling back through `UiPort` where
// the widget has to change.  All calls happen on the UI thread.

pub mod loader;

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{
    braces::{self, BraceHighlight},
    dirty::{self, DirtyCheck},
    error::{Result, SpaxError},
    fingerprint::Fingerprint,
    indent::AutoIndent,
    syntax::{SyntaxProfile, SyntaxRegistry},
    ui::{tabs, UiPort},
};

pub use loader::{load, LoadedBuffer};

// ── Save state ────────────────────────────────────────────────────────────────

/// Where the document stands relative to the disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveState {
    /// Never saved; there is no path yet.
    Unsaved,
    /// The last content the session saw matches the last load or save.
    Saved,
    /// The last content the session saw diverges from disk.
    Dirty,
}

/// Result of a save request that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// The user dismissed the save-as prompt.  Nothing changed.
    Cancelled,
}

// ── BufferSession ─────────────────────────────────────────────────────────────

/// State of one open document.
///
/// The content itself lives in the UI widget; every operation that needs it
/// takes the current bytes as an argument.
#[derive(Debug)]
pub struct BufferSession {
    registry: Arc<SyntaxRegistry>,
    /// `None` for a buffer that has never been saved.
    path: Option<PathBuf>,
    /// Digest of the content as of the last successful load or save.
    fingerprint: Fingerprint,
    /// Result of the most recent dirty check.
    dirty: bool,
    profile: Arc<SyntaxProfile>,
    read_only: bool,
    match_braces: bool,
}

impl BufferSession {
    /// A fresh, empty, untitled document.
    pub fn new_untitled(registry: Arc<SyntaxRegistry>) -> Self {
        let profile = Arc::clone(registry.default_profile());
        Self {
            registry,
            path: None,
            fingerprint: Fingerprint::empty(),
            dirty: false,
            profile,
            read_only: false,
            match_braces: true,
        }
    }

    /// Open `path` and prime the UI for it.
    ///
    /// Returns the session together with the raw bytes the widget should
    /// display.  On failure no UI call has been made.
    pub fn open(
        registry: Arc<SyntaxRegistry>,
        path: impl Into<PathBuf>,
        read_only: bool,
        ui: &mut dyn UiPort,
    ) -> Result<(Self, Vec<u8>)> {
        let path = path.into();
        let LoadedBuffer {
            content,
            profile,
            fingerprint,
        } = load(&path, &registry)?;

        log::debug!(
            "opened {} ({} bytes, profile {}, fingerprint {fingerprint})",
            path.display(),
            content.len(),
            profile.name()
        );

        let session = Self {
            registry,
            path: Some(path),
            fingerprint,
            dirty: false,
            profile,
            read_only,
            match_braces: true,
        };

        ui.apply_styling(&session.profile);
        ui.set_read_only(read_only);
        ui.set_tab_label(&session.display_name(), false);
        ui.move_cursor(0);

        Ok((session, content))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }

    pub fn profile(&self) -> &Arc<SyntaxProfile> {
        &self.profile
    }

    pub fn registry(&self) -> &Arc<SyntaxRegistry> {
        &self.registry
    }

    pub fn read_only(&self) -> bool {
        self.read_only
    }

    /// Dirty flag as of the last check.  Use `is_dirty` to test fresh content.
    pub fn dirty(&self) -> bool {
        self.dirty
    }

    /// `true` when `content` differs from what was last loaded or saved.
    pub fn is_dirty(&self, content: &[u8]) -> bool {
        dirty::is_dirty(content, &self.fingerprint)
    }

    pub fn state(&self) -> SaveState {
        match (&self.path, self.dirty) {
            (None, _) => SaveState::Unsaved,
            (Some(_), false) => SaveState::Saved,
            (Some(_), true) => SaveState::Dirty,
        }
    }

    pub fn display_name(&self) -> String {
        tabs::display_name(self.path())
    }

    pub fn tab_label(&self) -> String {
        tabs::tab_label(self.path(), self.dirty)
    }

    pub fn match_braces(&self) -> bool {
        self.match_braces
    }

    pub fn set_match_braces(&mut self, on: bool) {
        self.match_braces = on;
    }

    // ── Events ────────────────────────────────────────────────────────────────

    /// Re-check dirtiness after an edit.  The tab label is only touched when
    /// the flag flips.
    pub fn on_text_changed(&mut self, content: &[u8], ui: &mut dyn UiPort) -> DirtyCheck {
        let check = dirty::check_changed(content, self.dirty, &self.fingerprint);
        self.dirty = check.dirty;
        if check.changed {
            ui.set_tab_label(&self.display_name(), self.dirty);
        }
        check
    }

    /// Replicate `previous_line`'s indentation at the caret after a newline.
    pub fn on_newline(
        &self,
        previous_line: &str,
        cursor: usize,
        ui: &mut dyn UiPort,
    ) -> AutoIndent {
        let edit = AutoIndent::at(cursor, previous_line);
        if !edit.is_empty() {
            ui.insert_text(edit.position, &edit.text);
            ui.move_cursor(edit.cursor_after);
        }
        edit
    }

    /// Update brace highlighting for a caret at byte offset `pos`.
    pub fn on_cursor_moved(
        &self,
        text: &[u8],
        pos: usize,
        ui: &mut dyn UiPort,
    ) -> BraceHighlight {
        if !self.match_braces {
            return BraceHighlight::Clear;
        }
        let highlight = braces::match_brace(text, pos);
        ui.highlight_braces(highlight);
        highlight
    }

    // ── Saving ────────────────────────────────────────────────────────────────

    /// Save to the current path, or ask for one if there is none.
    pub fn save(&mut self, content: &[u8], ui: &mut dyn UiPort) -> Result<SaveOutcome> {
        let Some(path) = self.path.clone() else {
            return self.save_as(content, ui);
        };
        write(&path, content)?;
        log::debug!("saved {} ({} bytes)", path.display(), content.len());
        if self.commit(content).changed {
            ui.set_tab_label(&self.display_name(), self.dirty);
        }
        Ok(SaveOutcome::Saved)
    }

    /// Ask the UI for a location, then save there.
    pub fn save_as(&mut self, content: &[u8], ui: &mut dyn UiPort) -> Result<SaveOutcome> {
        let chosen = ui.prompt_save_location(self.path());
        self.save_as_with(chosen, content, ui)
    }

    /// Save to `chosen`, the answer to a save-as prompt.
    ///
    /// `None` means the user cancelled; nothing changes.  The path, profile
    /// and fingerprint only move once the write has succeeded.
    pub fn save_as_with(
        &mut self,
        chosen: Option<PathBuf>,
        content: &[u8],
        ui: &mut dyn UiPort,
    ) -> Result<SaveOutcome> {
        let Some(path) = chosen else {
            log::debug!("save-as cancelled for {}", self.display_name());
            return Ok(SaveOutcome::Cancelled);
        };
        write(&path, content)?;
        log::debug!("saved as {} ({} bytes)", path.display(), content.len());

        self.profile = self.registry.resolve(&path);
        self.path = Some(path);
        ui.apply_styling(&self.profile);
        self.commit(content);
        // The name changed even if the dirty flag did not.
        ui.set_tab_label(&self.display_name(), self.dirty);
        Ok(SaveOutcome::Saved)
    }

    /// Take `content` as the new on-disk baseline.
    fn commit(&mut self, content: &[u8]) -> DirtyCheck {
        self.fingerprint = dirty::commit(content);
        let check = dirty::check_changed(content, self.dirty, &self.fingerprint);
        self.dirty = check.dirty;
        check
    }
}

/// Overwrite `path` with `content`.  No atomic rename.
fn write(path: &Path, content: &[u8]) -> Result<()> {
    fs::write(path, content).map_err(|source| {
        log::debug!("write to {} failed: {source}", path.display());
        SpaxError::Write {
            path: path.to_owned(),
            source,
        }
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        syntax::DEFAULT_PROFILE,
        ui::testing::{Call, RecordingUi},
    };

    fn registry() -> Arc<SyntaxRegistry> {
        Arc::new(SyntaxRegistry::builtin())
    }

    fn open_file(dir: &Path, name: &str, content: &[u8]) -> (BufferSession, Vec<u8>, RecordingUi) {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        let mut ui = RecordingUi::default();
        let (session, loaded) = BufferSession::open(registry(), &path, false, &mut ui).unwrap();
        (session, loaded, ui)
    }

    // ── Opening ───────────────────────────────────────────────────────────────

    #[test]
    fn untitled_starts_clean_with_default_profile() {
        let session = BufferSession::new_untitled(registry());
        assert_eq!(session.state(), SaveState::Unsaved);
        assert_eq!(session.profile().name(), DEFAULT_PROFILE);
        assert!(!session.is_dirty(b""));
        assert!(session.is_dirty(b"x"));
        assert_eq!(session.tab_label(), "[noname]");
    }

    #[test]
    fn open_primes_ui_and_is_clean() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.py");
        fs::write(&path, b"x = 1\n").unwrap();

        let mut ui = RecordingUi::default();
        let (session, content) = BufferSession::open(registry(), &path, true, &mut ui).unwrap();

        assert_eq!(content, b"x = 1\n");
        assert!(!session.is_dirty(&content));
        assert_eq!(session.state(), SaveState::Saved);
        assert!(session.read_only());
        assert_eq!(
            ui.take(),
            [
                Call::Styling("python".into()),
                Call::ReadOnly(true),
                Call::TabLabel("app.py".into(), false),
                Call::Cursor(0),
            ]
        );
    }

    #[test]
    fn open_missing_file_makes_no_ui_calls() {
        let dir = tempfile::tempdir().unwrap();
        let mut ui = RecordingUi::default();
        let err = BufferSession::open(registry(), dir.path().join("gone.py"), false, &mut ui)
            .unwrap_err();
        assert!(matches!(err, SpaxError::Read { .. }));
        assert!(ui.calls.is_empty());
    }

    // ── Dirty tracking ────────────────────────────────────────────────────────

    #[test]
    fn edits_notify_only_on_transition() {
        let dir = tempfile::tempdir().unwrap();
        let (mut session, _, mut ui) = open_file(dir.path(), "a.rs", b"fn main() {}");
        ui.take();

        assert!(session.on_text_changed(b"fn main() {}x", &mut ui).changed);
        assert!(!session.on_text_changed(b"fn main() {}xy", &mut ui).changed);
        assert!(session.dirty());
        assert_eq!(session.state(), SaveState::Dirty);
        assert_eq!(ui.labels(), [("a.rs".to_owned(), true)]);

        let back = session.on_text_changed(b"fn main() {}", &mut ui);
        assert_eq!(back, DirtyCheck { dirty: false, changed: true });
        assert_eq!(
            ui.labels(),
            [("a.rs".to_owned(), true), ("a.rs".to_owned(), false)]
        );
    }

    #[test]
    fn edits_never_move_the_fingerprint() {
        let dir = tempfile::tempdir().unwrap();
        let (mut session, _, mut ui) = open_file(dir.path(), "a.txt", b"one");
        let before = *session.fingerprint();
        session.on_text_changed(b"two", &mut ui);
        session.on_text_changed(b"three", &mut ui);
        assert_eq!(*session.fingerprint(), before);
    }

    // ── Saving ────────────────────────────────────────────────────────────────

    #[test]
    fn save_writes_and_commits() {
        let dir = tempfile::tempdir().unwrap();
        let (mut session, _, mut ui) = open_file(dir.path(), "a.txt", b"one");
        session.on_text_changed(b"one two", &mut ui);
        ui.take();

        let outcome = session.save(b"one two", &mut ui).unwrap();

        assert_eq!(outcome, SaveOutcome::Saved);
        assert_eq!(fs::read(dir.path().join("a.txt")).unwrap(), b"one two");
        assert_eq!(*session.fingerprint(), Fingerprint::of(b"one two"));
        assert!(!session.dirty());
        assert_eq!(session.state(), SaveState::Saved);
        assert_eq!(ui.take(), [Call::TabLabel("a.txt".into(), false)]);
    }

    #[test]
    fn save_without_path_prompts() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("new.rs");
        let mut session = BufferSession::new_untitled(registry());
        let mut ui = RecordingUi::answering(&target);
        session.on_text_changed(b"fn f() {}", &mut ui);

        let outcome = session.save(b"fn f() {}", &mut ui).unwrap();

        assert_eq!(outcome, SaveOutcome::Saved);
        assert_eq!(session.path(), Some(target.as_path()));
        assert_eq!(session.profile().name(), "rust");
        assert_eq!(session.state(), SaveState::Saved);
        assert!(ui.calls.contains(&Call::Prompt));
        assert!(ui.calls.contains(&Call::Styling("rust".into())));
        assert_eq!(ui.labels().last(), Some(&("new.rs".to_owned(), false)));
    }

    #[test]
    fn cancelled_save_as_changes_nothing() {
        let mut session = BufferSession::new_untitled(registry());
        let mut ui = RecordingUi::default();
        session.on_text_changed(b"draft", &mut ui);
        let fingerprint = *session.fingerprint();

        let outcome = session.save(b"draft", &mut ui).unwrap();

        assert_eq!(outcome, SaveOutcome::Cancelled);
        assert_eq!(session.path(), None);
        assert_eq!(*session.fingerprint(), fingerprint);
        assert!(session.dirty());
        assert_eq!(session.state(), SaveState::Unsaved);
    }

    #[test]
    fn cancelled_save_as_keeps_existing_path() {
        let dir = tempfile::tempdir().unwrap();
        let (mut session, _, mut ui) = open_file(dir.path(), "keep.py", b"a");
        session.on_text_changed(b"ab", &mut ui);

        let outcome = session.save_as(b"ab", &mut ui).unwrap();

        assert_eq!(outcome, SaveOutcome::Cancelled);
        assert_eq!(session.path(), Some(dir.path().join("keep.py").as_path()));
        assert!(session.dirty());
        assert!(session.is_dirty(b"ab"));
    }

    #[test]
    fn write_failure_keeps_dirty_state() {
        let dir = tempfile::tempdir().unwrap();
        let (mut session, _, mut ui) = open_file(dir.path(), "a.txt", b"one");
        session.on_text_changed(b"one two", &mut ui);
        let fingerprint = *session.fingerprint();

        // Make the target unwritable by putting a directory in its place.
        fs::remove_file(dir.path().join("a.txt")).unwrap();
        fs::create_dir(dir.path().join("a.txt")).unwrap();

        let err = session.save(b"one two", &mut ui).unwrap_err();

        assert!(matches!(err, SpaxError::Write { .. }), "{err}");
        assert_eq!(*session.fingerprint(), fingerprint);
        assert!(session.dirty());
        assert!(session.is_dirty(b"one two"));
        assert_eq!(session.state(), SaveState::Dirty);
    }

    #[test]
    fn failed_save_as_keeps_path_and_profile() {
        let dir = tempfile::tempdir().unwrap();
        let (mut session, _, mut ui) = open_file(dir.path(), "a.py", b"x");
        session.on_text_changed(b"xy", &mut ui);
        let bad = dir.path().join("missing-dir").join("b.rs");

        let err = session.save_as_with(Some(bad), b"xy", &mut ui).unwrap_err();

        assert!(matches!(err, SpaxError::Write { .. }));
        assert_eq!(session.path(), Some(dir.path().join("a.py").as_path()));
        assert_eq!(session.profile().name(), "python");
        assert!(session.dirty());
    }

    #[test]
    fn save_as_reresolves_profile_and_relabels() {
        let dir = tempfile::tempdir().unwrap();
        let (mut session, _, mut ui) = open_file(dir.path(), "notes.txt", b"{}");
        ui.take();

        let target = dir.path().join("notes.json");
        let outcome = session.save_as_with(Some(target.clone()), b"{}", &mut ui).unwrap();

        assert_eq!(outcome, SaveOutcome::Saved);
        assert_eq!(session.profile().name(), "json");
        assert_eq!(fs::read(&target).unwrap(), b"{}");
        // Content was already clean, so only the rename shows up.
        assert_eq!(
            ui.take(),
            [
                Call::Styling("json".into()),
                Call::TabLabel("notes.json".into(), false),
            ]
        );
    }

    // ── Auto-indent & braces ──────────────────────────────────────────────────

    #[test]
    fn newline_inserts_indent_and_moves_cursor() {
        let session = BufferSession::new_untitled(registry());
        let mut ui = RecordingUi::default();

        let edit = session.on_newline("    if x:", 10, &mut ui);

        assert_eq!(edit.text, "    ");
        assert_eq!(ui.take(), [Call::Insert(10, "    ".into()), Call::Cursor(14)]);
    }

    #[test]
    fn newline_after_flush_line_does_nothing() {
        let session = BufferSession::new_untitled(registry());
        let mut ui = RecordingUi::default();
        assert!(session.on_newline("top", 3, &mut ui).is_empty());
        assert!(ui.calls.is_empty());
    }

    #[test]
    fn cursor_on_brace_highlights() {
        let session = BufferSession::new_untitled(registry());
        let mut ui = RecordingUi::default();

        let h = session.on_cursor_moved(b"f(x)", 1, &mut ui);

        assert_eq!(h, BraceHighlight::Matched { brace: 1, partner: 3 });
        assert_eq!(ui.take(), [Call::Braces(h)]);
    }

    #[test]
    fn brace_matching_can_be_disabled() {
        let mut session = BufferSession::new_untitled(registry());
        session.set_match_braces(false);
        let mut ui = RecordingUi::default();
        assert_eq!(session.on_cursor_moved(b"()", 0, &mut ui), BraceHighlight::Clear);
        assert!(ui.calls.is_empty());
    }
}
