// ── Auto-indent ───────────────────────────────────────────────────────────────
//
// On newline the previous line's leading whitespace is replicated verbatim.
// There is no bracket-depth analysis and no language-aware outdenting.

/// The maximal prefix of `line` made of spaces and tabs.
pub fn leading_whitespace(line: &str) -> &str {
    let end = line
        .find(|c: char| c != ' ' && c != '\t')
        .unwrap_or(line.len());
    &line[..end]
}

/// Indent to insert after a newline that followed `previous_line`.
pub fn compute_auto_indent(previous_line: &str) -> &str {
    leading_whitespace(previous_line)
}

/// A ready-to-apply auto-indent edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoIndent {
    /// Byte offset the indent is inserted at (the caret after the newline).
    pub position: usize,
    pub text: String,
    /// Where the caret goes once `text` is in place.
    pub cursor_after: usize,
}

impl AutoIndent {
    /// Build the edit for a caret at `cursor` whose previous line is
    /// `previous_line`.
    pub fn at(cursor: usize, previous_line: &str) -> Self {
        let text = compute_auto_indent(previous_line).to_owned();
        Self {
            position: cursor,
            cursor_after: cursor.saturating_add(text.len()),
            text,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
