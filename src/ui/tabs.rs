// ── Tab labels ────────────────────────────────────────────────────────────────
//
// Pure string formatting for the tab that hosts a buffer.  No UI calls here;
// front ends that want the stock decoration call `tab_label` from their
// `UiPort::set_tab_label`.

use std::path::Path;

/// Name shown for a buffer that has never been saved.
pub const UNTITLED: &str = "[noname]";

/// The bare filename component, or `UNTITLED` if there is no path.
pub fn display_name(path: Option<&Path>) -> String {
    path.and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| UNTITLED.to_owned())
}

/// Compute the label for a tab.
///
/// Format:
/// - Untitled, clean  → `"[noname]"`
/// - Untitled, dirty  → `"[noname] *"`
/// - Named, clean     → `"filename.py"`
/// - Named, dirty     → `"filename.py *"`
pub fn tab_label(path: Option<&Path>, dirty: bool) -> String {
    let name = display_name(path);
    if dirty {
        format!("{name} *")
    } else {
        name
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
