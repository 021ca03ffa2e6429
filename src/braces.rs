// ── Brace matching ────────────────────────────────────────────────────────────
//
// Decides what to highlight when the caret sits on a bracket.  Byte offsets
// only; the UI maps them onto its own highlight indicators.  Like Scintilla's
// brace matcher, only brackets of the same kind are counted when tracking
// nesting depth.

/// What the UI should highlight after a caret move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BraceHighlight {
    /// The caret is not on a bracket; clear any highlight.
    Clear,
    /// `brace` and its `partner` balance each other.
    Matched { brace: usize, partner: usize },
    /// `brace` has no partner in the buffer.
    Unmatched { brace: usize },
}

fn partner_of(b: u8) -> Option<(u8, bool)> {
    // (partner byte, scans forward)
    match b {
        b'(' => Some((b')', true)),
        b'[' => Some((b']', true)),
        b'{' => Some((b'}', true)),
        b')' => Some((b'(', false)),
        b']' => Some((b'[', false)),
        b'}' => Some((b'{', false)),
        _ => None,
    }
}

/// Find the highlight for a caret at byte offset `pos` in `text`.
pub fn match_brace(text: &[u8], pos: usize) -> BraceHighlight {
    let Some(&brace) = text.get(pos) else {
        return BraceHighlight::Clear;
    };
    let Some((partner, forward)) = partner_of(brace) else {
        return BraceHighlight::Clear;
    };

    let mut depth = 0usize;
    let mut visit = |i: usize| -> bool {
        let b = text[i];
        if b == brace {
            depth += 1;
        } else if b == partner {
            depth -= 1;
            return depth == 0;
        }
        false
    };

    let found = if forward {
        (pos..text.len()).find(|&i| visit(i))
    } else {
        (0..=pos).rev().find(|&i| visit(i))
    };

    match found {
        Some(other) => BraceHighlight::Matched {
            brace: pos,
            partner: other,
        },
        None => BraceHighlight::Unmatched { brace: pos },
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
