// ── Syntax profiles ───────────────────────────────────────────────────────────
//
// A `SyntaxProfile` is everything the rendering widget needs to style one file
// type: named style rules, a keyword list and tab settings.  Profiles are
// built once, handed to a `SyntaxRegistry`, and shared read-only as
// `Arc<SyntaxProfile>` from then on.

pub mod builtin;
pub mod registry;

use std::{fmt, num::NonZeroU32, str::FromStr};

use serde::Deserialize;

pub use registry::{extension_of, SyntaxRegistry};

/// Name of the fallback profile every registry must carry.
pub const DEFAULT_PROFILE: &str = "default";

/// Tab width used when a profile does not specify one.
pub const DEFAULT_TAB_WIDTH: NonZeroU32 = match NonZeroU32::new(4) {
    Some(n) => n,
    None => unreachable!(),
};

// ── Colour ────────────────────────────────────────────────────────────────────

/// A 24-bit colour in 0xRRGGBB form.  Written as `#RRGGBB` in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Rgb(pub u32);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Scintilla's BGR COLORREF layout.
    pub fn to_bgr(self) -> u32 {
        let r = (self.0 >> 16) & 0xFF;
        let g = (self.0 >> 8) & 0xFF;
        let b = self.0 & 0xFF;
        (b << 16) | (g << 8) | r
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected a `#RRGGBB` colour, got `{0}`")]
pub struct ParseRgbError(String);

impl FromStr for Rgb {
    type Err = ParseRgbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .filter(|h| h.len() == 6 && h.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| ParseRgbError(s.to_owned()))?;
        u32::from_str_radix(hex, 16)
            .map(Rgb)
            .map_err(|_| ParseRgbError(s.to_owned()))
    }
}

impl TryFrom<String> for Rgb {
    type Error = ParseRgbError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0 & 0xFF_FFFF)
    }
}

// ── Styles ────────────────────────────────────────────────────────────────────

/// Visual attributes for one token class.  Unset fields inherit from the
/// widget's default style.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Style {
    pub fore: Option<Rgb>,
    pub back: Option<Rgb>,
    pub bold: bool,
    pub italic: bool,
    /// Font face, e.g. `"Monospace"`.
    pub face: Option<String>,
    /// Point size.
    pub size: Option<u32>,
}

impl Style {
    pub fn fore(color: Rgb) -> Self {
        Self {
            fore: Some(color),
            ..Self::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }
}

/// A named style, e.g. `comment` or `keyword`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StyleRule {
    pub name: String,
    #[serde(flatten)]
    pub style: Style,
}

// ── SyntaxProfile ─────────────────────────────────────────────────────────────

/// Highlighting and formatting rules for one file type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxProfile {
    name: String,
    styles: Vec<StyleRule>,
    keywords: Vec<String>,
    tab_width: NonZeroU32,
    tabs_to_spaces: bool,
}

impl SyntaxProfile {
    /// An empty profile: no styles, no keywords, 4-wide hard tabs.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            styles: Vec::new(),
            keywords: Vec::new(),
            tab_width: DEFAULT_TAB_WIDTH,
            tabs_to_spaces: false,
        }
    }

    /// Append a style rule.  A rule with an existing name replaces it in
    /// place so the original ordering is kept.
    pub fn with_style(mut self, name: impl Into<String>, style: Style) -> Self {
        let name = name.into();
        match self.styles.iter_mut().find(|r| r.name == name) {
            Some(rule) => rule.style = style,
            None => self.styles.push(StyleRule { name, style }),
        }
        self
    }

    pub fn with_keywords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn with_tab_width(mut self, width: NonZeroU32) -> Self {
        self.tab_width = width;
        self
    }

    pub fn with_tabs_to_spaces(mut self, on: bool) -> Self {
        self.tabs_to_spaces = on;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Style rules in declaration order.
    pub fn styles(&self) -> &[StyleRule] {
        &self.styles
    }

    pub fn style(&self, name: &str) -> Option<&Style> {
        self.styles.iter().find(|r| r.name == name).map(|r| &r.style)
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Keywords joined with single spaces, the form Scintilla-style keyword
    /// sets expect.
    pub fn keyword_list(&self) -> String {
        self.keywords.join(" ")
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.iter().any(|k| k == word)
    }

    /// Tab width in columns; also the indent width.
    pub fn tab_width(&self) -> u32 {
        self.tab_width.get()
    }

    pub fn tabs_to_spaces(&self) -> bool {
        self.tabs_to_spaces
    }

    /// Whether the widget should insert hard tabs.
    pub fn use_tabs(&self) -> bool {
        !self.tabs_to_spaces
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
