// ── Built-in profiles ─────────────────────────────────────────────────────────
//
// A ready-made registry for front ends that ship without a syntax
// configuration file.  Colours follow a Notepad++-style light palette; style
// names are the token classes the profile's lexer emits.

use std::num::NonZeroU32;

use super::{Rgb, Style, SyntaxProfile, SyntaxRegistry, DEFAULT_PROFILE};

// ── Palette ───────────────────────────────────────────────────────────────────

const FG: Rgb = Rgb::new(0x00, 0x00, 0x00);
const BG: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);
const COMMENT: Rgb = Rgb::new(0x00, 0x80, 0x00);
const KEYWORD: Rgb = Rgb::new(0x00, 0x00, 0xFF);
const KEYWORD2: Rgb = Rgb::new(0x00, 0x00, 0x80);
const STRING: Rgb = Rgb::new(0x80, 0x00, 0x00);
const NUMBER: Rgb = Rgb::new(0xFF, 0x80, 0x00);
const PREPROC: Rgb = Rgb::new(0x80, 0x40, 0x00);
const LABEL: Rgb = Rgb::new(0x80, 0x00, 0x80);
const TAG: Rgb = Rgb::new(0x80, 0x00, 0x00);
const ATTR: Rgb = Rgb::new(0xFF, 0x00, 0x00);
const SECTION: Rgb = Rgb::new(0x00, 0x00, 0x80);

const FONT_FACE: &str = "Monospace";
const FONT_SIZE: u32 = 10;

// ── Extension table ───────────────────────────────────────────────────────────

static EXTENSIONS: &[(&str, &str)] = &[
    ("py", "python"),
    ("pyw", "python"),
    ("pyi", "python"),
    ("rs", "rust"),
    ("c", "c"),
    ("h", "c"),
    ("cpp", "c"),
    ("cc", "c"),
    ("cxx", "c"),
    ("hpp", "c"),
    ("js", "javascript"),
    ("mjs", "javascript"),
    ("cjs", "javascript"),
    ("ts", "javascript"),
    ("html", "html"),
    ("htm", "html"),
    ("xhtml", "html"),
    ("xml", "html"),
    ("svg", "html"),
    ("css", "css"),
    ("scss", "css"),
    ("json", "json"),
    ("toml", "toml"),
    ("yaml", "yaml"),
    ("yml", "yaml"),
    ("sh", "shell"),
    ("bash", "shell"),
    ("zsh", "shell"),
    ("md", "markdown"),
    ("markdown", "markdown"),
];

// ── Keyword tables ────────────────────────────────────────────────────────────

const PY_KEYWORDS: &str = "False None True and as assert async await break class continue def del \
elif else except finally for from global if import in is lambda nonlocal not or pass raise \
return try while with yield";

const RUST_KEYWORDS: &str = "as async await break const continue crate dyn else enum extern \
false fn for if impl in let loop match mod move mut pub ref return self Self static struct \
super trait true type union unsafe use where while";

const C_KEYWORDS: &str = "auto break case char class const continue default delete do double \
else enum extern float for goto if inline int long namespace new private protected public \
register return short signed sizeof static struct switch template this typedef union \
unsigned virtual void volatile while";

const JS_KEYWORDS: &str = "break case catch class const continue debugger default delete do \
else export extends false finally for function if import in instanceof let new null of \
return static super switch this throw true try typeof undefined var void while with yield \
async await";

const SHELL_KEYWORDS: &str = "case do done elif else esac export fi for function if in local \
return select then until while";

// ── Profiles ──────────────────────────────────────────────────────────────────

fn width(n: u32) -> NonZeroU32 {
    NonZeroU32::new(n).unwrap_or(super::DEFAULT_TAB_WIDTH)
}

fn base(name: &str) -> SyntaxProfile {
    SyntaxProfile::new(name).with_style(
        "default",
        Style {
            fore: Some(FG),
            back: Some(BG),
            face: Some(FONT_FACE.to_owned()),
            size: Some(FONT_SIZE),
            ..Style::default()
        },
    )
}

/// Styles shared by every C-family lexer.
fn code(name: &str, keywords: &str) -> SyntaxProfile {
    base(name)
        .with_style("comment", Style::fore(COMMENT))
        .with_style("number", Style::fore(NUMBER))
        .with_style("keyword", Style::fore(KEYWORD).bold())
        .with_style("string", Style::fore(STRING))
        .with_style("character", Style::fore(STRING))
        .with_style("operator", Style::fore(FG))
        .with_keywords(keywords.split_whitespace())
}

fn default_profile() -> SyntaxProfile {
    base(DEFAULT_PROFILE)
}

fn python() -> SyntaxProfile {
    code("python", PY_KEYWORDS)
        .with_style("triple", Style::fore(COMMENT))
        .with_style("classname", Style::fore(KEYWORD2))
        .with_style("defname", Style::fore(KEYWORD2))
        .with_style("decorator", Style::fore(PREPROC))
        .with_tabs_to_spaces(true)
}

fn rust() -> SyntaxProfile {
    code("rust", RUST_KEYWORDS)
        .with_style("lifetime", Style::fore(LABEL))
        .with_style("macro", Style::fore(PREPROC))
        .with_tabs_to_spaces(true)
}

fn c() -> SyntaxProfile {
    code("c", C_KEYWORDS).with_style("preprocessor", Style::fore(PREPROC))
}

fn javascript() -> SyntaxProfile {
    code("javascript", JS_KEYWORDS)
        .with_style("regex", Style::fore(LABEL))
        .with_tab_width(width(2))
        .with_tabs_to_spaces(true)
}

fn html() -> SyntaxProfile {
    base("html")
        .with_style("tag", Style::fore(TAG).bold())
        .with_style("attribute", Style::fore(ATTR))
        .with_style("string", Style::fore(STRING))
        .with_style("comment", Style::fore(COMMENT))
        .with_tab_width(width(2))
        .with_tabs_to_spaces(true)
}

fn css() -> SyntaxProfile {
    base("css")
        .with_style("tag", Style::fore(TAG))
        .with_style("class", Style::fore(KEYWORD).bold())
        .with_style("identifier", Style::fore(KEYWORD))
        .with_style("value", Style::fore(STRING))
        .with_style("comment", Style::fore(COMMENT))
        .with_tab_width(width(2))
        .with_tabs_to_spaces(true)
}

fn json() -> SyntaxProfile {
    base("json")
        .with_style("propertyname", Style::fore(KEYWORD).bold())
        .with_style("string", Style::fore(STRING))
        .with_style("number", Style::fore(NUMBER))
        .with_style("keyword", Style::fore(KEYWORD2))
        .with_keywords(["true", "false", "null"])
        .with_tab_width(width(2))
        .with_tabs_to_spaces(true)
}

fn toml() -> SyntaxProfile {
    base("toml")
        .with_style("section", Style::fore(SECTION).bold())
        .with_style("key", Style::fore(PREPROC))
        .with_style("string", Style::fore(STRING))
        .with_style("number", Style::fore(NUMBER))
        .with_style("comment", Style::fore(COMMENT))
        .with_keywords(["true", "false"])
        .with_tabs_to_spaces(true)
}

fn yaml() -> SyntaxProfile {
    base("yaml")
        .with_style("key", Style::fore(KEYWORD2))
        .with_style("comment", Style::fore(COMMENT))
        .with_style("number", Style::fore(NUMBER))
        .with_keywords(["true", "false", "null", "yes", "no"])
        .with_tab_width(width(2))
        .with_tabs_to_spaces(true)
}

fn shell() -> SyntaxProfile {
    code("shell", SHELL_KEYWORDS).with_style("scalar", Style::fore(LABEL))
}

fn markdown() -> SyntaxProfile {
    base("markdown")
        .with_style("header", Style::fore(SECTION).bold())
        .with_style("strong", Style::default().bold())
        .with_style("em", Style::default().italic())
        .with_style("code", Style::fore(PREPROC))
        .with_style("link", Style::fore(KEYWORD))
        .with_tabs_to_spaces(true)
}

impl SyntaxRegistry {
    /// The registry used when no syntax configuration file is supplied.
    pub fn builtin() -> Self {
        let mut reg = SyntaxRegistry::new(default_profile());
        for profile in [
            python(),
            rust(),
            c(),
            javascript(),
            html(),
            css(),
            json(),
            toml(),
            yaml(),
            shell(),
            markdown(),
        ] {
            reg.insert_profile(profile);
        }
        for (ext, profile) in EXTENSIONS {
            reg.map_extension(ext, *profile);
        }
        reg
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
