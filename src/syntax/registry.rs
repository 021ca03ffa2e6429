// ── Syntax registry ───────────────────────────────────────────────────────────
//
// Maps file paths to syntax profiles.  Resolution is total: an unknown
// extension, an extension mapped to a profile nobody registered, or a path
// with no filename at all all land on the `default` profile.

use std::{collections::HashMap, path::Path, sync::Arc};

use super::{SyntaxProfile, DEFAULT_PROFILE};

/// Text after the last `.` of the final path segment, or `""` when there is
/// none.  Case is preserved.
pub fn extension_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy())
        .and_then(|name| name.rfind('.').map(|i| name[i + 1..].to_owned()))
        .unwrap_or_default()
}

/// Lookup key for `ext`: no leading dot, ASCII lower case.
pub(crate) fn normalise_extension(ext: &str) -> String {
    ext.strip_prefix('.').unwrap_or(ext).to_ascii_lowercase()
}

/// Profile lookup tables, built once and shared between sessions.
#[derive(Debug, Clone)]
pub struct SyntaxRegistry {
    profiles: HashMap<String, Arc<SyntaxProfile>>,
    /// Lower-cased extension (no dot) → profile name.
    extensions: HashMap<String, String>,
    default: Arc<SyntaxProfile>,
}

impl SyntaxRegistry {
    /// A registry holding only `default`.  The profile is renamed to
    /// `DEFAULT_PROFILE` whatever name it was built with.
    pub fn new(mut default: SyntaxProfile) -> Self {
        default.name = DEFAULT_PROFILE.to_owned();
        let default = Arc::new(default);
        let mut profiles = HashMap::new();
        profiles.insert(DEFAULT_PROFILE.to_owned(), Arc::clone(&default));
        Self {
            profiles,
            extensions: HashMap::new(),
            default,
        }
    }

    /// Register `profile` under its own name, replacing any previous one.
    pub fn insert_profile(&mut self, profile: SyntaxProfile) {
        let profile = Arc::new(profile);
        if profile.name() == DEFAULT_PROFILE {
            self.default = Arc::clone(&profile);
        }
        self.profiles.insert(profile.name().to_owned(), profile);
    }

    /// Route files ending in `ext` (with or without a leading dot, any case)
    /// to the profile called `profile`.
    pub fn map_extension(&mut self, ext: &str, profile: impl Into<String>) {
        self.extensions
            .insert(normalise_extension(ext), profile.into());
    }

    pub fn with_profile(mut self, profile: SyntaxProfile) -> Self {
        self.insert_profile(profile);
        self
    }

    pub fn with_extension(mut self, ext: &str, profile: impl Into<String>) -> Self {
        self.map_extension(ext, profile);
        self
    }

    pub fn default_profile(&self) -> &Arc<SyntaxProfile> {
        &self.default
    }

    pub fn profile(&self, name: &str) -> Option<&Arc<SyntaxProfile>> {
        self.profiles.get(name)
    }

    /// Profile names, sorted.
    pub fn profile_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.profiles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Profile called `name`, or `default`.
    pub fn resolve_name(&self, name: &str) -> Arc<SyntaxProfile> {
        match self.profiles.get(name) {
            Some(p) => Arc::clone(p),
            None => {
                log::trace!("no syntax profile named {name:?}; using default");
                Arc::clone(&self.default)
            }
        }
    }

    /// Profile for `path`, chosen by extension, or `default`.
    pub fn resolve(&self, path: &Path) -> Arc<SyntaxProfile> {
        let ext = normalise_extension(&extension_of(path));
        match self.extensions.get(&ext) {
            Some(name) => self.resolve_name(name),
            None => {
                log::trace!("no syntax mapping for extension {ext:?}; using default");
                Arc::clone(&self.default)
            }
        }
    }
}

impl Default for SyntaxRegistry {
    fn default() -> Self {
        Self::new(SyntaxProfile::new(DEFAULT_PROFILE))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
