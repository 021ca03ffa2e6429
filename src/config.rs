// ── Syntax configuration files ────────────────────────────────────────────────
//
// Reads a JSON description of a `SyntaxRegistry`: profile definitions plus the
// extension → profile-name table.  Pure safe Rust + serde_json.

use std::{
    collections::{hash_map::Entry, HashMap},
    fs,
    num::NonZeroU32,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{
    error::{Result, SpaxError},
    syntax::{
        registry::normalise_extension, StyleRule, SyntaxProfile, SyntaxRegistry,
        DEFAULT_PROFILE, DEFAULT_TAB_WIDTH,
    },
};

// ── On-disk types ─────────────────────────────────────────────────────────────

/// Root of a syntax configuration file.
#[derive(Debug, Deserialize)]
pub struct RegistryFile {
    pub version: u32,
    #[serde(default)]
    pub extensions: HashMap<String, String>,
    pub profiles: HashMap<String, ProfileEntry>,
}

/// One profile; its name is the key it is stored under.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileEntry {
    #[serde(default)]
    pub styles: Vec<StyleRule>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default = "default_tab_width")]
    pub tab_width: NonZeroU32,
    #[serde(default)]
    pub tabs_to_spaces: bool,
}

fn default_tab_width() -> NonZeroU32 {
    DEFAULT_TAB_WIDTH
}

impl ProfileEntry {
    fn into_profile(self, name: &str) -> SyntaxProfile {
        let profile = self
            .styles
            .into_iter()
            .fold(SyntaxProfile::new(name), |p, rule| p.with_style(rule.name, rule.style));
        profile
            .with_keywords(self.keywords)
            .with_tab_width(self.tab_width)
            .with_tabs_to_spaces(self.tabs_to_spaces)
    }
}

// ── Format version ────────────────────────────────────────────────────────────

pub const CONFIG_VERSION: u32 = 1;

// ── Parse ─────────────────────────────────────────────────────────────────────

impl RegistryFile {
    /// Validate and turn the file into a registry.  `origin` is only used in
    /// error messages.
    pub fn into_registry(mut self, origin: &Path) -> Result<SyntaxRegistry> {
        if self.version != CONFIG_VERSION {
            return Err(SpaxError::ConfigVersion {
                path: origin.to_owned(),
                found: self.version,
            });
        }
        let default = self
            .profiles
            .remove(DEFAULT_PROFILE)
            .ok_or_else(|| SpaxError::MissingDefaultProfile {
                path: origin.to_owned(),
            })?;

        let mut reg = SyntaxRegistry::new(default.into_profile(DEFAULT_PROFILE));
        for (name, entry) in self.profiles {
            reg.insert_profile(entry.into_profile(&name));
        }

        // Keys that only differ by a leading dot or case collapse onto one
        // lookup key; they must agree on the profile.
        let mut extensions: Vec<(String, String)> = self.extensions.into_iter().collect();
        extensions.sort_unstable();
        let mut seen: HashMap<String, String> = HashMap::new();
        for (ext, profile) in &extensions {
            match seen.entry(normalise_extension(ext)) {
                Entry::Vacant(slot) => {
                    slot.insert(profile.clone());
                }
                Entry::Occupied(slot) if slot.get() != profile => {
                    return Err(SpaxError::ConflictingExtension {
                        path: origin.to_owned(),
                        extension: slot.key().clone(),
                        first: slot.get().clone(),
                        second: profile.clone(),
                    });
                }
                Entry::Occupied(_) => {}
            }
        }

        for (ext, profile) in extensions {
            if reg.profile(&profile).is_none() {
                log::warn!(
                    "{}: extension {ext:?} maps to undefined profile {profile:?}",
                    origin.display()
                );
            }
            reg.map_extension(&ext, profile);
        }
        Ok(reg)
    }
}

/// Parse a registry from JSON text.
pub fn from_json(text: &str) -> Result<SyntaxRegistry> {
    let origin = PathBuf::from("<inline>");
    let file: RegistryFile = serde_json::from_str(text).map_err(|source| SpaxError::Config {
        path: origin.clone(),
        source,
    })?;
    file.into_registry(&origin)
}

/// Read and parse a registry file.
pub fn load(path: &Path) -> Result<SyntaxRegistry> {
    let data = fs::read(path).map_err(|source| SpaxError::Read {
        path: path.to_owned(),
        source,
    })?;
    let file: RegistryFile = serde_json::from_slice(&data).map_err(|source| SpaxError::Config {
        path: path.to_owned(),
        source,
    })?;
    let reg = file.into_registry(path)?;
    log::debug!(
        "loaded {} syntax profiles from {}",
        reg.profile_names().len(),
        path.display()
    );
    Ok(reg)
}

/// Load `path` if given, falling back to the built-in registry on any error.
pub fn load_or_builtin(path: Option<&Path>) -> SyntaxRegistry {
    let Some(path) = path else {
        return SyntaxRegistry::builtin();
    };
    match load(path) {
        Ok(reg) => reg,
        Err(e) => {
            log::warn!("{e}; using built-in syntax profiles");
            SyntaxRegistry::builtin()
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
