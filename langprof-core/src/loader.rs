//! Language profile registry and loader
//!
//! Manages the embedded language profiles. They are parsed once, on first
//! access, and shared as `Arc<LanguageProfile>`.

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, OnceLock};

use crate::config::ProfileConfig;
use crate::error::{ProfileError, Result};
use crate::profile::LanguageProfile;

/// Code of the baseline profile every other profile builds on
pub const COMMON_CODE: &str = "common";

const COMMON_TOML: &str = include_str!("../configs/languages/common.toml");

/// Built-in languages layered over the common profile
const EMBEDDED_LANGUAGES: &[(&str, &str)] = &[(
    "zh",
    include_str!("../configs/languages/chinese.toml"),
)];

/// Embedded language profiles
static EMBEDDED: OnceLock<ProfileRegistry> = OnceLock::new();

/// Map from language code (and English name) to profile
#[derive(Debug, Clone, Default)]
pub struct ProfileRegistry {
    profiles: HashMap<String, Arc<LanguageProfile>>,
    codes: BTreeSet<String>,
}

impl ProfileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a profile under its code and its lowercased name
    ///
    /// A later profile with the same code or name replaces the earlier one.
    pub fn register(&mut self, profile: LanguageProfile) -> Arc<LanguageProfile> {
        let profile = Arc::new(profile);
        let code = normalize(profile.code());
        let name = normalize(profile.name());

        log::debug!("Registering language profile '{code}' ({name})");

        self.profiles.insert(name, profile.clone());
        self.profiles.insert(code.clone(), profile.clone());
        self.codes.insert(code);
        profile
    }

    /// Exact lookup by code or name
    pub fn get(&self, code: &str) -> Option<Arc<LanguageProfile>> {
        self.profiles.get(&normalize(code)).cloned()
    }

    /// Look up a locale, falling back from `zh_CN` / `zh-TW` to `zh`
    pub fn resolve(&self, code: &str) -> Result<Arc<LanguageProfile>> {
        let normalized = normalize(code);
        if let Some(profile) = self.profiles.get(&normalized) {
            return Ok(profile.clone());
        }

        if let Some((prefix, _)) = normalized.split_once('_') {
            if let Some(profile) = self.profiles.get(prefix) {
                log::debug!("Resolved locale '{code}' to language '{prefix}'");
                return Ok(profile.clone());
            }
        }

        Err(ProfileError::UnknownLanguage {
            code: code.to_string(),
        })
    }

    /// Registered codes, sorted
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// Locale codes are case-insensitive and accept `-` or `_` as separator
fn normalize(code: &str) -> String {
    code.trim().to_lowercase().replace('-', "_")
}

fn embedded() -> &'static ProfileRegistry {
    EMBEDDED.get_or_init(|| {
        let mut registry = ProfileRegistry::new();

        let common = match load_embedded_language(COMMON_CODE, COMMON_TOML, None) {
            Ok(profile) => registry.register(profile),
            Err(e) => {
                log::warn!("Failed to load common profile: {e}");
                return registry;
            }
        };

        for (code, toml_str) in EMBEDDED_LANGUAGES {
            match load_embedded_language(code, toml_str, Some(common.as_ref())) {
                Ok(profile) => {
                    registry.register(profile);
                }
                Err(e) => {
                    log::warn!("Failed to load {code} profile: {e}");
                }
            }
        }

        registry
    })
}

/// Load embedded language from TOML string
fn load_embedded_language(
    code: &str,
    toml_str: &str,
    base: Option<&LanguageProfile>,
) -> Result<LanguageProfile> {
    let config = ProfileConfig::from_toml_str(toml_str).map_err(|e| {
        ProfileError::InvalidConfig(format!("Failed to parse {code} config: {e}"))
    })?;
    LanguageProfile::from_config(&config, base)
}

/// Built-in profile for a locale code
pub fn get_profile(code: &str) -> Result<Arc<LanguageProfile>> {
    embedded().resolve(code)
}

/// Built-in profile for a locale, or the common profile when the language
/// has no dedicated rules
pub fn get_profile_or_common(code: &str) -> Result<Arc<LanguageProfile>> {
    get_profile(code).or_else(|_| common_profile())
}

/// The baseline profile
pub fn common_profile() -> Result<Arc<LanguageProfile>> {
    get_profile(COMMON_CODE)
}

/// The Chinese profile
pub fn chinese() -> Result<Arc<LanguageProfile>> {
    get_profile("zh")
}

/// Codes of the built-in profiles, sorted
pub fn available_languages() -> Vec<&'static str> {
    embedded().codes().collect()
}

/// Load a profile file layered over the common profile
pub fn load_profile_file(path: &std::path::Path) -> Result<LanguageProfile> {
    let common = common_profile()?;
    LanguageProfile::from_file(path, Some(common.as_ref()))
}
