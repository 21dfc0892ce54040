//! Language type: validated language representation.
//!
//! A `Language` can only be built from a code present in the registry, so
//! everything downstream (document paths, direction, persisted preference)
//! works with a known-good code.

use crate::i18n::{LanguageConfig, LanguageRegistry, TextDirection};
use anyhow::{bail, Result};
use serde::{Serialize, Serializer};
use std::fmt;

/// A validated site language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "he", "en", "ru")
    code: &'static str,
}

impl Language {
    pub const HEBREW: Language = Language { code: "he" };
    pub const ENGLISH: Language = Language { code: "en" };
    pub const RUSSIAN: Language = Language { code: "ru" };

    /// Create a Language from an exact language code.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is registered and enabled
    /// * `Err` if the code is unknown or disabled
    pub fn from_code(code: &str) -> Result<Language> {
        match LanguageRegistry::get().get_by_code(code) {
            Some(config) if config.enabled => Ok(Language { code: config.code }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Resolve a requested code, coercing anything unsupported to the fallback.
    ///
    /// Unsupported codes are not an error for callers; they silently become
    /// the fallback before any document is fetched.
    pub fn coerce(code: &str) -> Language {
        Language::from_code(code).unwrap_or_else(|_| Language::fallback())
    }

    /// The language used when neither preference nor browser locale matches.
    pub fn fallback() -> Language {
        Language {
            code: LanguageRegistry::get().fallback().code,
        }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Full language configuration from the registry.
    pub fn config(&self) -> &'static LanguageConfig {
        let registry = LanguageRegistry::get();
        registry
            .get_by_code(self.code)
            .unwrap_or_else(|| registry.fallback())
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn direction(&self) -> TextDirection {
        self.config().direction
    }

    pub fn is_rtl(&self) -> bool {
        self.direction().is_rtl()
    }

    pub fn is_fallback(&self) -> bool {
        self.config().is_fallback
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}
