//! Language registry: Single source of truth for all supported site languages.
//!
//! The registry is a lazily initialized singleton (`OnceLock`). It lists every
//! language the site ships a translation document for, along with its writing
//! direction and whether it is the fallback used when nothing else matches.

use serde::Serialize;
use std::sync::OnceLock;

/// Writing direction of a language's script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    /// Value of the `dir` attribute for this direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, TextDirection::Rtl)
    }
}

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code, also the translation document file stem
    pub code: &'static str,

    /// English name of the language (e.g., "Hebrew")
    pub name: &'static str,

    /// Native name of the language (e.g., "עברית")
    pub native_name: &'static str,

    /// Script direction, drives the root `dir` attribute and the `rtl` body class
    pub direction: TextDirection,

    /// Whether this is the fallback language (exactly one should be true)
    pub is_fallback: bool,

    /// Whether this language is enabled for use
    pub enabled: bool,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Used only when a registry has no languages at all
static BUILTIN_FALLBACK: LanguageConfig = LanguageConfig {
    code: "en",
    name: "English",
    native_name: "English",
    direction: TextDirection::Ltr,
    is_fallback: true,
    enabled: true,
};

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its exact code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all enabled languages, in registry order.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Enabled languages that are not the fallback.
    ///
    /// These are the only candidates for browser-locale matching: a browser
    /// locale that maps to the fallback gives the same answer as no match.
    pub fn list_matchable(&self) -> Vec<&LanguageConfig> {
        self.languages
            .iter()
            .filter(|lang| lang.enabled && !lang.is_fallback)
            .collect()
    }

    /// Get the fallback language configuration.
    ///
    /// The flagged language, else the first registered one; an empty registry
    /// yields the built-in English configuration.
    pub fn fallback(&self) -> &LanguageConfig {
        self.languages
            .iter()
            .find(|lang| lang.is_fallback)
            .or_else(|| self.languages.first())
            .unwrap_or(&BUILTIN_FALLBACK)
    }

    /// Check if a language code is supported and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|lang| lang.enabled)
            .unwrap_or(false)
    }
}

/// Default language configurations: Hebrew, English (fallback) and Russian.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "he",
            name: "Hebrew",
            native_name: "עברית",
            direction: TextDirection::Rtl,
            is_fallback: false,
            enabled: true,
        },
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            direction: TextDirection::Ltr,
            is_fallback: true,
            enabled: true,
        },
        LanguageConfig {
            code: "ru",
            name: "Russian",
            native_name: "Русский",
            direction: TextDirection::Ltr,
            is_fallback: false,
            enabled: true,
        },
    ]
}
