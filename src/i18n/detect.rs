//! Effective language detection.
//!
//! Precedence, strictly in order: a persisted preference that is exactly a
//! registered code, then the first browser locale whose two-letter prefix
//! matches a non-fallback language, then the fallback.

use crate::i18n::{Language, LanguageRegistry};
use serde::Serialize;

/// Locale preferences reported by the user agent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BrowserLanguages {
    /// Primary locale (e.g., "ru-RU"), scanned first
    pub primary: Option<String>,

    /// Ordered secondary list
    pub preferred: Vec<String>,
}

impl BrowserLanguages {
    pub fn new(primary: Option<&str>, preferred: &[&str]) -> Self {
        Self {
            primary: primary.map(str::to_string),
            preferred: preferred.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Parse a comma-separated list; the first entry becomes the primary.
    pub fn from_list(list: &str) -> Self {
        let mut entries = list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        let primary = entries.next();
        Self {
            primary,
            preferred: entries.collect(),
        }
    }

    /// Primary then secondary locales, blanks skipped.
    pub fn candidates(&self) -> impl Iterator<Item = &str> {
        self.primary
            .iter()
            .chain(self.preferred.iter())
            .map(String::as_str)
            .filter(|s| !s.trim().is_empty())
    }
}

/// Map a browser locale onto a supported, non-fallback language.
fn match_locale(locale: &str) -> Option<Language> {
    let prefix: String = locale.trim().chars().take(2).collect::<String>().to_lowercase();

    LanguageRegistry::get()
        .list_matchable()
        .into_iter()
        .find(|config| config.code == prefix)
        .and_then(|config| Language::from_code(config.code).ok())
}

/// Determine the effective language.
pub fn detect_language(persisted: Option<&str>, browser: &BrowserLanguages) -> Language {
    if let Some(language) = persisted.and_then(|code| Language::from_code(code).ok()) {
        return language;
    }

    browser
        .candidates()
        .find_map(match_locale)
        .unwrap_or_else(Language::fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Persisted Preference Tests ====================

    #[test]
    fn test_persisted_preference_wins_over_browser() {
        let browser = BrowserLanguages::new(Some("ru-RU"), &["he-IL"]);
        for language in [Language::HEBREW, Language::ENGLISH, Language::RUSSIAN] {
            assert_eq!(detect_language(Some(language.code()), &browser), language);
        }
    }

    #[test]
    fn test_garbage_persisted_value_is_ignored() {
        let browser = BrowserLanguages::new(Some("he-IL"), &[]);
        for garbage in ["", "HE", "fr", "he-IL", " ru", "null"] {
            assert_eq!(detect_language(Some(garbage), &browser), Language::HEBREW);
        }
    }

    #[test]
    fn test_garbage_persisted_value_without_browser_match_falls_back() {
        let browser = BrowserLanguages::new(Some("de-DE"), &["fr"]);
        assert_eq!(detect_language(Some("xx"), &browser), Language::ENGLISH);
    }

    // ==================== Browser Locale Tests ====================

    #[test]
    fn test_primary_scanned_before_secondary() {
        let browser = BrowserLanguages::new(Some("ru-RU"), &["he-IL"]);
        assert_eq!(detect_language(None, &browser), Language::RUSSIAN);
    }

    #[test]
    fn test_secondary_used_when_primary_unmatched() {
        let browser = BrowserLanguages::new(Some("de-DE"), &["fr-FR", "HE"]);
        assert_eq!(detect_language(None, &browser), Language::HEBREW);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let browser = BrowserLanguages::new(Some("RU"), &[]);
        assert_eq!(detect_language(None, &browser), Language::RUSSIAN);
    }

    #[test]
    fn test_fallback_locale_does_not_stop_scan() {
        let browser = BrowserLanguages::new(Some("en-US"), &["ru-RU"]);
        assert_eq!(detect_language(None, &browser), Language::RUSSIAN);
    }

    #[test]
    fn test_no_browser_languages_falls_back() {
        assert_eq!(
            detect_language(None, &BrowserLanguages::default()),
            Language::ENGLISH
        );
    }

    #[test]
    fn test_blank_candidates_skipped() {
        let browser = BrowserLanguages::new(Some(""), &["  ", "ru"]);
        assert_eq!(detect_language(None, &browser), Language::RUSSIAN);
    }

    // ==================== from_list Tests ====================

    #[test]
    fn test_from_list() {
        let browser = BrowserLanguages::from_list("ru-RU, en-US,,he");
        assert_eq!(browser.primary.as_deref(), Some("ru-RU"));
        assert_eq!(browser.preferred, vec!["en-US", "he"]);
    }

    #[test]
    fn test_from_list_empty() {
        assert_eq!(BrowserLanguages::from_list(""), BrowserLanguages::default());
    }
}
