use crate::dom::PageKind;
use crate::i18n::BrowserLanguages;
use anyhow::{bail, Context, Result};
use std::path::PathBuf;

/// Where translation documents come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationSource {
    /// `{url}/{code}.json` over HTTP
    Url(String),
    /// `{dir}/{code}.json` on disk
    Directory(PathBuf),
}

#[derive(Debug, Clone)]
pub struct Config {
    // Translations
    pub translation_source: TranslationSource,

    // Preference persistence
    pub preference_file: PathBuf,

    // Detection
    pub browser_languages: BrowserLanguages,

    // Rendering
    pub page: PageKind,
    pub language: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let translation_source = match std::env::var("I18N_BASE_URL") {
            Ok(url) if !url.trim().is_empty() => TranslationSource::Url(url.trim().to_string()),
            _ => TranslationSource::Directory(
                std::env::var("I18N_DIR")
                    .unwrap_or_else(|_| "i18n".to_string())
                    .into(),
            ),
        };

        let browser_languages = match std::env::var("BROWSER_LANGUAGES") {
            Ok(list) => BrowserLanguages::from_list(&list),
            Err(_) => std::env::var("LANG")
                .ok()
                .and_then(|lang| locale_from_posix(&lang))
                .map(|locale| BrowserLanguages::new(Some(&locale), &[]))
                .unwrap_or_default(),
        };

        Ok(Self {
            translation_source,

            preference_file: std::env::var("PREFERENCE_FILE")
                .unwrap_or_else(|_| ".site-preferences.json".to_string())
                .into(),

            browser_languages,

            page: parse_page(&std::env::var("SITE_PAGE").unwrap_or_else(|_| "home".to_string()))
                .context("Invalid SITE_PAGE")?,
            language: std::env::var("SITE_LANGUAGE")
                .ok()
                .filter(|code| !code.trim().is_empty()),
        })
    }
}

/// `home` or `service:<key>`.
pub fn parse_page(value: &str) -> Result<PageKind> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("home") {
        return Ok(PageKind::Home);
    }
    match value.split_once(':') {
        Some(("service", key)) if !key.trim().is_empty() => Ok(PageKind::Service {
            key: key.trim().to_string(),
        }),
        _ => bail!("Expected 'home' or 'service:<key>', got '{}'", value),
    }
}

/// `ru_RU.UTF-8` -> `ru-RU`. `C` and `POSIX` carry no language.
fn locale_from_posix(lang: &str) -> Option<String> {
    let locale = lang.split(['.', '@']).next()?.trim();
    if locale.is_empty() || locale == "C" || locale == "POSIX" {
        return None;
    }
    Some(locale.replace('_', "-"))
}
