//! Internationalization (i18n) module for multi-language support.
//!
//! Everything about languages and translation documents lives here; the
//! render layer only consumes a loaded document.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for supported languages, direction and fallback
//! - `language`: Validated `Language` type
//! - `document`: Translation documents and dotted key path resolution
//! - `loader`: Fetching and parsing documents (HTTP or filesystem)
//! - `detect`: Effective language from preference, browser locales and fallback
//! - `metrics`: Language-switch counters
//!
//! # Example
//!
//! ```rust,ignore
//! use hightech_site::i18n::{detect_language, BrowserLanguages, Language};
//!
//! let browser = BrowserLanguages::new(Some("ru-RU"), &["en-US"]);
//! let language = detect_language(None, &browser);
//! assert_eq!(language, Language::RUSSIAN);
//! ```

mod detect;
mod document;
mod language;
mod loader;
mod metrics;
mod registry;

pub use detect::{detect_language, BrowserLanguages};
pub use document::TranslationDocument;
pub use language::Language;
pub use loader::{
    translation_url, FileTranslationLoader, HttpTranslationLoader, LoadError, SourceLoader,
    TranslationLoader,
};
pub use metrics::{LoadMetrics, MetricsReport};
pub use registry::{LanguageConfig, LanguageRegistry, TextDirection};
