//! Translation document loading.
//!
//! A load is a single attempt with no retry. Transport problems and
//! non-success statuses are `LoadError::Fetch`; payloads that are not a JSON
//! object are `LoadError::Parse`. Callers abort the language switch on either.

use crate::i18n::{Language, TranslationDocument};
use std::future::Future;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

/// Why a translation document could not be loaded.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoadError {
    #[error("failed to fetch translations for '{language}': {reason}")]
    Fetch {
        language: &'static str,
        reason: String,
    },

    #[error("failed to parse translations for '{language}': {reason}")]
    Parse {
        language: &'static str,
        reason: String,
    },
}

impl LoadError {
    pub fn language(&self) -> &'static str {
        match self {
            LoadError::Fetch { language, .. } | LoadError::Parse { language, .. } => language,
        }
    }
}

/// Source of translation documents, one per language.
pub trait TranslationLoader {
    fn load(
        &self,
        language: Language,
    ) -> impl Future<Output = Result<TranslationDocument, LoadError>> + Send;
}

fn parse_document(language: Language, text: &str) -> Result<TranslationDocument, LoadError> {
    TranslationDocument::parse(text).map_err(|reason| LoadError::Parse {
        language: language.code(),
        reason,
    })
}

/// Build the document URL for a language: `{base_url}/{code}.json`.
pub fn translation_url(base_url: &str, language: Language) -> String {
    format!("{}/{}.json", base_url.trim_end_matches('/'), language.code())
}

// ==================== HTTP ====================

/// Loads documents over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTranslationLoader {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTranslationLoader {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

impl TranslationLoader for HttpTranslationLoader {
    async fn load(&self, language: Language) -> Result<TranslationDocument, LoadError> {
        let url = translation_url(&self.base_url, language);
        debug!("Fetching translations from {}", url);

        let fetch_error = |reason: String| LoadError::Fetch {
            language: language.code(),
            reason,
        };

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;

        if !response.status().is_success() {
            return Err(fetch_error(format!("status {}", response.status())));
        }

        let body = response
            .text()
            .await
            .map_err(|e| fetch_error(format!("failed to read body: {}", e)))?;

        parse_document(language, &body)
    }
}

// ==================== Filesystem ====================

/// Loads documents from a directory of `{code}.json` files.
#[derive(Debug, Clone)]
pub struct FileTranslationLoader {
    base_dir: PathBuf,
}

impl FileTranslationLoader {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn document_path(&self, language: Language) -> PathBuf {
        self.base_dir.join(format!("{}.json", language.code()))
    }
}

impl TranslationLoader for FileTranslationLoader {
    async fn load(&self, language: Language) -> Result<TranslationDocument, LoadError> {
        let path = self.document_path(language);
        debug!("Reading translations from {}", path.display());

        let text = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| LoadError::Fetch {
                language: language.code(),
                reason: format!("{}: {}", path.display(), e),
            })?;

        parse_document(language, &text)
    }
}

// ==================== Configured source ====================

/// Either loader, picked from configuration at startup.
#[derive(Debug, Clone)]
pub enum SourceLoader {
    Http(HttpTranslationLoader),
    File(FileTranslationLoader),
}

impl TranslationLoader for SourceLoader {
    async fn load(&self, language: Language) -> Result<TranslationDocument, LoadError> {
        match self {
            SourceLoader::Http(loader) => loader.load(language).await,
            SourceLoader::File(loader) => loader.load(language).await,
        }
    }
}
