//! Persisted language preference.
//!
//! The only state that outlives a session: one string under the `lang` key.
//! It is read once at startup and written on every explicit language switch.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

pub trait PreferenceStore {
    /// Stored language code, unvalidated.
    fn load_language(&self) -> Option<String>;

    fn save_language(&mut self, code: &str) -> Result<()>;
}

/// Store kept in memory for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    value: Option<String>,
}

impl MemoryPreferenceStore {
    pub fn with_language(code: &str) -> Self {
        Self {
            value: Some(code.to_string()),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load_language(&self) -> Option<String> {
        self.value.clone()
    }

    fn save_language(&mut self, code: &str) -> Result<()> {
        self.value = Some(code.to_string());
        Ok(())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PreferenceFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    lang: Option<String>,
}

/// Store backed by a small JSON file: `{"lang": "he"}`.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load_language(&self) -> Option<String> {
        let text = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<PreferenceFile>(&text) {
            Ok(file) => file.lang,
            Err(e) => {
                warn!(
                    "Ignoring unreadable preference file {}: {}",
                    self.path.display(),
                    e
                );
                None
            }
        }
    }

    fn save_language(&mut self, code: &str) -> Result<()> {
        let file = PreferenceFile {
            lang: Some(code.to_string()),
        };
        let json = serde_json::to_string(&file).context("Failed to serialize preference")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write preference file {}", self.path.display()))
    }
}
