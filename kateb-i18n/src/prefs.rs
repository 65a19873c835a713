//! Persisted language preference.
//!
//! The preference is a single string value holding the active language code.
//! Storage failures are never fatal: [`LanguageState`](crate::state::LanguageState)
//! logs them and continues without persistence for the session.

use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("preference storage I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Backing store for the `"language"` preference.
pub trait PreferenceStore {
    /// Read the stored language code, if any. Absence is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the store exists but cannot be read.
    fn load(&self) -> Result<Option<String>, PreferenceError>;

    /// Persist the language code.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    fn save(&mut self, code: &str) -> Result<(), PreferenceError>;
}

/// In-memory store for tests and sessions without persistence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: Option<String>,
    saves: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a pre-existing preference, as if saved in a prior session.
    #[must_use]
    pub fn with_value(code: &str) -> Self {
        Self {
            value: Some(code.to_string()),
            saves: 0,
        }
    }

    #[must_use]
    pub fn saved(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Number of writes since construction.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, PreferenceError> {
        Ok(self.value.clone())
    }

    fn save(&mut self, code: &str) -> Result<(), PreferenceError> {
        self.value = Some(code.to_string());
        self.saves += 1;
        Ok(())
    }
}

/// File-backed store: the file holds the bare language code.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PreferenceStore for FileStore {
    fn load(&self) -> Result<Option<String>, PreferenceError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let code = contents.trim();
                Ok((!code.is_empty()).then(|| code.to_string()))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, code: &str) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, code)?;
        Ok(())
    }
}
