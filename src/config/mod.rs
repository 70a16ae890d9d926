//! INI configuration store
//!
//! This module provides [`IniConfig`], an in-memory section/key/value store
//! that can be loaded from INI text or a file path, edited in place, and
//! serialized back to INI text.

mod parser;

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::ops::Index;
use std::path::Path;
use std::str::FromStr;

use log::{debug, warn};
use thiserror::Error;

/// Key/value pairs of a single section.
pub type Section = HashMap<String, String>;

/// Full configuration contents: section name to section pairs.
pub type ConfigMap = HashMap<String, Section>;

/// Error type for the configuration store
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// In-memory INI configuration store.
///
/// Sections and keys are unordered; serialization order may vary across
/// instances. Stored section names and keys are always non-empty, and an
/// empty value is not a storable state ([`IniConfig::set`] with an empty
/// value deletes the key instead).
#[derive(Debug, Clone, Default)]
pub struct IniConfig {
    data: ConfigMap,
}

impl IniConfig {
    /// Create a new empty configuration store
    pub fn new() -> Self {
        IniConfig {
            data: ConfigMap::new(),
        }
    }

    /// Create a configuration store populated from a file
    ///
    /// An unreadable file is treated as nothing to load: the result is an
    /// empty store, not an error. See [`IniConfig::load_file`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut config = IniConfig::new();
        config.load_file(path)?;
        Ok(config)
    }

    /// Parse INI text into the store, replacing any existing contents
    ///
    /// Existing contents are cleared even if parsing fails. Empty text is a
    /// usage error and yields [`ConfigError::InvalidInput`].
    pub fn load(&mut self, text: &str) -> Result<(), ConfigError> {
        self.data.clear();
        self.data = parser::parse_document(text)?;
        debug!("parsed {} section(s)", self.data.len());
        Ok(())
    }

    /// Load and parse an INI file, replacing any existing contents
    ///
    /// A file that cannot be read behaves like a clear: the store is left
    /// empty and no error is raised. A readable but empty file still fails
    /// with [`ConfigError::InvalidInput`], like [`IniConfig::load`].
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        self.data.clear();

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                warn!(
                    "could not read '{}' ({}), leaving config empty",
                    path.as_ref().display(),
                    e
                );
                return Ok(());
            }
        };

        self.load(&text)
    }

    /// Get the value stored under a section and key
    ///
    /// Fails with [`ConfigError::InvalidInput`] if `section` or `key` is
    /// empty, or if the section does not exist. A missing key in an existing
    /// section yields `Ok("")`; use [`IniConfig::has_key`] to distinguish an
    /// absent key from one that was never stored.
    pub fn get(&self, section: &str, key: &str) -> Result<&str, ConfigError> {
        if section.is_empty() {
            return Err(ConfigError::InvalidInput(
                "section is empty; call get_data instead".to_string(),
            ));
        }
        if key.is_empty() {
            return Err(ConfigError::InvalidInput(
                "key is empty; call section_mut instead".to_string(),
            ));
        }

        let entries = self.data.get(section).ok_or_else(|| {
            ConfigError::InvalidInput(format!("section '{}' not found", section))
        })?;

        Ok(entries.get(key).map(String::as_str).unwrap_or(""))
    }

    /// Get a mutable handle to a section, creating it empty if absent
    ///
    /// Fails with [`ConfigError::InvalidInput`] on an empty name. A section
    /// created here but left without keys is skipped on serialization.
    pub fn section_mut(&mut self, name: &str) -> Result<&mut Section, ConfigError> {
        if name.is_empty() {
            return Err(ConfigError::InvalidInput(
                "section name is empty".to_string(),
            ));
        }

        Ok(self.data.entry(name.to_string()).or_default())
    }

    /// Check if a section exists
    pub fn has_section(&self, name: &str) -> bool {
        self.data.contains_key(name)
    }

    /// Check if a key exists in the given section
    pub fn has_key(&self, section: &str, key: &str) -> bool {
        self.data
            .get(section)
            .map(|entries| entries.contains_key(key))
            .unwrap_or(false)
    }

    /// Get a snapshot copy of the full configuration map
    ///
    /// Mutating the returned map never affects the store.
    pub fn get_data(&self) -> ConfigMap {
        self.data.clone()
    }

    /// Set a value, creating the section if needed
    ///
    /// Fails with [`ConfigError::InvalidInput`] if `section` or `key` is
    /// empty. An empty `value` deletes the key instead (a no-op if the key
    /// or the section is absent).
    pub fn set(&mut self, section: &str, key: &str, value: &str) -> Result<(), ConfigError> {
        if section.is_empty() {
            return Err(ConfigError::InvalidInput(
                "section is empty".to_string(),
            ));
        }
        if key.is_empty() {
            return Err(ConfigError::InvalidInput("key is empty".to_string()));
        }

        if value.is_empty() {
            if let Some(entries) = self.data.get_mut(section) {
                entries.remove(key);
            }
            return Ok(());
        }

        self.data
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    /// Remove a section and all its keys; no-op if absent
    pub fn remove_section(&mut self, name: &str) {
        self.data.remove(name);
    }

    /// Get the number of sections currently stored
    pub fn section_count(&self) -> usize {
        self.data.len()
    }

    /// Check if the store holds no sections at all
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Serialize the store to a file
    ///
    /// Unlike loading, a destination that cannot be written fails loudly
    /// with [`ConfigError::Io`].
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        fs::write(path, self.to_string())?;
        Ok(())
    }
}

impl fmt::Display for IniConfig {
    /// Serialize as simplified INI: one `[section]` block per non-empty
    /// section, one `key=value` line per pair, a blank line after each
    /// block. Values are written verbatim, with no quoting or escaping.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, entries) in &self.data {
            if name.is_empty() || entries.is_empty() {
                continue;
            }

            writeln!(f, "[{}]", name)?;
            for (key, value) in entries {
                writeln!(f, "{}={}", key, value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for IniConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut config = IniConfig::new();
        config.load(s)?;
        Ok(config)
    }
}

impl Index<&str> for IniConfig {
    type Output = Section;

    /// Read-only indexed access to a section.
    ///
    /// Panics if the section does not exist, like `HashMap` indexing; use
    /// [`IniConfig::section_mut`] to create a section on access.
    fn index(&self, name: &str) -> &Self::Output {
        &self.data[name]
    }
}
