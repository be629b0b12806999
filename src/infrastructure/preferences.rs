// SPDX-License-Identifier: MPL-2.0
//! Language preference storage adapters.

use crate::application::port::PreferenceStore;
use crate::config;
use crate::error::{Error, Result};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

/// Stores the preference under `[general] language` in `settings.toml`.
///
/// Every call re-reads the file, and keys this crate does not model are
/// written back unchanged. A file that cannot be parsed is never overwritten.
#[derive(Debug, Clone, Default)]
pub struct TomlPreferences {
    config_dir: Option<PathBuf>,
}

impl TomlPreferences {
    /// Uses the default config directory resolution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `config_dir` instead of the default resolution.
    pub fn with_config_dir(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: Some(config_dir.into()),
        }
    }
}

impl PreferenceStore for TomlPreferences {
    fn load_language(&self) -> Option<String> {
        let (cfg, warning) = config::load_with_override(self.config_dir.clone());
        if let Some(key) = warning {
            log::warn!("Ignoring saved language preference ({key})");
        }
        cfg.general.language
    }

    fn save_language(&mut self, code: &str) -> Result<()> {
        let (mut cfg, warning) = config::load_with_override(self.config_dir.clone());
        if let Some(key) = warning {
            return Err(Error::Config(format!(
                "refusing to overwrite unreadable settings file ({key})"
            )));
        }
        cfg.general.language = Some(code.to_string());
        config::save_with_override(&cfg, self.config_dir.clone())
    }
}

/// In-memory store; clones share the same value.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    language: Rc<RefCell<Option<String>>>,
}

impl MemoryPreferences {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `code`.
    pub fn with_language(code: impl Into<String>) -> Self {
        Self {
            language: Rc::new(RefCell::new(Some(code.into()))),
        }
    }

    /// Current stored value.
    pub fn language(&self) -> Option<String> {
        self.language.borrow().clone()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn load_language(&self) -> Option<String> {
        self.language()
    }

    fn save_language(&mut self, code: &str) -> Result<()> {
        *self.language.borrow_mut() = Some(code.to_string());
        Ok(())
    }
}
