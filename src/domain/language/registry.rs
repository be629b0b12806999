// SPDX-License-Identifier: MPL-2.0
//! Registry of supported UI languages.
//!
//! Adding a language means adding a [`LanguageEntry`] (and shipping its
//! translation resource); nothing else in the selector branches on specific
//! codes except the English fallback.

use crate::error::{Error, RequestError, Result};
use std::collections::HashSet;
use std::fmt;

// =============================================================================
// Built-in Codes
// =============================================================================

/// English language code.
pub const ENGLISH: &str = "en";

/// Spanish language code.
pub const SPANISH: &str = "es";

/// French language code.
pub const FRENCH: &str = "fr";

/// Language used when neither the saved preference nor the OS locale matches.
pub const DEFAULT_LANGUAGE: &str = ENGLISH;

/// Prefix of every translation resource name (`app_<code>`).
pub const RESOURCE_PREFIX: &str = "app_";

/// Builds the canonical resource name for a language code.
#[must_use]
pub fn resource_name_for(code: &str) -> String {
    format!("{RESOURCE_PREFIX}{code}")
}

/// Extracts the primary language subtag of a locale identifier.
///
/// Only the first two characters are considered, so `es_ES`, `es-ES` and
/// `es` all yield `es`. Returns `None` for an empty identifier.
#[must_use]
pub fn primary_subtag(locale: &str) -> Option<&str> {
    if locale.is_empty() {
        return None;
    }
    let end = locale
        .char_indices()
        .nth(2)
        .map_or(locale.len(), |(index, _)| index);
    Some(&locale[..end])
}

// =============================================================================
// LanguageCode
// =============================================================================

/// A language code known to be a member of the registry that produced it.
///
/// Values are only created by [`LanguageRegistry`], so holding one means the
/// code passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Returns the two-letter tag (e.g. `"es"`).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this is the English code.
    #[must_use]
    pub fn is_english(&self) -> bool {
        self.0 == ENGLISH
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for LanguageCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LanguageCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// LanguageEntry
// =============================================================================

/// One registered language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageEntry {
    /// Two-letter tag (`en`, `es`, `fr`).
    pub code: String,
    /// Endonym shown in language pickers (e.g. "Español").
    pub display_name: String,
    /// Name of the translation resource for this language.
    pub resource_name: String,
}

impl LanguageEntry {
    /// Creates an entry whose resource follows the `app_<code>` convention.
    pub fn new(code: impl Into<String>, display_name: impl Into<String>) -> Self {
        let code = code.into();
        let resource_name = resource_name_for(&code);
        Self {
            code,
            display_name: display_name.into(),
            resource_name,
        }
    }

    /// Overrides the resource name.
    #[must_use]
    pub fn with_resource_name(mut self, resource_name: impl Into<String>) -> Self {
        self.resource_name = resource_name.into();
        self
    }
}

// =============================================================================
// LanguageRegistry
// =============================================================================

/// Ordered, immutable set of supported languages plus the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageRegistry {
    entries: Vec<LanguageEntry>,
    default_index: usize,
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LanguageRegistry {
    /// Builds a registry, rejecting empty lists, empty or duplicate codes,
    /// and a default that is not listed.
    pub fn new(entries: Vec<LanguageEntry>, default_code: &str) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::Registry("no languages registered".to_string()));
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.code.is_empty() {
                return Err(Error::Registry("empty language code".to_string()));
            }
            if !seen.insert(entry.code.as_str()) {
                return Err(Error::Registry(format!(
                    "duplicate language code: {}",
                    entry.code
                )));
            }
        }

        let default_index = entries
            .iter()
            .position(|entry| entry.code == default_code)
            .ok_or_else(|| {
                Error::Registry(format!("default language not registered: {default_code}"))
            })?;

        Ok(Self {
            entries,
            default_index,
        })
    }

    /// English, Spanish and French, in that order, defaulting to English.
    #[must_use]
    pub fn builtin() -> Self {
        let entries = vec![
            LanguageEntry::new(ENGLISH, "English"),
            LanguageEntry::new(SPANISH, "Español"),
            LanguageEntry::new(FRENCH, "Français"),
        ];
        let default_index = entries
            .iter()
            .position(|entry| entry.code == DEFAULT_LANGUAGE)
            .unwrap_or(0);
        Self {
            entries,
            default_index,
        }
    }

    /// Registered entries in declaration order.
    #[must_use]
    pub fn entries(&self) -> &[LanguageEntry] {
        &self.entries
    }

    /// Registered codes in declaration order.
    #[must_use]
    pub fn codes(&self) -> Vec<LanguageCode> {
        self.entries
            .iter()
            .map(|entry| LanguageCode(entry.code.clone()))
            .collect()
    }

    /// Returns true if `code` is registered.
    #[must_use]
    pub fn is_supported(&self, code: &str) -> bool {
        self.entries.iter().any(|entry| entry.code == code)
    }

    /// Resolves a raw string to a registered code.
    #[must_use]
    pub fn resolve(&self, code: &str) -> Option<LanguageCode> {
        self.is_supported(code)
            .then(|| LanguageCode(code.to_string()))
    }

    /// Validates a user request, producing the rejection reason on failure.
    pub fn validate(&self, requested: &str) -> std::result::Result<LanguageCode, RequestError> {
        if requested.is_empty() {
            return Err(RequestError::Empty);
        }
        self.resolve(requested)
            .ok_or_else(|| RequestError::Unsupported {
                requested: requested.to_string(),
                supported: self.entries.iter().map(|entry| entry.code.clone()).collect(),
            })
    }

    /// The language used when nothing else matches.
    #[must_use]
    pub fn default_language(&self) -> LanguageCode {
        LanguageCode(self.entries[self.default_index].code.clone())
    }

    /// Looks up the entry for a code.
    #[must_use]
    pub fn entry(&self, code: &LanguageCode) -> Option<&LanguageEntry> {
        self.entries.iter().find(|entry| entry.code == code.as_str())
    }

    /// Resource name for a code, falling back to the naming convention.
    #[must_use]
    pub fn resource_name(&self, code: &LanguageCode) -> String {
        self.entry(code)
            .map_or_else(|| resource_name_for(code.as_str()), |entry| entry.resource_name.clone())
    }
}
