// SPDX-License-Identifier: MPL-2.0
//! Translation resource port definition.
//!
//! A [`TranslationHost`] owns at most one attached translation resource. The
//! attached resource is the one the UI consults for string lookups, so
//! attaching or detaching changes rendered text process-wide.

use crate::domain::language::LanguageCode;
use std::fmt;

// =============================================================================
// TranslationError
// =============================================================================

/// Reasons a translation resource could not be attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    /// No resource exists under the requested name.
    NotFound(String),

    /// The resource exists but could not be read.
    Unreadable(String),

    /// The resource content is malformed.
    Parse(String),

    /// The resource parsed but could not be installed.
    Bundle(String),
}

impl fmt::Display for TranslationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationError::NotFound(name) => write!(f, "Translation resource not found: {name}"),
            TranslationError::Unreadable(msg) => write!(f, "Translation resource unreadable: {msg}"),
            TranslationError::Parse(msg) => write!(f, "Translation resource malformed: {msg}"),
            TranslationError::Bundle(msg) => write!(f, "Translation bundle rejected resource: {msg}"),
        }
    }
}

impl std::error::Error for TranslationError {}

// =============================================================================
// TranslationHost
// =============================================================================

/// Attach/detach access to the translation resource store.
pub trait TranslationHost {
    /// Detaches the active resource, if any. Idempotent.
    fn detach(&mut self);

    /// Loads the named resource for `language` and makes it the active one.
    ///
    /// On error nothing is attached.
    fn attach(&mut self, resource_name: &str, language: &LanguageCode)
        -> Result<(), TranslationError>;

    /// Name of the currently attached resource.
    fn attached_resource(&self) -> Option<&str>;
}
