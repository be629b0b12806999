// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`fluent`]: Fluent translation resources (implements [`TranslationHost`])
//! - [`locale`]: OS locale via `sys-locale` (implements [`LocaleSource`])
//! - [`preferences`]: `settings.toml` and in-memory storage (implements [`PreferenceStore`])
//!
//! [`TranslationHost`]: crate::application::port::TranslationHost
//! [`LocaleSource`]: crate::application::port::LocaleSource
//! [`PreferenceStore`]: crate::application::port::PreferenceStore

pub mod fluent;
pub mod locale;
pub mod preferences;

// Re-export main types for convenience
pub use fluent::{FluentTranslations, ResourceSource};
pub use locale::{FixedLocale, SystemLocale};
pub use preferences::{MemoryPreferences, TomlPreferences};
