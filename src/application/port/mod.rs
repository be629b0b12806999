// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! The language selector talks to its three collaborators only through these
//! traits, so it can run against real settings files, the OS locale and
//! Fluent resources, or against in-memory stand-ins.
//!
//! # Available Ports
//!
//! - [`locale`]: OS locale lookup
//! - [`preferences`]: Persisted language preference
//! - [`translation`]: Translation resource attach/detach
//!
//! # Design Notes
//!
//! - Traits use domain types only (no Iced handles, no Fluent types)
//! - Everything is synchronous and single-threaded; no `Send` bounds
//!
//! # Example
//!
//! ```ignore
//! use language_system::application::port::LocaleSource;
//!
//! fn os_language(source: &impl LocaleSource) -> Option<String> {
//!     source.system_locale().map(|locale| locale.chars().take(2).collect())
//! }
//! ```

pub mod locale;
pub mod preferences;
pub mod translation;

// Re-export main types for convenience
pub use locale::LocaleSource;
pub use preferences::PreferenceStore;
pub use translation::{TranslationError, TranslationHost};
