// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`selector`]: The language selector and its change notifications
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer holds a selector and reads from it
//!
//! # Example
//!
//! ```ignore
//! use language_system::application::selector::LanguageSelector;
//! use language_system::domain::language::LanguageRegistry;
//! use language_system::infrastructure::{FluentTranslations, SystemLocale, TomlPreferences};
//!
//! let mut selector = LanguageSelector::new(
//!     LanguageRegistry::builtin(),
//!     TomlPreferences::new(),
//!     SystemLocale,
//!     FluentTranslations::embedded(),
//! );
//! selector.set_current_language("es");
//! ```

pub mod port;
pub mod selector;
