// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure types with no framework dependencies.
//!
//! # Modules
//!
//! - [`language`]: Supported languages ([`LanguageRegistry`](language::LanguageRegistry),
//!   [`LanguageCode`](language::LanguageCode), [`LanguageEntry`](language::LanguageEntry))

pub mod language;
