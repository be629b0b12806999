// SPDX-License-Identifier: MPL-2.0
//! Operating system locale port definition.

/// Source of the platform's current locale identifier (e.g. `es_ES`, `fr-CA`).
pub trait LocaleSource {
    /// Returns the locale identifier, or `None` when the platform reports none.
    fn system_locale(&self) -> Option<String>;
}
