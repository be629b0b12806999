// SPDX-License-Identifier: MPL-2.0
//! Persisted language preference port definition.

use crate::error::Result;

/// Key-value storage for the user's language choice.
///
/// Stores hold a raw string; validation against the supported set is the
/// selector's job.
pub trait PreferenceStore {
    /// Returns the saved language, if any was stored.
    fn load_language(&self) -> Option<String>;

    /// Saves `code` as the preferred language.
    fn save_language(&mut self, code: &str) -> Result<()>;
}
