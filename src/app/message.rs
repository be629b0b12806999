// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

/// Messages consumed by `App::update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The user picked a language button; carries the raw code.
    LanguageSelected(String),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional directory containing `app_<code>.ftl` files, used instead of
    /// the embedded resources.
    pub i18n_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `LANGUAGE_SYSTEM_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
