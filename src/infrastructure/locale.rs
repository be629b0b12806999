// SPDX-License-Identifier: MPL-2.0
//! OS locale adapters.

use crate::application::port::LocaleSource;

/// Reads the platform locale through `sys-locale`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLocale;

impl LocaleSource for SystemLocale {
    fn system_locale(&self) -> Option<String> {
        sys_locale::get_locale()
    }
}

/// Reports a fixed locale, or none at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedLocale(Option<String>);

impl FixedLocale {
    pub fn new(locale: impl Into<String>) -> Self {
        Self(Some(locale.into()))
    }

    /// A platform that reports no locale.
    pub fn none() -> Self {
        Self(None)
    }
}

impl LocaleSource for FixedLocale {
    fn system_locale(&self) -> Option<String> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_locale_reports_value() {
        assert_eq!(FixedLocale::new("es_ES").system_locale().as_deref(), Some("es_ES"));
        assert_eq!(FixedLocale::none().system_locale(), None);
    }
}
