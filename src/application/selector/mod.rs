// SPDX-License-Identifier: MPL-2.0
//! Language selection with a fixed fallback chain.
//!
//! The [`LanguageSelector`] owns the current language and the active
//! translation resource. It is constructed once by the application root and
//! handed by reference to whatever renders labels.
//!
//! # Startup
//!
//! The initial language is the saved preference if it is supported, else the
//! OS locale's primary subtag if supported, else English. Its resource is then
//! loaded through the same chain used for user requests.
//!
//! # Fallback chain
//!
//! When a resource fails to attach the selector tries, in order: the OS
//! language (if different and supported), then English (if not already
//! tried). If all fail, the current language keeps the requested value even
//! though no resource is attached.
//!
//! # Notifications
//!
//! An accepted request always ends with [`LanguageEvent::CurrentLanguageChanged`]
//! followed by [`LanguageEvent::LanguageChanged`], whichever resource actually
//! loaded. A fallback hop emits one extra `CurrentLanguageChanged` before
//! that pair. Rejected input emits a single [`LanguageEvent::LanguageLoadFailed`];
//! requesting the current language emits nothing.

mod events;

pub use events::{LanguageEvent, Observers, SubscriptionId};

use crate::application::port::{LocaleSource, PreferenceStore, TranslationHost};
use crate::domain::language::{primary_subtag, LanguageCode, LanguageEntry, LanguageRegistry, ENGLISH};
use std::fmt;
use std::sync::mpsc::Receiver;

/// Current-language state plus the collaborators needed to change it.
pub struct LanguageSelector<T: TranslationHost> {
    registry: LanguageRegistry,
    current: LanguageCode,
    preferences: Box<dyn PreferenceStore>,
    locale: Box<dyn LocaleSource>,
    translations: T,
    observers: Observers,
}

impl<T: TranslationHost + fmt::Debug> fmt::Debug for LanguageSelector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageSelector")
            .field("current", &self.current)
            .field("translations", &self.translations)
            .field("observers", &self.observers)
            .finish()
    }
}

impl<T: TranslationHost> LanguageSelector<T> {
    /// Resolves the initial language and loads its resource.
    ///
    /// Nobody can be subscribed yet, so fallback events raised here are not
    /// observed.
    pub fn new(
        registry: LanguageRegistry,
        preferences: impl PreferenceStore + 'static,
        locale: impl LocaleSource + 'static,
        translations: T,
    ) -> Self {
        let current = initial_language(&registry, &preferences, &locale);
        let mut selector = Self {
            registry,
            current: current.clone(),
            preferences: Box::new(preferences),
            locale: Box::new(locale),
            translations,
            observers: Observers::new(),
        };
        selector.load_language(current);
        selector
    }

    pub fn current_language(&self) -> &LanguageCode {
        &self.current
    }

    /// Registry entry of the current language.
    pub fn current_entry(&self) -> Option<&LanguageEntry> {
        self.registry.entry(&self.current)
    }

    /// Supported languages in declaration order. Constant for the selector's lifetime.
    pub fn available_languages(&self) -> &[LanguageEntry] {
        self.registry.entries()
    }

    /// Supported codes in declaration order.
    pub fn available_codes(&self) -> Vec<LanguageCode> {
        self.registry.codes()
    }

    /// The translation host, for string lookups.
    pub fn translations(&self) -> &T {
        &self.translations
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&LanguageEvent) + 'static,
    {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Subscribes a channel; the UI drains it after each call into the selector.
    pub fn event_receiver(&mut self) -> Receiver<LanguageEvent> {
        self.observers.channel()
    }

    /// Handles a user request to switch language.
    ///
    /// Invalid input is reported through [`LanguageEvent::LanguageLoadFailed`]
    /// and never changes state.
    pub fn set_current_language(&mut self, requested: &str) {
        let code = match self.registry.validate(requested) {
            Ok(code) => code,
            Err(err) => {
                log::warn!("Rejected language request {requested:?}: {err}");
                self.observers.emit(&LanguageEvent::LanguageLoadFailed {
                    requested: err.requested().to_string(),
                    reason: err.to_string(),
                });
                return;
            }
        };

        if code == self.current {
            log::debug!("Language {code} is already current");
            return;
        }

        self.current = code.clone();

        if let Err(err) = self.preferences.save_language(code.as_str()) {
            log::warn!("Failed to save language preference {code}: {err}");
        }

        self.load_language(code);

        let current = self.current.clone();
        self.observers
            .emit(&LanguageEvent::CurrentLanguageChanged(current));
        self.observers.emit(&LanguageEvent::LanguageChanged);
    }

    /// Loads `candidate`, walking the fallback chain on failure.
    ///
    /// Expects `self.current` to already equal `candidate`.
    fn load_language(&mut self, candidate: LanguageCode) {
        if self.try_load(&candidate) {
            return;
        }

        let system = self
            .locale
            .system_locale()
            .and_then(|locale| primary_subtag(&locale).map(str::to_string));
        if let Some(system_code) = system
            .as_deref()
            .filter(|subtag| *subtag != candidate.as_str())
            .and_then(|subtag| self.registry.resolve(subtag))
        {
            if self.try_load(&system_code) {
                log::warn!(
                    "Requested language {candidate} failed, using system language {system_code}"
                );
                self.switch_to(system_code);
                return;
            }
        }

        if !candidate.is_english() {
            if let Some(english) = self.registry.resolve(ENGLISH) {
                if self.try_load(&english) {
                    log::warn!("Language {candidate} failed, falling back to English");
                    self.switch_to(english);
                    return;
                }
            }
        }

        log::error!("All language fallbacks failed for: {candidate}");
    }

    fn switch_to(&mut self, code: LanguageCode) {
        self.current = code.clone();
        self.observers
            .emit(&LanguageEvent::CurrentLanguageChanged(code));
    }

    /// Detaches the active resource, then attaches the one for `code`.
    fn try_load(&mut self, code: &LanguageCode) -> bool {
        self.translations.detach();

        let resource = self.registry.resource_name(code);
        match self.translations.attach(&resource, code) {
            Ok(()) => {
                log::debug!("Successfully loaded language: {code} from {resource}");
                true
            }
            Err(err) => {
                log::debug!("Failed to load language file {resource}: {err}");
                false
            }
        }
    }
}

/// Picks the startup language: saved preference, then OS locale, then English.
pub fn initial_language(
    registry: &LanguageRegistry,
    preferences: &dyn PreferenceStore,
    locale: &dyn LocaleSource,
) -> LanguageCode {
    if let Some(saved) = preferences
        .load_language()
        .filter(|saved| !saved.is_empty())
        .and_then(|saved| registry.resolve(&saved))
    {
        log::debug!("Restored saved language: {saved}");
        return saved;
    }

    if let Some(system) = locale
        .system_locale()
        .as_deref()
        .and_then(primary_subtag)
        .and_then(|subtag| registry.resolve(subtag))
    {
        log::debug!("Using system language: {system}");
        return system;
    }

    let fallback = registry
        .resolve(ENGLISH)
        .unwrap_or_else(|| registry.default_language());
    log::debug!("Using default language: {fallback}");
    fallback
}
