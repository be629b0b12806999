// SPDX-License-Identifier: MPL-2.0
use language_system::application::port::{PreferenceStore, TranslationHost};
use language_system::application::selector::{LanguageEvent, LanguageSelector};
use language_system::config::{self, Config, GeneralConfig};
use language_system::domain::language::LanguageRegistry;
use language_system::infrastructure::{FixedLocale, FluentTranslations, TomlPreferences};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_resources(dir: &Path, codes: &[&str]) {
    for code in codes {
        fs::write(
            dir.join(format!("app_{code}.ftl")),
            format!("window-title = title-{code}\n"),
        )
        .expect("failed to write resource");
    }
}

fn selector_in(
    config_dir: &Path,
    i18n_dir: &Path,
    locale: &str,
) -> LanguageSelector<FluentTranslations> {
    LanguageSelector::new(
        LanguageRegistry::builtin(),
        TomlPreferences::with_config_dir(config_dir),
        FixedLocale::new(locale),
        FluentTranslations::from_dir(i18n_dir),
    )
}

#[test]
fn saved_preference_wins_over_system_locale() {
    let config_dir = tempdir().expect("failed to create config dir");
    let i18n_dir = tempdir().expect("failed to create i18n dir");
    write_resources(i18n_dir.path(), &["en", "es", "fr"]);

    let saved = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };
    config::save_with_override(&saved, Some(config_dir.path().to_path_buf()))
        .expect("failed to write settings");

    let selector = selector_in(config_dir.path(), i18n_dir.path(), "es_ES");
    assert_eq!(selector.current_language().as_str(), "fr");
    assert_eq!(selector.translations().tr("window-title"), "title-fr");
}

#[test]
fn system_locale_used_without_saved_preference() {
    let config_dir = tempdir().expect("failed to create config dir");
    let i18n_dir = tempdir().expect("failed to create i18n dir");
    write_resources(i18n_dir.path(), &["en", "es", "fr"]);

    let selector = selector_in(config_dir.path(), i18n_dir.path(), "es_ES");
    assert_eq!(selector.current_language().as_str(), "es");
}

#[test]
fn unsupported_system_locale_defaults_to_english() {
    let config_dir = tempdir().expect("failed to create config dir");
    let i18n_dir = tempdir().expect("failed to create i18n dir");
    write_resources(i18n_dir.path(), &["en", "es", "fr"]);

    let selector = selector_in(config_dir.path(), i18n_dir.path(), "de_DE");
    assert_eq!(selector.current_language().as_str(), "en");
}

#[test]
fn change_is_persisted_to_settings_file() {
    let config_dir = tempdir().expect("failed to create config dir");
    let i18n_dir = tempdir().expect("failed to create i18n dir");
    write_resources(i18n_dir.path(), &["en", "es", "fr"]);

    let mut selector = selector_in(config_dir.path(), i18n_dir.path(), "en_US");
    let events = selector.event_receiver();
    selector.set_current_language("es");

    let drained: Vec<LanguageEvent> = events.try_iter().collect();
    assert_eq!(drained.len(), 2);
    assert_eq!(drained[1], LanguageEvent::LanguageChanged);

    let (loaded, warning) = config::load_with_override(Some(config_dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded.general.language.as_deref(), Some("es"));

    let reopened = selector_in(config_dir.path(), i18n_dir.path(), "en_US");
    assert_eq!(reopened.current_language().as_str(), "es");
}

#[test]
fn rejected_requests_do_not_touch_settings() {
    let config_dir = tempdir().expect("failed to create config dir");
    let i18n_dir = tempdir().expect("failed to create i18n dir");
    write_resources(i18n_dir.path(), &["en", "es", "fr"]);

    let mut selector = selector_in(config_dir.path(), i18n_dir.path(), "en_US");
    let events = selector.event_receiver();
    selector.set_current_language("");
    selector.set_current_language("de");
    selector.set_current_language("en");

    let drained: Vec<LanguageEvent> = events.try_iter().collect();
    assert_eq!(drained.len(), 2);
    assert!(drained
        .iter()
        .all(|event| matches!(event, LanguageEvent::LanguageLoadFailed { .. })));
    assert!(TomlPreferences::with_config_dir(config_dir.path())
        .load_language()
        .is_none());
}

#[test]
fn missing_resource_falls_back_to_english_on_disk() {
    let config_dir = tempdir().expect("failed to create config dir");
    let i18n_dir = tempdir().expect("failed to create i18n dir");
    write_resources(i18n_dir.path(), &["en"]);

    let mut selector = selector_in(config_dir.path(), i18n_dir.path(), "de_DE");
    selector.set_current_language("fr");

    assert_eq!(selector.current_language().as_str(), "en");
    assert_eq!(selector.translations().attached_resource(), Some("app_en"));
    assert_eq!(
        TomlPreferences::with_config_dir(config_dir.path())
            .load_language()
            .as_deref(),
        Some("fr")
    );
}

#[test]
fn total_fallback_failure_keeps_requested_language() {
    let config_dir = tempdir().expect("failed to create config dir");
    let i18n_dir = tempdir().expect("failed to create i18n dir");

    let mut selector = selector_in(config_dir.path(), i18n_dir.path(), "es_ES");
    assert_eq!(selector.current_language().as_str(), "es");
    let events = selector.event_receiver();

    selector.set_current_language("fr");

    assert_eq!(selector.current_language().as_str(), "fr");
    assert!(selector.translations().attached_resource().is_none());
    assert_eq!(selector.translations().tr("window-title"), "window-title");

    let drained: Vec<LanguageEvent> = events.try_iter().collect();
    assert_eq!(drained.len(), 2);
    assert!(matches!(
        &drained[0],
        LanguageEvent::CurrentLanguageChanged(code) if code.as_str() == "fr"
    ));
}

#[test]
fn embedded_resources_drive_a_full_switch() {
    let config_dir = tempdir().expect("failed to create config dir");
    let mut selector = LanguageSelector::new(
        LanguageRegistry::builtin(),
        TomlPreferences::with_config_dir(config_dir.path()),
        FixedLocale::new("en_US"),
        FluentTranslations::embedded(),
    );
    assert_eq!(selector.translations().tr("window-title"), "Language System");

    selector.set_current_language("fr");
    assert_eq!(selector.translations().tr("window-title"), "Système de langues");
}
