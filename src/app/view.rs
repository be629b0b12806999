// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Every label is looked up through the selector's translation host on each
//! render, so switching language re-labels the window on the next frame.

use super::Message;
use crate::domain::language::LanguageEntry;
use crate::infrastructure::FluentTranslations;
use iced::{
    alignment::Horizontal,
    widget::{button, Button, Column, Container, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub translations: &'a FluentTranslations,
    pub languages: &'a [LanguageEntry],
    pub current: &'a str,
    /// Display name of `current`.
    pub current_name: &'a str,
    pub status: Option<&'a str>,
}

/// Label for a language button: translated name plus the endonym.
pub fn language_label(translations: &FluentTranslations, entry: &LanguageEntry) -> String {
    let key = format!("language-name-{}", entry.code);
    let translated = translations.tr(&key);
    if translated == key {
        entry.display_name.clone()
    } else {
        format!("{} ({})", translated, entry.display_name)
    }
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let tr = |key: &str| ctx.translations.tr(key);

    let mut language_buttons = Column::new()
        .push(Text::new(tr("select-language-label")))
        .spacing(10);

    for entry in ctx.languages {
        let mut language_button = Button::new(Text::new(language_label(ctx.translations, entry)))
            .on_press(Message::LanguageSelected(entry.code.clone()));

        if entry.code == ctx.current {
            language_button = language_button.style(button::primary);
        } else {
            language_button = language_button.style(button::secondary);
        }

        language_buttons = language_buttons.push(language_button);
    }

    let mut content = Column::new()
        .push(Text::new(tr("app-heading")).size(30))
        .push(Text::new(tr("welcome-message")))
        .push(Text::new(ctx.translations.tr_with_args(
            "current-language-label",
            &[("language", ctx.current_name)],
        )))
        .push(language_buttons)
        .spacing(20)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    if let Some(status) = ctx.status {
        content = content.push(Text::new(status.to_string()));
    }

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(20)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::TranslationHost;
    use crate::domain::language::LanguageRegistry;

    #[test]
    fn language_label_combines_translation_and_endonym() {
        let registry = LanguageRegistry::builtin();
        let english = registry.resolve("en").expect("en");
        let mut translations = FluentTranslations::embedded();
        translations
            .attach("app_en", &english)
            .expect("english resource");

        let spanish = &registry.entries()[1];
        assert_eq!(language_label(&translations, spanish), "Spanish (Español)");
    }

    #[test]
    fn language_label_without_resource_uses_endonym() {
        let registry = LanguageRegistry::builtin();
        let translations = FluentTranslations::embedded();
        let french = &registry.entries()[2];
        assert_eq!(language_label(&translations, french), "Français");
    }

    #[test]
    fn view_renders_without_panicking() {
        let registry = LanguageRegistry::builtin();
        let translations = FluentTranslations::embedded();
        let _element = view(ViewContext {
            translations: &translations,
            languages: registry.entries(),
            current: "en",
            current_name: "English",
            status: Some("status"),
        });
    }
}
