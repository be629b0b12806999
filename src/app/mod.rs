// SPDX-License-Identifier: MPL-2.0
//! Application root: owns the language selector and renders its state.
//!
//! The `App` struct holds the one [`LanguageSelector`] of the process and the
//! receiving end of its event channel. After each call into the selector the
//! pending events are drained: a generic language change refreshes the window
//! title, a rejected request is shown as a status line.

mod message;
mod view;

pub use message::{Flags, Message};
pub use view::language_label;

use crate::application::selector::{LanguageEvent, LanguageSelector};
use crate::config::paths;
use crate::domain::language::LanguageRegistry;
use crate::infrastructure::{FluentTranslations, SystemLocale, TomlPreferences};
use iced::{window, Element, Task};
use std::fmt;
use std::sync::mpsc::Receiver;

/// Root Iced application state.
pub struct App {
    selector: LanguageSelector<FluentTranslations>,
    events: Receiver<LanguageEvent>,
    title: String,
    /// Reason of the last rejected request, already localized.
    status: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("selector", &self.selector)
            .field("title", &self.title)
            .field("status", &self.status)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 480;
pub const WINDOW_DEFAULT_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 360;
pub const MIN_WINDOW_WIDTH: u32 = 420;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced calls boot through `Fn`; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .run()
}

impl App {
    /// Builds the selector from the real adapters.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        if !paths::init_cli_override(flags.config_dir) {
            log::debug!("Config directory override already set");
        }

        let translations = match flags.i18n_dir {
            Some(dir) => FluentTranslations::from_dir(dir),
            None => FluentTranslations::embedded(),
        };

        let selector = LanguageSelector::new(
            LanguageRegistry::builtin(),
            TomlPreferences::new(),
            SystemLocale,
            translations,
        );

        (Self::with_selector(selector), Task::none())
    }

    /// Wraps an already constructed selector.
    pub fn with_selector(mut selector: LanguageSelector<FluentTranslations>) -> Self {
        let events = selector.event_receiver();
        let title = selector.translations().tr("window-title");
        Self {
            selector,
            events,
            title,
            status: None,
        }
    }

    pub fn selector(&self) -> &LanguageSelector<FluentTranslations> {
        &self.selector
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn title(&self) -> String {
        self.title.clone()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::LanguageSelected(code) => {
                self.selector.set_current_language(&code);
                self.drain_events();
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let current = self.selector.current_language().as_str();
        view::view(view::ViewContext {
            translations: self.selector.translations(),
            languages: self.selector.available_languages(),
            current,
            current_name: self
                .selector
                .current_entry()
                .map_or(current, |entry| entry.display_name.as_str()),
            status: self.status.as_deref(),
        })
    }

    fn drain_events(&mut self) {
        let pending: Vec<LanguageEvent> = self.events.try_iter().collect();
        for event in pending {
            match event {
                LanguageEvent::CurrentLanguageChanged(code) => {
                    // The view reads current_language() on every render.
                    log::debug!("Current language is now {code}");
                }
                LanguageEvent::LanguageChanged => {
                    self.title = self.selector.translations().tr("window-title");
                    self.status = None;
                }
                LanguageEvent::LanguageLoadFailed { requested, reason } => {
                    self.status = Some(self.selector.translations().tr_with_args(
                        "status-load-failed",
                        &[("language", requested.as_str()), ("reason", reason.as_str())],
                    ));
                }
            }
        }
    }
}
