// SPDX-License-Identifier: MPL-2.0
//! `language_system` switches the UI language of an Iced application.
//!
//! It keeps the current language, persists the user's choice in
//! `settings.toml`, detects a default from the OS locale, and attaches the
//! matching Fluent resource, falling back from the requested language to the
//! system language and then to English when a resource is missing.

#![doc(html_root_url = "https://docs.rs/language_system/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
