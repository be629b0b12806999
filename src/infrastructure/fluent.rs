// SPDX-License-Identifier: MPL-2.0
//! Fluent-backed translation host.
//!
//! Resources are `.ftl` files named after the resource (`app_es.ftl`), either
//! embedded from `assets/i18n/` at build time or read from a directory given
//! at runtime. Exactly one bundle is active at a time.

use crate::application::port::{TranslationError, TranslationHost};
use crate::domain::language::LanguageCode;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use rust_embed::RustEmbed;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// File extension of translation resources.
const RESOURCE_EXTENSION: &str = "ftl";

/// Where resources are looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceSource {
    /// Files compiled into the binary.
    Embedded,
    /// Files in a directory on disk.
    Directory(PathBuf),
}

struct ActiveBundle {
    resource_name: String,
    bundle: FluentBundle<FluentResource>,
}

pub struct FluentTranslations {
    source: ResourceSource,
    active: Option<ActiveBundle>,
}

impl fmt::Debug for FluentTranslations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FluentTranslations")
            .field("source", &self.source)
            .field("attached", &self.attached_resource())
            .finish()
    }
}

impl Default for FluentTranslations {
    fn default() -> Self {
        Self::embedded()
    }
}

impl FluentTranslations {
    /// Looks resources up among the embedded assets.
    pub fn embedded() -> Self {
        Self::new(ResourceSource::Embedded)
    }

    /// Looks resources up in `dir` instead of the embedded assets.
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        Self::new(ResourceSource::Directory(dir.into()))
    }

    pub fn new(source: ResourceSource) -> Self {
        Self {
            source,
            active: None,
        }
    }

    /// Returns true if a resource is attached.
    pub fn is_attached(&self) -> bool {
        self.active.is_some()
    }

    /// Translates `key` using the attached resource.
    ///
    /// Falls back to the key itself when nothing is attached or the message
    /// is missing, so the UI shows source strings rather than blanks.
    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Translates `key` with named arguments (`{ $name }` placeables).
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, FluentValue::from(*value));
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        if let Some(active) = &self.active {
            if let Some(msg) = active.bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = active.bundle.format_pattern(pattern, args, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                    log::debug!("Formatting {key} reported {} error(s)", errors.len());
                }
            }
        }
        key.to_string()
    }

    fn read_resource(&self, resource_name: &str) -> Result<String, TranslationError> {
        let file_name = format!("{resource_name}.{RESOURCE_EXTENSION}");
        match &self.source {
            ResourceSource::Embedded => {
                let content = Asset::get(&file_name)
                    .ok_or_else(|| TranslationError::NotFound(file_name.clone()))?;
                String::from_utf8(content.data.into_owned())
                    .map_err(|err| TranslationError::Unreadable(format!("{file_name}: {err}")))
            }
            ResourceSource::Directory(dir) => {
                let path = dir.join(&file_name);
                if !path.is_file() {
                    return Err(TranslationError::NotFound(path.display().to_string()));
                }
                fs::read_to_string(&path).map_err(|err| {
                    TranslationError::Unreadable(format!("{}: {err}", path.display()))
                })
            }
        }
    }

    fn build_bundle(
        &self,
        resource_name: &str,
        language: &LanguageCode,
    ) -> Result<FluentBundle<FluentResource>, TranslationError> {
        let source = self.read_resource(resource_name)?;
        let resource = FluentResource::try_new(source).map_err(|(_, errors)| {
            TranslationError::Parse(format!("{resource_name}: {errors:?}"))
        })?;

        let locale = language
            .as_str()
            .parse::<LanguageIdentifier>()
            .map_err(|err| TranslationError::Bundle(format!("{language}: {err}")))?;
        let mut bundle = FluentBundle::new(vec![locale]);
        bundle.set_use_isolating(false);
        bundle
            .add_resource(resource)
            .map_err(|errors| TranslationError::Bundle(format!("{resource_name}: {errors:?}")))?;
        Ok(bundle)
    }
}

impl TranslationHost for FluentTranslations {
    fn detach(&mut self) {
        self.active = None;
    }

    fn attach(
        &mut self,
        resource_name: &str,
        language: &LanguageCode,
    ) -> Result<(), TranslationError> {
        self.active = None;
        let bundle = self.build_bundle(resource_name, language)?;
        self.active = Some(ActiveBundle {
            resource_name: resource_name.to_string(),
            bundle,
        });
        Ok(())
    }

    fn attached_resource(&self) -> Option<&str> {
        self.active
            .as_ref()
            .map(|active| active.resource_name.as_str())
    }
}
