// SPDX-License-Identifier: MPL-2.0
//! Language domain types.
//!
//! The supported set is data, not code: a [`LanguageRegistry`] lists one
//! [`LanguageEntry`] per language and hands out [`LanguageCode`] values only
//! for codes it contains.

pub mod registry;

pub use registry::{
    primary_subtag, resource_name_for, LanguageCode, LanguageEntry, LanguageRegistry,
    DEFAULT_LANGUAGE, ENGLISH, FRENCH, RESOURCE_PREFIX, SPANISH,
};
