// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Registry(String),
}

/// Reasons a user-initiated language change is rejected before any
/// translation resource is touched.
///
/// The `Display` output is the human-readable reason carried by
/// [`LanguageEvent::LanguageLoadFailed`](crate::application::selector::LanguageEvent).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The requested code was the empty string.
    Empty,

    /// The requested code is not in the supported set.
    Unsupported {
        requested: String,
        supported: Vec<String>,
    },
}

impl RequestError {
    /// Returns the rejected input exactly as the caller passed it.
    pub fn requested(&self) -> &str {
        match self {
            RequestError::Empty => "",
            RequestError::Unsupported { requested, .. } => requested,
        }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::Empty => write!(f, "Empty language code provided"),
            RequestError::Unsupported { supported, .. } => write!(
                f,
                "Unsupported language. Available languages: {}",
                supported.join(", ")
            ),
        }
    }
}

impl std::error::Error for RequestError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Registry(e) => write!(f, "Registry Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn empty_request_reason() {
        assert_eq!(
            RequestError::Empty.to_string(),
            "Empty language code provided"
        );
        assert_eq!(RequestError::Empty.requested(), "");
    }

    #[test]
    fn unsupported_request_reason_lists_supported_codes() {
        let err = RequestError::Unsupported {
            requested: "de".to_string(),
            supported: vec!["en".into(), "es".into(), "fr".into()],
        };
        assert_eq!(
            err.to_string(),
            "Unsupported language. Available languages: en, es, fr"
        );
        assert_eq!(err.requested(), "de");
    }
}
