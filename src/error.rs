// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Scene(SceneError),
}

/// Problems found while reading a fragment scene file.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneError {
    /// The file parsed but declared no fragments.
    Empty,

    /// Two fragments share the same identifier.
    DuplicateId(String),

    /// A fragment has an empty identifier.
    MissingId,

    /// The TOML itself could not be parsed.
    Malformed(String),
}

impl SceneError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            SceneError::Empty => "error-scene-empty",
            SceneError::DuplicateId(_) => "error-scene-duplicate-id",
            SceneError::MissingId => "error-scene-missing-id",
            SceneError::Malformed(_) => "error-scene-malformed",
        }
    }
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::Empty => write!(f, "Scene contains no fragments"),
            SceneError::DuplicateId(id) => write!(f, "Duplicate fragment id: {}", id),
            SceneError::MissingId => write!(f, "Fragment without an id"),
            SceneError::Malformed(msg) => write!(f, "Malformed scene: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Scene(e) => write!(f, "Scene Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<SceneError> for Error {
    fn from(err: SceneError) -> Self {
        Error::Scene(err)
    }
}

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
    fn scene_error_wraps_into_error() {
        let err: Error = SceneError::DuplicateId("a".into()).into();
        assert_eq!(format!("{}", err), "Scene Error: Duplicate fragment id: a");
    }

    #[test]
    fn scene_error_i18n_keys() {
        assert_eq!(SceneError::Empty.i18n_key(), "error-scene-empty");
        assert_eq!(SceneError::MissingId.i18n_key(), "error-scene-missing-id");
        assert_eq!(
            SceneError::Malformed(String::new()).i18n_key(),
            "error-scene-malformed"
        );
    }
}
