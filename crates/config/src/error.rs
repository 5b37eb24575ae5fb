use std::fmt;

use headline_engine::InvalidSettings;

#[derive(Debug, Clone, PartialEq)]
pub enum PersistError {
    /// Backend read/write failure (file system, etc.).
    Io(String),
    /// Settings could not be encoded.
    Encode(String),
    /// Stored text is not a settings document.
    Decode(String),
    /// Stored document parsed but breaks a settings invariant.
    Invalid(InvalidSettings),
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "IO error: {msg}"),
            Self::Encode(msg) => write!(f, "encode error: {msg}"),
            Self::Decode(msg) => write!(f, "decode error: {msg}"),
            Self::Invalid(e) => write!(f, "invalid settings: {e}"),
        }
    }
}

impl std::error::Error for PersistError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Invalid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<InvalidSettings> for PersistError {
    fn from(e: InvalidSettings) -> Self {
        Self::Invalid(e)
    }
}

impl From<std::io::Error> for PersistError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
