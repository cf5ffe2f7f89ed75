use thiserror::Error as ThisError;

use crate::value::Tag;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An accessor was used against a value of the wrong tag.
    TypeMismatch,
    /// Immutable array access past the current length.
    IndexOutOfRange,
    /// Immutable object access with an absent key.
    KeyNotFound,
    /// Malformed input text.
    Parse,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, PartialEq, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
    pub location: Option<Location>,
}

impl Error {
    pub fn type_mismatch(expected: Tag, found: Tag) -> Self {
        Self {
            kind: ErrorKind::TypeMismatch,
            message: format!("type mismatch: expected {expected}, found {found}"),
            location: None,
        }
    }

    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self {
            kind: ErrorKind::IndexOutOfRange,
            message: format!("index {index} out of range for array of length {len}"),
            location: None,
        }
    }

    pub fn key_not_found(key: &str) -> Self {
        Self {
            kind: ErrorKind::KeyNotFound,
            message: format!("key {key:?} not found in object"),
            location: None,
        }
    }

    pub fn parse(message: impl Into<String>, location: Location) -> Self {
        let message = message.into();
        Self {
            kind: ErrorKind::Parse,
            message: format!(
                "{message} at line {} column {}",
                location.line, location.column
            ),
            location: Some(location),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Io,
            message: message.into(),
            location: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn is_parse(&self) -> bool {
        self.kind == ErrorKind::Parse
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::io(format!("i/o failed: {err}"))
    }
}
