use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum LibraryError {
    // An add operation was given an empty ISBN or patron id.
    InvalidKey {
        message: String,
    },
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    // The request is well formed but the current state blocks it, e.g. removing a
    // borrowed book or borrowing an unavailable one. The reason_code tells which rule fired.
    Conflict {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

pub const BOOK_BORROWED: &str = "book_borrowed";
pub const PATRON_HAS_LOANS: &str = "patron_has_loans";
pub const BOOK_UNAVAILABLE: &str = "book_unavailable";
pub const NOT_BORROWED: &str = "not_borrowed";
pub const STALE_VERSION: &str = "stale_version";

impl LibraryError {
    pub fn invalid_key(message: &str) -> LibraryError {
        LibraryError::InvalidKey { message: message.to_string() }
    }

    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn conflict(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Conflict { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn reason_code(&self) -> Option<&str> {
        match self {
            LibraryError::Conflict { reason_code, .. } => { reason_code.as_deref() }
            LibraryError::Runtime { reason_code, .. } => { reason_code.as_deref() }
            _ => { None }
        }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json encoding {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::InvalidKey { message } => {
                write!(f, "invalid key: {}", message)
            }
            LibraryError::DuplicateKey { message } => {
                write!(f, "duplicate key: {}", message)
            }
            LibraryError::NotFound { message } => {
                write!(f, "not found: {}", message)
            }
            LibraryError::Conflict { message, reason_code } => {
                match reason_code {
                    Some(reason) => write!(f, "conflict: {} ({})", message, reason),
                    None => write!(f, "conflict: {}", message),
                }
            }
            LibraryError::Serialization { message } => {
                write!(f, "serialization: {}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                match reason_code {
                    Some(reason) => write!(f, "runtime: {} ({})", message, reason),
                    None => write!(f, "runtime: {}", message),
                }
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for catalog operations.
pub type LibraryResult<T> = Result<T, LibraryError>;
