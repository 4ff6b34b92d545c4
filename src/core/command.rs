use std::fmt;
use std::fmt::{Display, Formatter};
use serde::de::DeserializeOwned;
use serde_json::Value;
use crate::core::library::LibraryError;

#[derive(Debug, Clone, PartialEq)]
pub enum CommandError {
    InvalidKey {
        message: String,
    },
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    Conflict {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    // request body could not be decoded into the command's request type
    Validation {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

pub trait Command<Request, Response> {
    fn execute(&mut self, req: Request) -> Result<Response, CommandError>;
}

impl CommandError {
    // true when the caller can report the failure and carry on
    pub fn is_expected(&self) -> bool {
        !matches!(self, CommandError::Serialization { .. } | CommandError::Runtime { .. })
    }
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::InvalidKey { message } => {
                CommandError::InvalidKey { message }
            }
            LibraryError::DuplicateKey { message } => {
                CommandError::DuplicateKey { message }
            }
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::Conflict { message, reason_code } => {
                CommandError::Conflict { message, reason_code }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::InvalidKey { message } => write!(f, "InvalidKey: {}", message),
            CommandError::DuplicateKey { message } => write!(f, "Duplicate: {}", message),
            CommandError::NotFound { message } => write!(f, "NotFound: {}", message),
            CommandError::Conflict { message, reason_code } => {
                match reason_code {
                    Some(reason) => write!(f, "Conflict: {} ({})", message, reason),
                    None => write!(f, "Conflict: {}", message),
                }
            }
            CommandError::Serialization { message } => write!(f, "Serialization: {}", message),
            CommandError::Validation { message } => write!(f, "Validation: {}", message),
            CommandError::Runtime { message, reason_code } => {
                match reason_code {
                    Some(reason) => write!(f, "Runtime: {} ({})", message, reason),
                    None => write!(f, "Runtime: {}", message),
                }
            }
        }
    }
}

impl std::error::Error for CommandError {}

// Decodes a JSON request body into a command request
pub fn parse_request<Request: DeserializeOwned>(json: Value) -> Result<Request, CommandError> {
    serde_json::from_value(json).map_err(|err| CommandError::Validation { message: format!("{}", err) })
}
