//! Error type for CLI operations.
//!
//! Backend failures arrive as [`ClientError`] and have already been shown to
//! the user as a notification by the time they reach here.

use std::fmt;

use baccaroad_engine::errors::{CardError, GridError};
use baccaroad_web::ClientError;

use crate::config::ConfigError;

#[derive(Debug)]
pub enum CliError {
    /// I/O error (history files, stdout/stderr writes)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// A page action failed
    Client(ClientError),
}

impl CliError {
    /// Whether the user has already been told about this error.
    pub fn is_reported(&self) -> bool {
        matches!(self, CliError::Client(_))
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Client(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Client(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<ClientError> for CliError {
    fn from(error: ClientError) -> Self {
        CliError::Client(error)
    }
}

impl From<CardError> for CliError {
    fn from(error: CardError) -> Self {
        CliError::InvalidInput(error.to_string())
    }
}

impl From<GridError> for CliError {
    fn from(error: GridError) -> Self {
        CliError::Config(error.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}
