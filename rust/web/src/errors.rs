/// Error handling for the page controllers
///
/// This module provides:
/// - The error type shared by the backend client and controllers
/// - Severity classification (local, backend, transport)
/// - Mapping from errors to notification levels and log levels
use thiserror::Error;

use crate::notifications::NotificationLevel;
use crate::settings::SettingsError;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Input rejected before any request was made
    #[error("{0}")]
    Validation(String),
    /// Backend answered with `success: false`
    #[error("{reason}")]
    Backend { reason: String },
    /// Network failure, timeout or unreadable body
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Non-2xx status without a readable JSON body
    #[error("backend returned HTTP {status}")]
    Status { status: u16 },
    #[error("malformed backend response: {0}")]
    Decode(#[from] serde_json::Error),
    /// The triggering action still has a request outstanding
    #[error("{action} is already in progress")]
    Busy { action: &'static str },
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

/// Where an error originated, used to pick log and notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Rejected locally; nothing was sent
    Local,
    /// The backend refused the request
    Backend,
    /// The request never produced a usable answer
    Transport,
}

impl ClientError {
    pub fn backend(reason: impl Into<String>) -> Self {
        ClientError::Backend {
            reason: reason.into(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ClientError::Validation(_) | ClientError::Busy { .. } | ClientError::Settings(_) => {
                ErrorSeverity::Local
            }
            ClientError::Backend { .. } => ErrorSeverity::Backend,
            ClientError::Transport(_) | ClientError::Status { .. } | ClientError::Decode(_) => {
                ErrorSeverity::Transport
            }
        }
    }

    pub fn notification_level(&self) -> NotificationLevel {
        match self {
            ClientError::Validation(_) => NotificationLevel::Warning,
            ClientError::Busy { .. } => NotificationLevel::Info,
            _ => NotificationLevel::Danger,
        }
    }

    /// User-facing text: backend reasons are shown verbatim, transport
    /// details are replaced by a retry hint.
    pub fn user_message(&self, action: &str) -> String {
        match self.severity() {
            ErrorSeverity::Local => self.to_string(),
            ErrorSeverity::Backend => format!("{} failed: {}", action, self),
            ErrorSeverity::Transport => {
                format!("{} failed, please try again later", action)
            }
        }
    }

    /// Log at a level matching the severity
    pub fn log(&self, action: &str) {
        match self.severity() {
            ErrorSeverity::Local => {
                tracing::info!(action, error = %self, "action rejected locally");
            }
            ErrorSeverity::Backend => {
                tracing::warn!(action, reason = %self, "backend refused request");
            }
            ErrorSeverity::Transport => {
                tracing::error!(action, error = %self, "backend request failed");
            }
        }
    }
}
