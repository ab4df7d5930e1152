use std::time::Duration;

use baccaroad_engine::road_map::{DEFAULT_COLS, DEFAULT_ROWS};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Client-side settings shared by every page controller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientSettings {
    /// Base URL of the prediction backend (no trailing path)
    pub base_url: String,
    /// Road map height
    pub rows: usize,
    /// Road map width
    pub cols: usize,
    /// How long a notification stays fully shown
    pub notification_timeout_ms: u64,
    /// Fade-out time before a notification is removed
    pub notification_fade_ms: u64,
    /// Per-request timeout for backend calls
    pub request_timeout_ms: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            notification_timeout_ms: 5_000,
            notification_fade_ms: 150,
            request_timeout_ms: 10_000,
        }
    }
}

impl ClientSettings {
    /// Validate settings values
    pub fn validate(&self) -> Result<(), SettingsError> {
        let url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| SettingsError::InvalidValue(format!("base_url: {}", e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(SettingsError::InvalidValue(
                "base_url must use http or https".to_string(),
            ));
        }

        if self.rows == 0 || self.cols == 0 {
            return Err(SettingsError::InvalidValue(
                "rows and cols must be greater than 0".to_string(),
            ));
        }

        if self.request_timeout_ms == 0 {
            return Err(SettingsError::InvalidValue(
                "request_timeout_ms must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Backend URL for an endpoint path such as `/predict`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    pub fn notification_timeout(&self) -> Duration {
        Duration::from_millis(self.notification_timeout_ms)
    }

    pub fn notification_fade(&self) -> Duration {
        Duration::from_millis(self.notification_fade_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Invalid settings value: {0}")]
    InvalidValue(String),
}
