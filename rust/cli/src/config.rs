//! Settings resolution with per-value source tracking.
//!
//! Precedence, lowest first: built-in defaults, the TOML file named by
//! `BACCAROAD_CONFIG`, `BACCAROAD_*` environment variables, then the
//! `--server` flag.

use baccaroad_web::ClientSettings;
use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_ENV: &str = "BACCAROAD_CONFIG";
pub const BASE_URL_ENV: &str = "BACCAROAD_BASE_URL";
pub const ROWS_ENV: &str = "BACCAROAD_ROWS";
pub const COLS_ENV: &str = "BACCAROAD_COLS";
pub const NOTIFICATION_TIMEOUT_ENV: &str = "BACCAROAD_NOTIFICATION_TIMEOUT_MS";
pub const NOTIFICATION_FADE_ENV: &str = "BACCAROAD_NOTIFICATION_FADE_MS";
pub const REQUEST_TIMEOUT_ENV: &str = "BACCAROAD_REQUEST_TIMEOUT_MS";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Flag,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub base_url: ValueSource,
    pub rows: ValueSource,
    pub cols: ValueSource,
    pub notification_timeout_ms: ValueSource,
    pub notification_fade_ms: ValueSource,
    pub request_timeout_ms: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            base_url: ValueSource::Default,
            rows: ValueSource::Default,
            cols: ValueSource::Default,
            notification_timeout_ms: ValueSource::Default,
            notification_fade_ms: ValueSource::Default,
            request_timeout_ms: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub settings: ClientSettings,
    pub sources: ConfigSources,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    base_url: Option<String>,
    #[serde(default)]
    rows: Option<usize>,
    #[serde(default)]
    cols: Option<usize>,
    #[serde(default)]
    notification_timeout_ms: Option<u64>,
    #[serde(default)]
    notification_fade_ms: Option<u64>,
    #[serde(default)]
    request_timeout_ms: Option<u64>,
}

pub fn load_with_sources(server_flag: Option<&str>) -> Result<ConfigResolved, ConfigError> {
    let mut cfg = ClientSettings::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.base_url {
            cfg.base_url = v;
            sources.base_url = ValueSource::File;
        }
        if let Some(v) = f.rows {
            cfg.rows = v;
            sources.rows = ValueSource::File;
        }
        if let Some(v) = f.cols {
            cfg.cols = v;
            sources.cols = ValueSource::File;
        }
        if let Some(v) = f.notification_timeout_ms {
            cfg.notification_timeout_ms = v;
            sources.notification_timeout_ms = ValueSource::File;
        }
        if let Some(v) = f.notification_fade_ms {
            cfg.notification_fade_ms = v;
            sources.notification_fade_ms = ValueSource::File;
        }
        if let Some(v) = f.request_timeout_ms {
            cfg.request_timeout_ms = v;
            sources.request_timeout_ms = ValueSource::File;
        }
    }

    if let Some(url) = env_value(BASE_URL_ENV) {
        cfg.base_url = url;
        sources.base_url = ValueSource::Env;
    }
    if let Some(rows) = env_parsed(ROWS_ENV)? {
        cfg.rows = rows;
        sources.rows = ValueSource::Env;
    }
    if let Some(cols) = env_parsed(COLS_ENV)? {
        cfg.cols = cols;
        sources.cols = ValueSource::Env;
    }
    if let Some(ms) = env_parsed(NOTIFICATION_TIMEOUT_ENV)? {
        cfg.notification_timeout_ms = ms;
        sources.notification_timeout_ms = ValueSource::Env;
    }
    if let Some(ms) = env_parsed(NOTIFICATION_FADE_ENV)? {
        cfg.notification_fade_ms = ms;
        sources.notification_fade_ms = ValueSource::Env;
    }
    if let Some(ms) = env_parsed(REQUEST_TIMEOUT_ENV)? {
        cfg.request_timeout_ms = ms;
        sources.request_timeout_ms = ValueSource::Env;
    }

    if let Some(url) = server_flag {
        cfg.base_url = url.to_string();
        sources.base_url = ValueSource::Flag;
    }

    cfg.validate()
        .map_err(|e| ConfigError::Invalid(e.to_string()))?;
    Ok(ConfigResolved {
        settings: cfg,
        sources,
    })
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

fn env_parsed<T: std::str::FromStr>(key: &str) -> Result<Option<T>, ConfigError> {
    match env_value(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {:?}", key, raw))),
    }
}
