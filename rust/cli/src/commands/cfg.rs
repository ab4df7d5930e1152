//! `cfg`: resolved settings with the source of each value, as JSON.

use crate::config;
use crate::error::CliError;
use std::io::Write;

pub fn handle_cfg_command(server: Option<&str>, out: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources(server)
        .map_err(|e| CliError::Config(format!("Invalid configuration: {}", e)))?;

    let config::ConfigResolved { settings, sources } = resolved;
    let display = serde_json::json!({
        "base_url": {
            "value": settings.base_url,
            "source": sources.base_url,
        },
        "rows": {
            "value": settings.rows,
            "source": sources.rows,
        },
        "cols": {
            "value": settings.cols,
            "source": sources.cols,
        },
        "notification_timeout_ms": {
            "value": settings.notification_timeout_ms,
            "source": sources.notification_timeout_ms,
        },
        "notification_fade_ms": {
            "value": settings.notification_fade_ms,
            "source": sources.notification_fade_ms,
        },
        "request_timeout_ms": {
            "value": settings.request_timeout_ms,
            "source": sources.request_timeout_ms,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
