//! Terminal output helpers shared by the commands.

use std::io::Write;

use baccaroad_web::{Notification, NotificationLevel};

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Success and info notifications go to `out`, the rest to `err`.
pub fn write_notification(
    out: &mut dyn Write,
    err: &mut dyn Write,
    notification: &Notification,
) -> std::io::Result<()> {
    match notification.level {
        NotificationLevel::Success | NotificationLevel::Info => {
            writeln!(out, "{}", notification.message)
        }
        NotificationLevel::Warning => display_warning(err, &notification.message),
        NotificationLevel::Danger => write_error(err, &notification.message),
    }
}

pub fn write_lines<S: AsRef<str>>(out: &mut dyn Write, lines: &[S]) -> std::io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line.as_ref())?;
    }
    Ok(())
}
