//! `clear`: delete the stored history.

use std::io::Write;

use baccaroad_web::{ClientSettings, TextView};

use super::Session;
use crate::error::CliError;
use crate::ui;

pub fn handle_clear_command(
    settings: ClientSettings,
    confirmed: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if !confirmed {
        return Err(CliError::InvalidInput(
            "clearing deletes every recorded result; pass --yes to confirm".to_string(),
        ));
    }

    let session = Session::open(settings)?;
    let mut grid = session.grid()?;
    let mut view = TextView::new();
    let cleared = session.block_on(
        session
            .pages()
            .road_map
            .clear_history(&mut grid, &mut view),
    );

    if cleared.is_ok() {
        ui::write_lines(out, view.lines())?;
    }
    session.flush_notifications(out, err)?;
    cleared?;
    Ok(())
}
