//! `new-shoe`: start a new shoe on the backend.

use std::io::Write;

use baccaroad_web::{ClientSettings, TextView};

use super::Session;
use crate::error::CliError;
use crate::ui;

pub fn handle_new_shoe_command(
    settings: ClientSettings,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let session = Session::open(settings)?;
    let mut view = TextView::new();
    let started = session.block_on(session.pages().road_map.new_shoe(&mut view));

    if started.is_ok() {
        ui::write_lines(out, view.lines())?;
    }
    session.flush_notifications(out, err)?;
    started?;
    Ok(())
}
