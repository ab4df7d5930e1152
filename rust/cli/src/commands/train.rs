//! `train`: train the prediction model.

use std::io::Write;

use baccaroad_web::{ClientSettings, TextView};

use super::Session;
use crate::error::CliError;
use crate::ui;

pub fn handle_train_command(
    settings: ClientSettings,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let session = Session::open(settings)?;
    let mut view = TextView::new();
    let trained = session.block_on(session.pages().combined.train_model(&mut view));

    // Status lines are useful on failure too ("Training failed").
    ui::write_lines(out, view.lines())?;
    session.flush_notifications(out, err)?;
    trained?;
    Ok(())
}
