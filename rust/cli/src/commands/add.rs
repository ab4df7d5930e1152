//! `add`: record a result, then show the updated road map.

use std::io::Write;

use baccaroad_engine::outcome::Outcome;
use baccaroad_web::{CardForm, ClientSettings, TextView};

use super::Session;
use super::road::write_road_map;
use crate::error::CliError;
use crate::ui;

pub fn handle_add_command(
    settings: ClientSettings,
    result: &str,
    player: &[String],
    banker: &[String],
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let outcome: Outcome = result.parse().map_err(CliError::InvalidInput)?;
    let mut form = CardForm::parse(player, banker)?;

    let session = Session::open(settings)?;
    let mut grid = session.grid()?;
    let mut view = TextView::new();
    let road_map = &session.pages().road_map;

    // Start from the stored history, as the page does when it opens. A
    // fresh backend has none yet, so a refused fetch starts an empty road.
    let added = session.block_on(async {
        road_map.preload_history(&mut grid, &mut view).await;
        road_map
            .add_result(outcome, &mut form, &mut grid, &mut view)
            .await
    });

    if added.is_ok() {
        write_road_map(out, &grid, &view)?;
        ui::write_lines(out, view.lines())?;
    }
    session.flush_notifications(out, err)?;
    added?;
    Ok(())
}
