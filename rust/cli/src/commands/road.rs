//! `road`: draw the road map from the backend or a saved history file.

use std::io::Write;
use std::path::Path;

use baccaroad_engine::road_map::RoadMapGrid;
use baccaroad_web::{ClientSettings, RoadMapView, TextView, parse_history_document};

use super::Session;
use crate::error::CliError;
use crate::ui;

pub fn handle_road_command(
    settings: ClientSettings,
    input: Option<&Path>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let mut view = TextView::new();
    let grid = match input {
        Some(path) => replay_file(&settings, path, &mut view)?,
        None => {
            let session = Session::open(settings)?;
            let mut grid = session.grid()?;
            let loaded = session.block_on(
                session
                    .pages()
                    .road_map
                    .load_history(&mut grid, &mut view),
            );
            session.flush_notifications(out, err)?;
            loaded?;
            grid
        }
    };

    write_road_map(out, &grid, &view)
}

fn replay_file(
    settings: &ClientSettings,
    path: &Path,
    view: &mut TextView,
) -> Result<RoadMapGrid, CliError> {
    let body = std::fs::read(path)?;
    let history = parse_history_document(&body).map_err(|e| {
        CliError::InvalidInput(format!("{}: {}", path.display(), e))
    })?;
    let mut grid = RoadMapGrid::new(settings.rows, settings.cols)?;
    grid.replay(history.iter());
    view.paint_road_map(&grid);
    tracing::debug!(entries = history.len(), path = %path.display(), "replayed history file");
    Ok(grid)
}

pub(crate) fn write_road_map(
    out: &mut dyn Write,
    grid: &RoadMapGrid,
    view: &TextView,
) -> Result<(), CliError> {
    ui::write_lines(out, view.road_map())?;
    let next = grid.cursor();
    writeln!(
        out,
        "Marks: {}  Next: row {}, column {}",
        grid.filled().len(),
        next.row + 1,
        next.col + 1
    )?;
    Ok(())
}
