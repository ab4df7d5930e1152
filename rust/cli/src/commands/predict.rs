//! `predict`: next-round prediction in one of three modes.

use std::io::Write;

use baccaroad_web::{CardForm, ClientSettings, PredictionMode, TextView};

use super::Session;
use crate::cli::PredictMode;
use crate::error::CliError;
use crate::ui;

pub fn handle_predict_command(
    settings: ClientSettings,
    mode: PredictMode,
    player: &[String],
    banker: &[String],
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let form = CardForm::parse(player, banker)?;

    let session = Session::open(settings)?;
    let pages = session.pages();
    let mut view = TextView::new();
    let predicted = session.block_on(async {
        match mode {
            PredictMode::Formula => pages.formula.calculate(&form, &mut view).await,
            PredictMode::Combined => pages.combined.predict(&form, &mut view).await,
            PredictMode::Ai => {
                pages
                    .combined
                    .predict_with(PredictionMode::AiOnly, &form, &mut view)
                    .await
            }
        }
    });

    if predicted.is_ok() {
        ui::write_lines(out, view.lines())?;
    }
    session.flush_notifications(out, err)?;
    predicted?;
    Ok(())
}
