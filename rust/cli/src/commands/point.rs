//! `point`: local point calculation, no backend involved.

use baccaroad_engine::cards::{Rank, Side};
use baccaroad_engine::hand::points_from_inputs;
use std::io::Write;

use crate::cli::SideArg;
use crate::error::CliError;
use crate::ui;

pub fn handle_point_command(
    cards: &[String],
    side: Option<SideArg>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    for card in cards {
        if !card.trim().is_empty() && card.parse::<Rank>().is_err() {
            ui::display_warning(err, &format!("ignoring unrecognised card {:?}", card))?;
        }
    }

    let point = points_from_inputs(cards);
    writeln!(out, "Point: {}", point)?;
    if let Some(side) = side {
        let side = match side {
            SideArg::Player => Side::Player,
            SideArg::Banker => Side::Banker,
        };
        writeln!(
            out,
            "Frequency ({}): {}",
            side.as_str(),
            side.frequency_weight(point)
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(cards: &[&str], side: Option<SideArg>) -> (String, String) {
        let cards: Vec<String> = cards.iter().map(|c| c.to_string()).collect();
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_point_command(&cards, side, &mut out, &mut err).unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn face_cards_count_zero() {
        assert_eq!(run(&["K", "9"], None).0, "Point: 9\n");
        assert_eq!(run(&["5", "5", "Q"], None).0, "Point: 0\n");
    }

    #[test]
    fn side_adds_frequency_weight() {
        let (out, _) = run(&["7", "8"], Some(SideArg::Banker));
        assert_eq!(out, "Point: 5\nFrequency (banker): -5\n");
    }

    #[test]
    fn unrecognised_cards_are_skipped_with_warning() {
        let (out, err) = run(&["4", "zz", "3"], None);
        assert_eq!(out, "Point: 7\n");
        assert_eq!(err, "WARNING: ignoring unrecognised card \"zz\"\n");
    }
}
