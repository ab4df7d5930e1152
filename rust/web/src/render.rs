//! Display ports the controllers paint through, plus a plain-text surface.
//!
//! Controllers never look up display elements themselves; whatever hosts a
//! page implements these traits. [`TextView`] implements all of them by
//! collecting lines, which is what the terminal front end and tests use.

use baccaroad_engine::outcome::{Cell, Outcome};
use baccaroad_engine::road_map::RoadMapGrid;

use crate::api::{Prediction, ShoeInfo};
use crate::controllers::formula::FormulaDetails;

pub trait RoadMapView {
    fn paint_road_map(&mut self, grid: &RoadMapGrid);
    fn show_shoe_info(&mut self, info: &ShoeInfo);
}

pub trait PredictionView {
    fn show_prediction(&mut self, prediction: &Prediction);
    fn show_formula_details(&mut self, details: &FormulaDetails);
    fn show_combined_details(&mut self, prediction: &Prediction);
}

pub trait TrainingView {
    fn set_training_status(&mut self, status: TrainingStatus);
    fn set_model_accuracy(&mut self, accuracy: f64);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainingStatus {
    Training,
    Trained,
    Failed,
}

impl TrainingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TrainingStatus::Training => "Training...",
            TrainingStatus::Trained => "Training complete",
            TrainingStatus::Failed => "Training failed",
        }
    }
}

pub fn outcome_name(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Banker => "Banker",
        Outcome::Player => "Player",
        Outcome::Tie => "Tie",
    }
}

pub fn cell_symbol(cell: Cell) -> char {
    match cell {
        Cell::Empty => '.',
        Cell::Neutral => '·',
        Cell::Mark(o) => o.symbol(),
    }
}

/// One text line per grid row, cells separated by a space.
pub fn road_map_lines(grid: &RoadMapGrid) -> Vec<String> {
    grid.rows_iter()
        .map(|row| {
            row.into_iter()
                .map(|c| cell_symbol(c).to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn format_score(score: Option<f64>) -> String {
    match score {
        Some(s) => format!("{:.2}", s),
        None => "-".to_string(),
    }
}

fn format_optional_outcome(outcome: Option<Outcome>) -> &'static str {
    outcome.map(outcome_name).unwrap_or("-")
}

/// Collects everything painted onto it as text.
#[derive(Debug, Default, Clone)]
pub struct TextView {
    road_map: Vec<String>,
    lines: Vec<String>,
    training_status: Option<TrainingStatus>,
}

impl TextView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently painted grid.
    pub fn road_map(&self) -> &[String] {
        &self.road_map
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn training_status(&self) -> Option<TrainingStatus> {
        self.training_status
    }
}

impl RoadMapView for TextView {
    fn paint_road_map(&mut self, grid: &RoadMapGrid) {
        self.road_map = road_map_lines(grid);
    }

    fn show_shoe_info(&mut self, info: &ShoeInfo) {
        self.lines.push(format!(
            "Shoe #{}: round {}/{}",
            info.shoe_id, info.current_round, info.max_rounds
        ));
    }
}

impl PredictionView for TextView {
    fn show_prediction(&mut self, prediction: &Prediction) {
        self.lines.push(format!(
            "Prediction: {}",
            outcome_name(prediction.prediction)
        ));
        self.lines
            .push(format!("Confidence: {}%", prediction.confidence_percent()));
    }

    fn show_formula_details(&mut self, details: &FormulaDetails) {
        self.lines.push(format!(
            "Advantage: {}",
            format_score(details.formula_score)
        ));
        self.lines.push(format!(
            "Player point: {} (frequency {})",
            details.player_point, details.player_frequency
        ));
        self.lines.push(format!(
            "Banker point: {} (frequency {})",
            details.banker_point, details.banker_frequency
        ));
        self.lines.push(format!(
            "Hertz result: {}",
            format_score(details.formula_score)
        ));
    }

    fn show_combined_details(&mut self, prediction: &Prediction) {
        self.lines.push(format!(
            "AI prediction: {}",
            format_optional_outcome(prediction.ai_result)
        ));
        let ai_confidence = match prediction.ai_result {
            Some(_) => format!("{}%", prediction.confidence_percent()),
            None => "-".to_string(),
        };
        self.lines.push(format!("AI confidence: {}", ai_confidence));
        self.lines.push(format!(
            "Formula prediction: {}",
            format_optional_outcome(prediction.formula_result)
        ));
        self.lines.push(format!(
            "Formula score: {}",
            format_score(prediction.formula_score)
        ));
        self.lines.push(format!(
            "Reason: {}",
            prediction.reason.as_deref().unwrap_or("-")
        ));
    }
}

impl TrainingView for TextView {
    fn set_training_status(&mut self, status: TrainingStatus) {
        self.training_status = Some(status);
        self.lines.push(format!("Training status: {}", status.label()));
    }

    fn set_model_accuracy(&mut self, accuracy: f64) {
        self.lines
            .push(format!("Model accuracy: {:.2}%", accuracy * 100.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_renders_one_line_per_row() {
        let mut grid = RoadMapGrid::new(2, 3).unwrap();
        grid.replay([Cell::Mark(Outcome::Banker), Cell::Neutral, Cell::Mark(Outcome::Tie)]);
        assert_eq!(road_map_lines(&grid), vec!["B T .", "· . ."]);
    }

    #[test]
    fn combined_details_show_dashes_for_missing_parts() {
        let mut view = TextView::new();
        view.show_combined_details(&Prediction {
            prediction: Outcome::Player,
            confidence: 0.5,
            ai_result: None,
            formula_result: Some(Outcome::Player),
            formula_score: Some(3.0),
            reason: None,
        });
        assert_eq!(
            view.lines(),
            &[
                "AI prediction: -",
                "AI confidence: -",
                "Formula prediction: Player",
                "Formula score: 3.00",
                "Reason: -",
            ]
        );
    }

    #[test]
    fn accuracy_shown_as_percent() {
        let mut view = TextView::new();
        view.set_model_accuracy(0.6234);
        assert_eq!(view.lines(), &["Model accuracy: 62.34%"]);
    }
}
