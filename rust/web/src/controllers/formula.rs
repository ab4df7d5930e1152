use std::sync::Arc;

use baccaroad_engine::cards::Side;
use baccaroad_engine::hand::Hand;

use super::{ActionLatch, report};
use crate::api::{PredictRequest, Prediction, PredictionMode};
use crate::client::Backend;
use crate::errors::ClientError;
use crate::forms::CardForm;
use crate::notifications::{NotificationLevel, Notifier};
use crate::render::PredictionView;

/// Cards required per side before a formula prediction may be requested.
pub const MIN_FORMULA_CARDS: usize = 2;

/// Breakdown shown under a formula prediction. Points and weights are
/// computed locally from the entered cards; the score comes from the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct FormulaDetails {
    pub formula_score: Option<f64>,
    pub player_point: u8,
    pub banker_point: u8,
    pub player_frequency: i8,
    pub banker_frequency: i8,
}

impl FormulaDetails {
    pub fn new(player: &Hand, banker: &Hand, formula_score: Option<f64>) -> Self {
        let player_point = player.point();
        let banker_point = banker.point();
        Self {
            formula_score,
            player_point,
            banker_point,
            player_frequency: Side::Player.frequency_weight(player_point),
            banker_frequency: Side::Banker.frequency_weight(banker_point),
        }
    }
}

pub struct FormulaController {
    backend: Arc<dyn Backend>,
    notifier: Notifier,
    calculate: ActionLatch,
}

impl FormulaController {
    pub fn new(backend: Arc<dyn Backend>, notifier: Notifier) -> Self {
        Self {
            backend,
            notifier,
            calculate: ActionLatch::new(),
        }
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub async fn calculate(
        &self,
        form: &CardForm,
        view: &mut dyn PredictionView,
    ) -> Result<Prediction, ClientError> {
        const ACTION: &str = "Prediction";
        let player = form.player_hand();
        let banker = form.banker_hand();

        if player.len() < MIN_FORMULA_CARDS || banker.len() < MIN_FORMULA_CARDS {
            let error = ClientError::Validation(
                "Enter at least the first two cards for both player and banker".to_string(),
            );
            return report(&self.notifier, ACTION, error, NotificationLevel::Warning);
        }

        let _guard = self.calculate.try_acquire(ACTION)?;
        let request = PredictRequest::new(PredictionMode::FormulaOnly, &player, &banker);
        let prediction = match self
            .backend
            .predict(&request)
            .await
            .and_then(|r| r.into_result())
        {
            Ok(p) => p,
            Err(e) => return report(&self.notifier, ACTION, e, NotificationLevel::Danger),
        };

        view.show_prediction(&prediction);
        view.show_formula_details(&FormulaDetails::new(
            &player,
            &banker,
            prediction.formula_score,
        ));
        tracing::info!(
            prediction = %prediction.prediction,
            confidence = prediction.confidence,
            "formula prediction received"
        );
        Ok(prediction)
    }
}
