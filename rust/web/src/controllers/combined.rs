use std::sync::Arc;

use super::{ActionLatch, report};
use crate::api::{PredictRequest, Prediction, PredictionMode, TrainReport};
use crate::client::Backend;
use crate::errors::{ClientError, ErrorSeverity};
use crate::forms::CardForm;
use crate::notifications::{NotificationLevel, Notifier};
use crate::render::{PredictionView, TrainingStatus, TrainingView};

/// Model training and AI + formula prediction.
pub struct CombinedController {
    backend: Arc<dyn Backend>,
    notifier: Notifier,
    train: ActionLatch,
    predict: ActionLatch,
}

impl CombinedController {
    pub fn new(backend: Arc<dyn Backend>, notifier: Notifier) -> Self {
        Self {
            backend,
            notifier,
            train: ActionLatch::new(),
            predict: ActionLatch::new(),
        }
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub async fn train_model(
        &self,
        view: &mut dyn TrainingView,
    ) -> Result<TrainReport, ClientError> {
        const ACTION: &str = "Model training";
        let _guard = self.train.try_acquire(ACTION)?;

        view.set_training_status(TrainingStatus::Training);
        let report_ok = match self
            .backend
            .train_model()
            .await
            .and_then(|r| r.into_result())
        {
            Ok(r) => r,
            Err(e) => {
                view.set_training_status(TrainingStatus::Failed);
                return report(&self.notifier, ACTION, e, NotificationLevel::Danger);
            }
        };

        view.set_training_status(TrainingStatus::Trained);
        view.set_model_accuracy(report_ok.accuracy);
        tracing::info!(accuracy = report_ok.accuracy, "model trained");
        let message = if report_ok.message.is_empty() {
            "Model trained".to_string()
        } else {
            report_ok.message.clone()
        };
        self.notifier.success(message);
        Ok(report_ok)
    }

    /// Combined prediction for the next round. The cards are optional; the
    /// backend falls back to whichever predictor can answer.
    pub async fn predict(
        &self,
        form: &CardForm,
        view: &mut dyn PredictionView,
    ) -> Result<Prediction, ClientError> {
        self.predict_with(PredictionMode::Combined, form, view).await
    }

    pub async fn predict_with(
        &self,
        mode: PredictionMode,
        form: &CardForm,
        view: &mut dyn PredictionView,
    ) -> Result<Prediction, ClientError> {
        const ACTION: &str = "Prediction";
        let _guard = self.predict.try_acquire(ACTION)?;

        let request = PredictRequest::new(mode, &form.player_hand(), &form.banker_hand());
        let prediction = match self
            .backend
            .predict(&request)
            .await
            .and_then(|r| r.into_result())
        {
            Ok(p) => p,
            Err(e) => {
                // A refusal here usually means "not enough data yet".
                let level = if e.severity() == ErrorSeverity::Backend {
                    NotificationLevel::Warning
                } else {
                    NotificationLevel::Danger
                };
                return report(&self.notifier, ACTION, e, level);
            }
        };

        view.show_prediction(&prediction);
        view.show_combined_details(&prediction);
        tracing::info!(
            mode = mode.as_str(),
            prediction = %prediction.prediction,
            confidence = prediction.confidence,
            "prediction received"
        );
        Ok(prediction)
    }
}
