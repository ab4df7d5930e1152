//! Client side of the baccarat road-map pages.
//!
//! The backend owns history, shoes, the prediction model and the formula
//! score. This crate talks to it over HTTP ([`client::HttpBackend`]) and
//! turns each user action into a controller call that paints the result
//! through a view trait ([`render`]) and reports outcomes as notifications.

pub mod api;
pub mod client;
pub mod controllers;
pub mod errors;
pub mod forms;
pub mod logging;
pub mod notifications;
pub mod render;
pub mod settings;

pub use api::{
    AddResultReceipt, AddResultRequest, ApiResponse, ClearReceipt, HistoryPayload,
    NewShoeReceipt, PredictRequest, Prediction, PredictionMode, ShoeInfo, TrainReport,
};
pub use client::{Backend, HttpBackend, parse_history_document};
pub use controllers::combined::CombinedController;
pub use controllers::formula::{FormulaController, FormulaDetails};
pub use controllers::road_map::RoadMapController;
pub use controllers::{ActionLatch, LatchGuard};
pub use errors::{ClientError, ErrorSeverity};
pub use forms::CardForm;
pub use logging::{LogEntry, LogFormat, TestLogSubscriber, init_logging, init_test_logging};
pub use notifications::{Notification, NotificationLevel, NotificationState, Notifier};
pub use render::{PredictionView, RoadMapView, TextView, TrainingStatus, TrainingView};
pub use settings::{ClientSettings, SettingsError};

use std::sync::Arc;

/// The three page controllers sharing one backend and one notifier.
pub struct Pages {
    pub road_map: RoadMapController,
    pub formula: FormulaController,
    pub combined: CombinedController,
}

impl Pages {
    pub fn new(backend: Arc<dyn Backend>, notifier: Notifier) -> Self {
        Self {
            road_map: RoadMapController::new(backend.clone(), notifier.clone()),
            formula: FormulaController::new(backend.clone(), notifier.clone()),
            combined: CombinedController::new(backend, notifier),
        }
    }

    /// Build an HTTP backend from `settings` and wire the controllers to it.
    pub fn connect(settings: &ClientSettings) -> Result<Self, ClientError> {
        let backend = HttpBackend::new(settings.clone())?;
        Ok(Self::new(Arc::new(backend), Notifier::from_settings(settings)))
    }

    pub fn notifier(&self) -> &Notifier {
        self.road_map.notifier()
    }
}
