use std::sync::Arc;

use baccaroad_engine::outcome::{HistoryEntry, Outcome};
use baccaroad_engine::road_map::RoadMapGrid;

use super::{ActionLatch, report};
use crate::api::{AddResultReceipt, AddResultRequest, NewShoeReceipt, ShoeInfo};
use crate::client::Backend;
use crate::errors::ClientError;
use crate::forms::CardForm;
use crate::notifications::{NotificationLevel, Notifier};
use crate::render::{RoadMapView, outcome_name};

/// Drives the road map page: history replay, result entry, clearing and
/// shoe changes. The grid itself belongs to the caller.
pub struct RoadMapController {
    backend: Arc<dyn Backend>,
    notifier: Notifier,
    load: ActionLatch,
    add: ActionLatch,
    clear: ActionLatch,
    shoe: ActionLatch,
}

impl RoadMapController {
    pub fn new(backend: Arc<dyn Backend>, notifier: Notifier) -> Self {
        Self {
            backend,
            notifier,
            load: ActionLatch::new(),
            add: ActionLatch::new(),
            clear: ActionLatch::new(),
            shoe: ActionLatch::new(),
        }
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Fetch the history and replay it into `grid`. Returns the number of
    /// entries replayed.
    pub async fn load_history(
        &self,
        grid: &mut RoadMapGrid,
        view: &mut dyn RoadMapView,
    ) -> Result<usize, ClientError> {
        const ACTION: &str = "Load history";
        let _guard = self.load.try_acquire(ACTION)?;

        match self.backend.get_history().await.and_then(|r| r.into_result()) {
            Ok(payload) => Ok(replay_history(&payload.history, grid, view)),
            Err(e) => report(&self.notifier, ACTION, e, NotificationLevel::Danger),
        }
    }

    /// Quiet variant of [`load_history`](Self::load_history) for opening
    /// the page before another action. A backend with no history yet
    /// refuses the fetch; that is logged, `grid` keeps what it had and no
    /// notification is raised.
    pub async fn preload_history(
        &self,
        grid: &mut RoadMapGrid,
        view: &mut dyn RoadMapView,
    ) -> usize {
        const ACTION: &str = "Load history";
        let Ok(_guard) = self.load.try_acquire(ACTION) else {
            return 0;
        };

        match self.backend.get_history().await.and_then(|r| r.into_result()) {
            Ok(payload) => replay_history(&payload.history, grid, view),
            Err(e) => {
                e.log(ACTION);
                view.paint_road_map(grid);
                0
            }
        }
    }

    /// Record a round. On success the outcome is appended to `grid` and the
    /// card form is cleared.
    pub async fn add_result(
        &self,
        outcome: Outcome,
        form: &mut CardForm,
        grid: &mut RoadMapGrid,
        view: &mut dyn RoadMapView,
    ) -> Result<AddResultReceipt, ClientError> {
        const ACTION: &str = "Add result";
        let _guard = self.add.try_acquire(ACTION)?;

        let request = AddResultRequest {
            result: outcome,
            player_cards: form.player_hand().cards().to_vec(),
            banker_cards: form.banker_hand().cards().to_vec(),
        };
        let receipt = match self
            .backend
            .add_result(&request)
            .await
            .and_then(|r| r.into_result())
        {
            Ok(receipt) => receipt,
            Err(e) => return report(&self.notifier, ACTION, e, NotificationLevel::Danger),
        };

        grid.append(outcome);
        view.paint_road_map(grid);
        if let Some(info) = &receipt.shoe_info {
            view.show_shoe_info(info);
        }
        form.reset();
        tracing::info!(result = %outcome, "round result recorded");
        self.notifier
            .success(format!("Added {} result", outcome_name(outcome)));
        Ok(receipt)
    }

    /// Clear the backend history. The caller is responsible for asking the
    /// user to confirm first.
    pub async fn clear_history(
        &self,
        grid: &mut RoadMapGrid,
        view: &mut dyn RoadMapView,
    ) -> Result<(), ClientError> {
        const ACTION: &str = "Clear history";
        let _guard = self.clear.try_acquire(ACTION)?;

        if let Err(e) = self
            .backend
            .clear_history()
            .await
            .and_then(|r| r.into_result())
        {
            return report(&self.notifier, ACTION, e, NotificationLevel::Danger);
        }

        grid.reset();
        view.paint_road_map(grid);
        view.show_shoe_info(&ShoeInfo::initial());
        tracing::info!("history cleared");
        self.notifier.success("History cleared");
        Ok(())
    }

    pub async fn new_shoe(&self, view: &mut dyn RoadMapView) -> Result<NewShoeReceipt, ClientError> {
        const ACTION: &str = "Change shoe";
        let _guard = self.shoe.try_acquire(ACTION)?;

        let receipt = match self.backend.new_shoe().await.and_then(|r| r.into_result()) {
            Ok(receipt) => receipt,
            Err(e) => return report(&self.notifier, ACTION, e, NotificationLevel::Danger),
        };

        if let Some(info) = &receipt.shoe_info {
            view.show_shoe_info(info);
            tracing::info!(shoe_id = info.shoe_id, "switched to new shoe");
        }
        let message = if receipt.message.is_empty() {
            "New shoe started".to_string()
        } else {
            receipt.message.clone()
        };
        self.notifier.success(message);
        Ok(receipt)
    }
}

fn replay_history(
    history: &[HistoryEntry],
    grid: &mut RoadMapGrid,
    view: &mut dyn RoadMapView,
) -> usize {
    grid.replay(history.iter());
    view.paint_road_map(grid);
    tracing::info!(entries = history.len(), "road map replayed from history");
    history.len()
}
