/// Page controllers driven end to end against the fake backend
mod support;

use baccaroad_engine::outcome::Outcome;
use baccaroad_engine::road_map::RoadMapGrid;
use baccaroad_web::{
    CardForm, ClientError, ClientSettings, NotificationLevel, Pages, TextView, TrainingStatus,
};
use serde_json::json;

fn pages_for(base_url: String) -> Pages {
    let settings = ClientSettings {
        base_url,
        ..ClientSettings::default()
    };
    Pages::connect(&settings).expect("valid settings")
}

#[tokio::test]
async fn result_entry_updates_grid_shoe_info_and_form() {
    let state = support::fake_state(1);
    let pages = pages_for(support::spawn_backend(state.clone()));
    let mut grid = RoadMapGrid::default();
    let mut view = TextView::new();

    for outcome in [Outcome::Banker, Outcome::Banker, Outcome::Player] {
        let mut form = CardForm::parse(&["4", "4"], &["9", ""]).unwrap();
        pages
            .road_map
            .add_result(outcome, &mut form, &mut grid, &mut view)
            .await
            .expect("result added");
        assert!(form.is_empty());
    }

    assert_eq!(view.road_map()[0], "B . . . . . . . . . . .");
    assert_eq!(view.road_map()[1], "B . . . . . . . . . . .");
    assert_eq!(view.road_map()[2], "P . . . . . . . . . . .");
    assert_eq!(view.lines().last().unwrap(), "Shoe #1: round 3/80");
    assert_eq!(state.lock().unwrap().history.len(), 3);
}

#[tokio::test]
async fn loading_history_replays_into_a_fresh_grid() {
    let state = support::fake_state(1);
    {
        let mut state = state.lock().unwrap();
        for label in ["player", "banker", "tie", "banker", "banker", "player", "tie"] {
            state.history.push(json!({"result": label}));
        }
        state.history.push(json!("surrender"));
    }
    let pages = pages_for(support::spawn_backend(state));
    let mut grid = RoadMapGrid::default();
    grid.append(Outcome::Tie);
    let mut view = TextView::new();

    let replayed = pages
        .road_map
        .load_history(&mut grid, &mut view)
        .await
        .unwrap();
    assert_eq!(replayed, 8);
    assert_eq!(view.road_map()[0], "P T . . . . . . . . . .");
    assert_eq!(view.road_map()[1], "B · . . . . . . . . . .");
    assert_eq!(grid.filled().len(), 8);
}

#[tokio::test]
async fn missing_history_file_does_not_block_the_first_result() {
    let state = support::fake_state(1);
    state.lock().unwrap().history_file_missing = true;
    let pages = pages_for(support::spawn_backend(state.clone()));
    let mut grid = RoadMapGrid::default();
    let mut view = TextView::new();

    let err = pages
        .road_map
        .load_history(&mut grid, &mut view)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Backend { .. }));
    assert_eq!(
        pages.notifier().active()[0].message,
        "Load history failed: [Errno 2] No such file or directory"
    );

    // The quiet load raises nothing on top of that.
    assert_eq!(pages.road_map.preload_history(&mut grid, &mut view).await, 0);
    assert_eq!(pages.notifier().active().len(), 1);
    let mut form = CardForm::parse(&["2", "3"], &["10", "1"]).unwrap();
    pages
        .road_map
        .add_result(Outcome::Banker, &mut form, &mut grid, &mut view)
        .await
        .expect("result added");

    assert_eq!(view.road_map()[0], "B . . . . . . . . . . .");
    assert_eq!(grid.filled().len(), 1);
    assert_eq!(state.lock().unwrap().history.len(), 1);

    // Once a result is stored the history loads normally.
    let replayed = pages
        .road_map
        .load_history(&mut grid, &mut view)
        .await
        .unwrap();
    assert_eq!(replayed, 1);
}

#[tokio::test]
async fn records_with_odd_card_payloads_keep_their_results() {
    let state = support::fake_state(1);
    state.lock().unwrap().history.extend([
        json!({"result": "player", "player_cards": ["0", "14", ""], "timestamp": 1.0}),
        json!({"result": "banker", "banker_cards": [null, "K"], "shoe_id": 1}),
        json!({"result": "tie", "player_cards": "2,3"}),
    ]);
    let pages = pages_for(support::spawn_backend(state));
    let mut grid = RoadMapGrid::default();
    let mut view = TextView::new();

    let replayed = pages
        .road_map
        .load_history(&mut grid, &mut view)
        .await
        .unwrap();
    assert_eq!(replayed, 3);
    assert_eq!(view.road_map()[0], "P . . . . . . . . . . .");
    assert_eq!(view.road_map()[1], "B . . . . . . . . . . .");
    assert_eq!(view.road_map()[2], "T . . . . . . . . . . .");
}

#[tokio::test]
async fn clearing_history_resets_grid_and_shoe_display() {
    let state = support::fake_state(2);
    state.lock().unwrap().history.push(json!("banker"));
    let pages = pages_for(support::spawn_backend(state.clone()));
    let mut grid = RoadMapGrid::default();
    let mut view = TextView::new();
    pages.road_map.load_history(&mut grid, &mut view).await.unwrap();

    pages
        .road_map
        .clear_history(&mut grid, &mut view)
        .await
        .unwrap();
    assert_eq!(grid.filled().len(), 0);
    assert!(view.road_map().iter().all(|row| !row.contains('B')));
    assert_eq!(view.lines().last().unwrap(), "Shoe #1: round 0/80");
    assert!(state.lock().unwrap().history.is_empty());
}

#[tokio::test]
async fn training_needs_enough_history() {
    let state = support::fake_state(1);
    let pages = pages_for(support::spawn_backend(state.clone()));
    let mut view = TextView::new();

    let err = pages.combined.train_model(&mut view).await.unwrap_err();
    assert!(matches!(err, ClientError::Backend { .. }));
    assert_eq!(view.training_status(), Some(TrainingStatus::Failed));

    for _ in 0..support::MIN_TRAINING_ROUNDS {
        state.lock().unwrap().history.push(json!("banker"));
    }
    let report = pages.combined.train_model(&mut view).await.unwrap();
    assert_eq!(report.accuracy, 0.7);
    assert_eq!(view.training_status(), Some(TrainingStatus::Trained));
    assert_eq!(view.lines().last().unwrap(), "Model accuracy: 70.00%");
}

#[tokio::test]
async fn formula_and_combined_predictions_use_their_modes() {
    let state = support::fake_state(1);
    state.lock().unwrap().history.push(json!("player"));
    let pages = pages_for(support::spawn_backend(state.clone()));
    let form = CardForm::parse(&["2", "3", "5"], &["Q", "8", ""]).unwrap();

    let mut formula_view = TextView::new();
    pages
        .formula
        .calculate(&form, &mut formula_view)
        .await
        .unwrap();
    assert!(formula_view
        .lines()
        .contains(&"Player point: 0 (frequency 1)".to_string()));
    assert!(formula_view
        .lines()
        .contains(&"Banker point: 8 (frequency 3)".to_string()));

    let mut combined_view = TextView::new();
    pages
        .combined
        .predict(&form, &mut combined_view)
        .await
        .unwrap();
    assert!(combined_view
        .lines()
        .contains(&"Reason: mode combined".to_string()));

    let requests = state.lock().unwrap().predict_requests.clone();
    assert_eq!(requests[0]["type"], "formula_only");
    assert_eq!(requests[1]["type"], "combined");
    assert_eq!(requests[1]["player_cards"], json!([2, 3, 5]));
}

#[tokio::test]
async fn failures_become_notifications() {
    let pages = pages_for(support::spawn_broken_backend());
    let mut grid = RoadMapGrid::default();
    grid.append(Outcome::Banker);
    let mut view = TextView::new();

    assert!(pages
        .road_map
        .load_history(&mut grid, &mut view)
        .await
        .is_err());
    // A failed load leaves the grid as it was.
    assert_eq!(grid.filled().len(), 1);
    assert!(view.road_map().is_empty());

    let active = pages.notifier().active();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].level, NotificationLevel::Danger);
    assert_eq!(active[0].message, "Load history failed, please try again later");
}
