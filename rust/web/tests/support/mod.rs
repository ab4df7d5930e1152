//! In-process fake of the prediction backend.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use serde_json::{Value, json};
use warp::Filter;
use warp::http::StatusCode;

pub const MAX_ROUNDS: u32 = 80;
pub const MIN_TRAINING_ROUNDS: usize = 10;

#[derive(Debug, Default)]
pub struct FakeState {
    pub history: Vec<Value>,
    pub shoe_id: u32,
    pub predict_requests: Vec<Value>,
    /// Until the first result is stored, /get_history refuses as a backend
    /// without a history file does.
    pub history_file_missing: bool,
}

pub type Shared = Arc<Mutex<FakeState>>;

impl FakeState {
    fn shoe_info(&self) -> Value {
        json!({
            "shoe_id": self.shoe_id,
            "current_round": self.history.len(),
            "max_rounds": MAX_ROUNDS,
        })
    }
}

fn with_state(state: Shared) -> impl Filter<Extract = (Shared,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || state.clone())
}

/// Start the fake on an ephemeral port and return its base URL.
pub fn spawn_backend(state: Shared) -> String {
    let get_history = warp::path!("get_history")
        .and(warp::get())
        .and(with_state(state.clone()))
        .map(|state: Shared| {
            let state = state.lock().unwrap();
            if state.history_file_missing {
                return warp::reply::json(&json!({
                    "success": false,
                    "error": "[Errno 2] No such file or directory",
                }));
            }
            warp::reply::json(&json!({"success": true, "history": state.history}))
        });

    let add_result = warp::path!("add_result")
        .and(warp::post())
        .and(warp::body::json())
        .and(with_state(state.clone()))
        .map(|body: Value, state: Shared| {
            let mut state = state.lock().unwrap();
            match body.get("result").and_then(Value::as_str) {
                Some("banker" | "player" | "tie") => {
                    state.history.push(body.clone());
                    state.history_file_missing = false;
                    warp::reply::json(&json!({
                        "success": true,
                        "message": "Result added",
                        "shoe_info": state.shoe_info(),
                    }))
                }
                _ => warp::reply::json(&json!({"success": false, "error": "invalid result"})),
            }
        });

    let clear_history = warp::path!("clear_history")
        .and(warp::post())
        .and(with_state(state.clone()))
        .map(|state: Shared| {
            state.lock().unwrap().history.clear();
            warp::reply::json(&json!({"success": true, "message": "History cleared"}))
        });

    let new_shoe = warp::path!("new_shoe")
        .and(warp::post())
        .and(with_state(state.clone()))
        .map(|state: Shared| {
            let mut state = state.lock().unwrap();
            state.shoe_id += 1;
            state.history.clear();
            warp::reply::json(&json!({
                "success": true,
                "message": format!("Shoe #{} started", state.shoe_id),
                "shoe_info": state.shoe_info(),
            }))
        });

    let train_model = warp::path!("train_model")
        .and(warp::post())
        .and(with_state(state.clone()))
        .map(|state: Shared| {
            let state = state.lock().unwrap();
            if state.history.len() < MIN_TRAINING_ROUNDS {
                warp::reply::json(&json!({
                    "success": false,
                    "message": format!("need at least {} rounds", MIN_TRAINING_ROUNDS),
                    "accuracy": 0,
                }))
            } else {
                warp::reply::json(&json!({
                    "success": true,
                    "accuracy": 0.7,
                    "message": "Model trained",
                }))
            }
        });

    let predict = warp::path!("predict")
        .and(warp::post())
        .and(warp::body::json())
        .and(with_state(state))
        .map(|body: Value, state: Shared| {
            let mut state = state.lock().unwrap();
            state.predict_requests.push(body.clone());
            if state.history.is_empty() {
                return warp::reply::json(&json!({
                    "success": false,
                    "prediction": null,
                    "reason": "no history yet",
                }));
            }
            let mode = body.get("type").and_then(Value::as_str).unwrap_or("combined");
            warp::reply::json(&json!({
                "success": true,
                "prediction": "banker",
                "confidence": 0.66,
                "ai_result": if mode == "formula_only" { Value::Null } else { json!("banker") },
                "formula_result": "player",
                "formula_score": 2.5,
                "reason": format!("mode {}", mode),
            }))
        });

    let routes = get_history
        .or(add_result)
        .or(clear_history)
        .or(new_shoe)
        .or(train_model)
        .or(predict);

    let (addr, server) = warp::serve(routes).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    format!("http://{}", addr)
}

/// A server that answers every request with a plain-text 500.
pub fn spawn_broken_backend() -> String {
    let routes = warp::any().map(|| {
        warp::reply::with_status("internal error", StatusCode::INTERNAL_SERVER_ERROR)
    });
    let (addr, server) = warp::serve(routes).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    format!("http://{}", addr)
}

pub fn fake_state(shoe_id: u32) -> Shared {
    Arc::new(Mutex::new(FakeState {
        shoe_id,
        ..FakeState::default()
    }))
}
