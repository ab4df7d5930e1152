//! Shared helpers for CLI integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use serde_json::{Value, json};
use warp::Filter;

pub const CONFIG_VARS: &[&str] = &[
    "BACCAROAD_CONFIG",
    "BACCAROAD_BASE_URL",
    "BACCAROAD_ROWS",
    "BACCAROAD_COLS",
    "BACCAROAD_NOTIFICATION_TIMEOUT_MS",
    "BACCAROAD_NOTIFICATION_FADE_MS",
    "BACCAROAD_REQUEST_TIMEOUT_MS",
];

#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Run the CLI in-process with a clean configuration environment.
pub fn run_cli(args: &[&str]) -> CliResult {
    clear_config_env();
    run_cli_keep_env(args)
}

pub fn clear_config_env() {
    for key in CONFIG_VARS {
        unsafe {
            std::env::remove_var(key);
        }
    }
}

pub fn run_cli_keep_env(args: &[&str]) -> CliResult {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let argv = std::iter::once("baccaroad").chain(args.iter().copied());
    let exit_code = baccaroad_cli::run(argv, &mut out, &mut err);
    CliResult {
        exit_code,
        stdout: String::from_utf8_lossy(&out).to_string(),
        stderr: String::from_utf8_lossy(&err).to_string(),
    }
}

pub type History = Arc<Mutex<Vec<Value>>>;

/// Minimal backend on its own thread and runtime, since the CLI builds a
/// runtime of its own for every command.
pub fn spawn_backend(history: History) -> String {
    spawn_backend_with(history, false)
}

/// Like [`spawn_backend`], but with `refuse_history` set /get_history answers
/// the way a backend does before its history file exists.
pub fn spawn_backend_with(history: History, refuse_history: bool) -> String {
    let (tx, rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        let runtime = tokio::runtime::Runtime::new().expect("runtime");
        runtime.block_on(async move {
            let state = warp::any().map(move || history.clone());

            let get_history = warp::path!("get_history")
                .and(warp::get())
                .and(state.clone())
                .map(move |h: History| {
                    if refuse_history {
                        warp::reply::json(&json!({
                            "success": false,
                            "error": "[Errno 2] No such file or directory",
                        }))
                    } else {
                        warp::reply::json(&json!({"success": true, "history": *h.lock().unwrap()}))
                    }
                });
            let add_result = warp::path!("add_result")
                .and(warp::post())
                .and(warp::body::json())
                .and(state.clone())
                .map(|body: Value, h: History| {
                    let mut h = h.lock().unwrap();
                    h.push(body);
                    warp::reply::json(&json!({
                        "success": true,
                        "shoe_info": {"shoe_id": 1, "current_round": h.len(), "max_rounds": 80},
                    }))
                });
            let clear_history = warp::path!("clear_history")
                .and(warp::post())
                .and(state.clone())
                .map(|h: History| {
                    h.lock().unwrap().clear();
                    warp::reply::json(&json!({"success": true}))
                });
            let new_shoe = warp::path!("new_shoe").and(warp::post()).map(|| {
                warp::reply::json(&json!({
                    "success": true,
                    "message": "Shoe #2 started",
                    "shoe_info": {"shoe_id": 2, "current_round": 0, "max_rounds": 80},
                }))
            });
            let train_model = warp::path!("train_model").and(warp::post()).map(|| {
                warp::reply::json(&json!({
                    "success": false,
                    "message": "need at least 10 rounds",
                    "accuracy": 0,
                }))
            });
            let predict = warp::path!("predict")
                .and(warp::post())
                .and(warp::body::json())
                .map(|body: Value| {
                    warp::reply::json(&json!({
                        "success": true,
                        "prediction": "player",
                        "confidence": 0.55,
                        "formula_result": "player",
                        "formula_score": 1.5,
                        "reason": format!("{} via {}", body["player_cards"], body["type"]),
                    }))
                });

            let routes = get_history
                .or(add_result)
                .or(clear_history)
                .or(new_shoe)
                .or(train_model)
                .or(predict);
            let (addr, server) = warp::serve(routes).bind_ephemeral(([127, 0, 0, 1], 0));
            tx.send(addr).expect("report address");
            server.await;
        });
    });
    let addr = rx.recv().expect("backend address");
    format!("http://{}", addr)
}

pub fn empty_history() -> History {
    Arc::new(Mutex::new(Vec::new()))
}
