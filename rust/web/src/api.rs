//! Request and response shapes for the prediction backend.
//!
//! Every endpoint answers with a JSON object carrying a `success` flag. The
//! body is decoded into [`ApiResponse`]: a success variant holding the
//! endpoint's payload, or a failure variant holding the backend's reason.

use baccaroad_engine::cards::Rank;
use baccaroad_engine::hand::Hand;
use baccaroad_engine::outcome::{HistoryEntry, Outcome};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ClientError;

pub const TRAIN_MODEL: &str = "/train_model";
pub const PREDICT: &str = "/predict";
pub const GET_HISTORY: &str = "/get_history";
pub const ADD_RESULT: &str = "/add_result";
pub const CLEAR_HISTORY: &str = "/clear_history";
pub const NEW_SHOE: &str = "/new_shoe";

/// Decoded endpoint answer.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    Success(T),
    Failure { reason: String },
}

impl<T: DeserializeOwned> ApiResponse<T> {
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        let success = value.get("success").and_then(Value::as_bool);
        if success == Some(true) {
            return serde_json::from_value(value).map(ApiResponse::Success);
        }
        let reason = failure_reason(&value).unwrap_or_else(|| {
            if success.is_none() {
                "response missing success flag".to_string()
            } else {
                "unknown error".to_string()
            }
        });
        Ok(ApiResponse::Failure { reason })
    }

    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        Self::from_value(serde_json::from_slice(body)?)
    }
}

impl<T> ApiResponse<T> {
    pub fn into_result(self) -> Result<T, ClientError> {
        match self {
            ApiResponse::Success(payload) => Ok(payload),
            ApiResponse::Failure { reason } => Err(ClientError::backend(reason)),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success(_))
    }
}

// Endpoints disagree on the field name: /predict uses `reason`, the history
// endpoints use `error`, /train_model uses `message`.
fn failure_reason(value: &Value) -> Option<String> {
    ["reason", "error", "message"]
        .iter()
        .filter_map(|key| value.get(*key))
        .find_map(|v| match v {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Null | Value::String(_) => None,
            other => Some(other.to_string()),
        })
}

/// How the backend should combine its two predictors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionMode {
    Combined,
    FormulaOnly,
    AiOnly,
}

impl PredictionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PredictionMode::Combined => "combined",
            PredictionMode::FormulaOnly => "formula_only",
            PredictionMode::AiOnly => "ai_only",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictRequest {
    #[serde(rename = "type")]
    pub mode: PredictionMode,
    pub player_cards: Vec<Rank>,
    pub banker_cards: Vec<Rank>,
}

impl PredictRequest {
    pub fn new(mode: PredictionMode, player: &Hand, banker: &Hand) -> Self {
        Self {
            mode,
            player_cards: player.cards().to_vec(),
            banker_cards: banker.cards().to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddResultRequest {
    pub result: Outcome,
    pub player_cards: Vec<Rank>,
    pub banker_cards: Vec<Rank>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainReport {
    #[serde(default)]
    pub accuracy: f64,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub prediction: Outcome,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub ai_result: Option<Outcome>,
    #[serde(default)]
    pub formula_result: Option<Outcome>,
    #[serde(default)]
    pub formula_score: Option<f64>,
    #[serde(default)]
    pub reason: Option<String>,
}

impl Prediction {
    /// Confidence as a whole percentage, clamped to 0..=100.
    pub fn confidence_percent(&self) -> u8 {
        (self.confidence.clamp(0.0, 1.0) * 100.0).round() as u8
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPayload {
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

/// Backend shoe counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoeInfo {
    pub shoe_id: u32,
    pub current_round: u32,
    pub max_rounds: u32,
}

impl ShoeInfo {
    /// What the backend reports right after its history is cleared.
    pub fn initial() -> Self {
        Self {
            shoe_id: 1,
            current_round: 0,
            max_rounds: 80,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddResultReceipt {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub shoe_info: Option<ShoeInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClearReceipt {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewShoeReceipt {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub shoe_info: Option<ShoeInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_decodes_payload() {
        let value = json!({
            "success": true,
            "prediction": "banker",
            "confidence": 0.734,
            "ai_result": "player",
            "formula_result": "banker",
            "formula_score": -4.0,
            "reason": "formula only"
        });
        let resp = ApiResponse::<Prediction>::from_value(value).unwrap();
        let p = resp.into_result().unwrap();
        assert_eq!(p.prediction, Outcome::Banker);
        assert_eq!(p.ai_result, Some(Outcome::Player));
        assert_eq!(p.confidence_percent(), 73);
    }

    #[test]
    fn failure_reason_field_precedence() {
        let resp = ApiResponse::<Prediction>::from_value(json!({
            "success": false,
            "prediction": null,
            "reason": "not enough data",
            "message": "ignored"
        }))
        .unwrap();
        assert_eq!(
            resp,
            ApiResponse::Failure {
                reason: "not enough data".into()
            }
        );

        let resp = ApiResponse::<ClearReceipt>::from_value(json!({
            "success": false,
            "error": "disk full"
        }))
        .unwrap();
        assert_eq!(
            resp,
            ApiResponse::Failure {
                reason: "disk full".into()
            }
        );
    }

    #[test]
    fn failure_without_reason_gets_placeholder() {
        let resp = ApiResponse::<ClearReceipt>::from_value(json!({"success": false})).unwrap();
        assert_eq!(
            resp,
            ApiResponse::Failure {
                reason: "unknown error".into()
            }
        );

        let resp = ApiResponse::<ClearReceipt>::from_value(json!({"error": "bad request"})).unwrap();
        assert_eq!(
            resp,
            ApiResponse::Failure {
                reason: "bad request".into()
            }
        );

        let resp = ApiResponse::<ClearReceipt>::from_value(json!({})).unwrap();
        assert_eq!(
            resp,
            ApiResponse::Failure {
                reason: "response missing success flag".into()
            }
        );
    }

    #[test]
    fn success_with_wrong_payload_is_decode_error() {
        let result = ApiResponse::<Prediction>::from_value(json!({
            "success": true,
            "prediction": "dragon"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn predict_request_wire_shape() {
        let player = Hand::from_ranks(&[Rank::Ace, Rank::King]).unwrap();
        let banker = Hand::from_ranks(&[Rank::Nine, Rank::Two]).unwrap();
        let req = PredictRequest::new(PredictionMode::FormulaOnly, &player, &banker);
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"type": "formula_only", "player_cards": [1, 13], "banker_cards": [9, 2]})
        );
    }

    #[test]
    fn history_payload_accepts_mixed_entries() {
        let resp = ApiResponse::<HistoryPayload>::from_slice(
            br#"{"success": true, "history": ["banker", {"result": "tie", "shoe_id": 1}]}"#,
        )
        .unwrap();
        let history = resp.into_result().unwrap().history;
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].outcome(), Some(Outcome::Tie));
    }
}
