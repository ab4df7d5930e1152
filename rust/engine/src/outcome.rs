use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::cards::Rank;

/// Result of one completed baccarat round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Banker,
    Player,
    Tie,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Banker => "banker",
            Outcome::Player => "player",
            Outcome::Tie => "tie",
        }
    }

    /// Single-letter road map symbol.
    pub fn symbol(&self) -> char {
        match self {
            Outcome::Banker => 'B',
            Outcome::Player => 'P',
            Outcome::Tie => 'T',
        }
    }

    pub fn from_label(label: &str) -> Option<Outcome> {
        match label {
            "banker" => Some(Outcome::Banker),
            "player" => Some(Outcome::Player),
            "tie" => Some(Outcome::Tie),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Outcome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Outcome::from_label(&s.trim().to_ascii_lowercase())
            .ok_or_else(|| format!("unknown outcome: {s:?}"))
    }
}

/// Stored round as kept by the backend history file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub result: String,
    #[serde(
        default,
        deserialize_with = "lenient_ranks",
        skip_serializing_if = "Option::is_none"
    )]
    pub player_cards: Option<Vec<Rank>>,
    #[serde(
        default,
        deserialize_with = "lenient_ranks",
        skip_serializing_if = "Option::is_none"
    )]
    pub banker_cards: Option<Vec<Rank>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shoe_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,
}

// The backend stores card lists unchecked; a bad card must not cost the
// record its result, so unreadable ranks are dropped.
fn lenient_ranks<'de, D>(deserializer: D) -> Result<Option<Vec<Rank>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<serde_json::Value>> = Option::deserialize(deserializer)?;
    Ok(raw.map(|values| {
        values
            .into_iter()
            .filter_map(|v| serde_json::from_value::<Rank>(v).ok())
            .collect()
    }))
}

/// One element of the history list returned by the backend. Older history
/// files hold bare labels, newer ones hold full round records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HistoryEntry {
    Label(String),
    Record(RoundRecord),
    // Anything else is kept so a single odd entry cannot fail the whole list.
    Other(serde_json::Value),
}

impl HistoryEntry {
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            HistoryEntry::Label(label) => Outcome::from_label(label),
            HistoryEntry::Record(record) => Outcome::from_label(&record.result),
            HistoryEntry::Other(value) => value
                .get("result")
                .and_then(serde_json::Value::as_str)
                .and_then(Outcome::from_label),
        }
    }
}

impl From<Outcome> for HistoryEntry {
    fn from(outcome: Outcome) -> Self {
        HistoryEntry::Label(outcome.as_str().to_string())
    }
}

/// Content of one road map cell.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Mark(Outcome),
    /// Slot taken by a round whose result was not recognised.
    Neutral,
}

impl Cell {
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Cell::Mark(o) => Some(*o),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<Outcome> for Cell {
    fn from(outcome: Outcome) -> Self {
        Cell::Mark(outcome)
    }
}

impl From<Option<Outcome>> for Cell {
    fn from(outcome: Option<Outcome>) -> Self {
        outcome.map_or(Cell::Neutral, Cell::Mark)
    }
}

impl From<&HistoryEntry> for Cell {
    fn from(entry: &HistoryEntry) -> Self {
        Cell::from(entry.outcome())
    }
}

impl From<HistoryEntry> for Cell {
    fn from(entry: HistoryEntry) -> Self {
        Cell::from(&entry)
    }
}
