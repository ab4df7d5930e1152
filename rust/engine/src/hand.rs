use serde::{Deserialize, Serialize};

use crate::cards::{Rank, Side};
use crate::errors::CardError;

/// Most cards a baccarat hand can hold (two dealt plus one drawn).
pub const MAX_HAND_CARDS: usize = 3;

/// Ordered cards for one side of a round.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Rank>", into = "Vec<Rank>")]
pub struct Hand {
    cards: Vec<Rank>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ranks(ranks: &[Rank]) -> Result<Self, CardError> {
        let mut hand = Hand::new();
        for &r in ranks {
            hand.push(r)?;
        }
        Ok(hand)
    }

    pub fn push(&mut self, rank: Rank) -> Result<(), CardError> {
        if self.cards.len() >= MAX_HAND_CARDS {
            return Err(CardError::HandFull {
                max: MAX_HAND_CARDS,
            });
        }
        self.cards.push(rank);
        Ok(())
    }

    pub fn cards(&self) -> &[Rank] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn point(&self) -> u8 {
        calculate_point(&self.cards)
    }
}

impl TryFrom<Vec<Rank>> for Hand {
    type Error = CardError;

    fn try_from(cards: Vec<Rank>) -> Result<Self, Self::Error> {
        Hand::from_ranks(&cards)
    }
}

impl From<Hand> for Vec<Rank> {
    fn from(hand: Hand) -> Self {
        hand.cards
    }
}

/// Baccarat point total: sum of card values modulo ten. An empty hand is 0.
pub fn calculate_point(cards: &[Rank]) -> u8 {
    let sum: u32 = cards.iter().map(|r| u32::from(r.point_value())).sum();
    (sum % 10) as u8
}

/// Point total for raw form values. Blank or unreadable entries count as
/// missing cards and are skipped.
pub fn points_from_inputs<S: AsRef<str>>(inputs: &[S]) -> u8 {
    let ranks: Vec<Rank> = inputs
        .iter()
        .filter_map(|s| s.as_ref().parse::<Rank>().ok())
        .collect();
    calculate_point(&ranks)
}

impl Side {
    /// Display weight shown next to a side's point total on the formula page.
    /// These are fixed table values, not probabilities.
    pub fn frequency_weight(self, point: u8) -> i8 {
        match self {
            Side::Player => match point {
                7..=9 => 2,
                0 | 1 | 3 | 4 => 1,
                2 | 5 | 6 => -5,
                _ => 0,
            },
            Side::Banker => match point {
                7..=9 => 3,
                0 | 1 | 3 | 4 | 6 => 2,
                2 | 5 => -5,
                _ => 0,
            },
        }
    }
}

pub fn player_frequency(point: u8) -> i8 {
    Side::Player.frequency_weight(point)
}

pub fn banker_frequency(point: u8) -> i8 {
    Side::Banker.frequency_weight(point)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hand_rejects_fourth_card() {
        let mut hand = Hand::from_ranks(&[Rank::Two, Rank::Three, Rank::Four]).unwrap();
        assert_eq!(hand.push(Rank::Five), Err(CardError::HandFull { max: 3 }));
        assert_eq!(hand.len(), 3);
    }

    #[test]
    fn hand_deserialize_enforces_length() {
        let ok: Hand = serde_json::from_str("[1, 13]").unwrap();
        assert_eq!(ok.point(), 1);
        assert!(serde_json::from_str::<Hand>("[1, 2, 3, 4]").is_err());
    }

    #[test]
    fn inputs_skip_blank_and_unreadable_entries() {
        assert_eq!(points_from_inputs(&["", "7", "  "]), 7);
        assert_eq!(points_from_inputs(&["x", "K", "A"]), 1);
        assert_eq!(points_from_inputs::<&str>(&[]), 0);
    }

    #[test]
    fn weight_out_of_range_point_is_zero() {
        assert_eq!(player_frequency(10), 0);
        assert_eq!(banker_frequency(42), 0);
    }
}
