//! Card selections as entered on a page: three optional slots per side.

use baccaroad_engine::cards::{Rank, Side};
use baccaroad_engine::errors::CardError;
use baccaroad_engine::hand::{Hand, MAX_HAND_CARDS};

pub type Slots = [Option<Rank>; MAX_HAND_CARDS];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardForm {
    player: Slots,
    banker: Slots,
}

impl CardForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read raw select values. Blank values leave a slot empty; more than
    /// three values or an unreadable rank is an error.
    pub fn parse<S: AsRef<str>>(player: &[S], banker: &[S]) -> Result<Self, CardError> {
        Ok(Self {
            player: parse_slots(player)?,
            banker: parse_slots(banker)?,
        })
    }

    pub fn from_hands(player: &Hand, banker: &Hand) -> Self {
        let mut form = Self::new();
        for (slot, rank) in form.player.iter_mut().zip(player.cards()) {
            *slot = Some(*rank);
        }
        for (slot, rank) in form.banker.iter_mut().zip(banker.cards()) {
            *slot = Some(*rank);
        }
        form
    }

    pub fn set(&mut self, side: Side, slot: usize, rank: Option<Rank>) {
        if let Some(s) = self.slots_mut(side).get_mut(slot) {
            *s = rank;
        }
    }

    pub fn slots(&self, side: Side) -> &Slots {
        match side {
            Side::Player => &self.player,
            Side::Banker => &self.banker,
        }
    }

    fn slots_mut(&mut self, side: Side) -> &mut Slots {
        match side {
            Side::Player => &mut self.player,
            Side::Banker => &mut self.banker,
        }
    }

    /// Filled slots in order, gaps dropped.
    pub fn hand(&self, side: Side) -> Hand {
        let ranks: Vec<Rank> = self.slots(side).iter().flatten().copied().collect();
        // At most three slots exist, so this cannot overflow the hand.
        Hand::from_ranks(&ranks).unwrap_or_default()
    }

    pub fn player_hand(&self) -> Hand {
        self.hand(Side::Player)
    }

    pub fn banker_hand(&self) -> Hand {
        self.hand(Side::Banker)
    }

    /// Clear every slot, as after a result has been recorded.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn is_empty(&self) -> bool {
        self.player.iter().chain(&self.banker).all(Option::is_none)
    }
}

fn parse_slots<S: AsRef<str>>(values: &[S]) -> Result<Slots, CardError> {
    if values.len() > MAX_HAND_CARDS {
        return Err(CardError::HandFull {
            max: MAX_HAND_CARDS,
        });
    }
    let mut slots: Slots = [None; MAX_HAND_CARDS];
    for (slot, value) in slots.iter_mut().zip(values) {
        let value = value.as_ref().trim();
        if !value.is_empty() {
            *slot = Some(value.parse()?);
        }
    }
    Ok(slots)
}
