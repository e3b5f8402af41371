//! Group-filtered deck navigation.
//!
//! # Responsibility
//! - Compose a `Cursor` with group visibility so navigation only lands on
//!   cards from enabled groups.
//! - Track which face of each card is displayed.
//!
//! # Invariants
//! - `advance` never returns a card from a disabled group.
//! - Filtering is applied at navigation time only; disabling the displayed
//!   card's group leaves it displayed.
//! - Shuffling keeps the displayed card.

use super::cursor::Cursor;
use super::groups::{GroupSet, GroupState};
use super::{DeckResult, Direction};
use crate::model::card::{Card, CardKey, CardSide};
use log::debug;
use rand::Rng;
use std::collections::HashMap;

/// Navigation and filtering facade used by rendering layers.
#[derive(Debug, Clone)]
pub struct DeckController {
    cursor: Cursor,
    groups: GroupSet,
    sides: HashMap<CardKey, CardSide>,
}

impl DeckController {
    /// Wraps a cursor; groups are derived from its cards, all enabled.
    pub fn new(cursor: Cursor) -> Self {
        let groups = GroupSet::from_names(cursor.cards().map(Card::group));
        Self {
            cursor,
            groups,
            sides: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.cursor.len()
    }

    /// Always `false`; cursors reject empty decks.
    pub fn is_empty(&self) -> bool {
        self.cursor.is_empty()
    }

    /// Returns the displayed card, `None` before the first navigation.
    pub fn current_card(&self) -> Option<&Card> {
        self.cursor.current()
    }

    /// Steps in `direction` until a card from an enabled group is reached.
    ///
    /// Visits each card at most once per call.
    pub fn advance(&mut self, direction: Direction) -> &Card {
        let mut position = self.cursor.step_position(direction);
        for _ in 1..self.cursor.len() {
            if self
                .groups
                .is_enabled(self.cursor.card_at(position).group())
            {
                break;
            }
            position = self.cursor.step_position(direction);
        }
        debug!(
            "event=deck_advance module=deck status=ok direction={:?} position={}",
            direction, position
        );
        self.cursor.card_at(position)
    }

    /// Enables or disables one group and returns its effective state.
    ///
    /// Disabling the last enabled group is silently undone.
    ///
    /// # Errors
    /// - Returns `DeckError::UnknownGroup` for names absent from the deck.
    pub fn set_group_enabled(&mut self, group: &str, enabled: bool) -> DeckResult<bool> {
        let effective = self.groups.set_enabled(group, enabled)?;
        debug!(
            "event=group_toggle module=deck status=ok group={} requested={} enabled={}",
            group, enabled, effective
        );
        Ok(effective)
    }

    pub fn is_group_enabled(&self, group: &str) -> bool {
        self.groups.is_enabled(group)
    }

    /// Groups in first-seen order with their flags.
    pub fn groups(&self) -> &[GroupState] {
        self.groups.as_slice()
    }

    /// Counts cards reachable under the current group filter.
    pub fn visible_card_count(&self) -> usize {
        self.cursor
            .cards()
            .filter(|card| self.groups.is_enabled(card.group()))
            .count()
    }

    pub fn shuffle(&mut self) {
        self.cursor.shuffle();
    }

    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cursor.shuffle_with(rng);
    }

    /// Face shown for the displayed card, `None` before the first navigation.
    pub fn current_side(&self) -> Option<CardSide> {
        self.current_card().map(|card| self.side_of(card.key()))
    }

    /// Flips the displayed card and returns the face now shown.
    pub fn flip(&mut self) -> Option<CardSide> {
        let key = self.current_card()?.key();
        let side = self.sides.entry(key).or_default();
        *side = side.flipped();
        Some(*side)
    }

    fn side_of(&self, key: CardKey) -> CardSide {
        self.sides.get(&key).copied().unwrap_or_default()
    }
}
