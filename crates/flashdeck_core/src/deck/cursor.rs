//! Bidirectional wraparound cursor over loaded cards.
//!
//! # Invariants
//! - Backing storage is never empty.
//! - Card keys are unique within one cursor.
//! - `order` is always a permutation of `0..cards.len()`.
//! - After any step, the position is in `0..len`.
//! - Shuffling never changes which card is current.

use super::{DeckError, DeckResult, Direction};
use crate::model::card::Card;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Positional pointer into an ordered card sequence.
///
/// Cards stay in their load slots; `order` maps deck positions to slots, so a
/// shuffle only permutes indices and `&Card` identity survives it.
#[derive(Debug, Clone)]
pub struct Cursor {
    cards: Vec<Card>,
    order: Vec<usize>,
    position: Option<usize>,
}

impl Cursor {
    /// Creates an unpositioned cursor in load order.
    ///
    /// # Errors
    /// - Returns `DeckError::EmptyDeck` when `cards` is empty.
    /// - Returns `DeckError::DuplicateCardKey` when two cards share a key.
    pub fn new(cards: Vec<Card>) -> DeckResult<Self> {
        if cards.is_empty() {
            return Err(DeckError::EmptyDeck);
        }
        let mut seen = HashSet::with_capacity(cards.len());
        if let Some(card) = cards.iter().find(|card| !seen.insert(card.key())) {
            return Err(DeckError::DuplicateCardKey(card.key()));
        }
        let order = (0..cards.len()).collect();
        Ok(Self {
            cards,
            order,
            position: None,
        })
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Always `false`; construction rejects empty decks.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Current position, `None` until the first step.
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// Returns the current card, `None` until the first step.
    pub fn current(&self) -> Option<&Card> {
        self.position.map(|position| self.card_at(position))
    }

    /// Advances one position, wrapping from the last card to the first.
    pub fn next(&mut self) -> &Card {
        let position = self.step_position(Direction::Forward);
        self.card_at(position)
    }

    /// Moves back one position, wrapping from the first card to the last.
    pub fn prev(&mut self) -> &Card {
        let position = self.step_position(Direction::Backward);
        self.card_at(position)
    }

    pub fn step(&mut self, direction: Direction) -> &Card {
        let position = self.step_position(direction);
        self.card_at(position)
    }

    /// Iterates cards in current deck order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.order.iter().map(|slot| &self.cards[*slot])
    }

    /// Shuffles deck order with the thread-local RNG.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::thread_rng());
    }

    /// Shuffles deck order with a caller RNG and keeps the current card.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let current_slot = self.position.map(|position| self.order[position]);
        self.order.shuffle(rng);
        if let Some(slot) = current_slot {
            self.position = self.order.iter().position(|candidate| *candidate == slot);
        }
        debug!(
            "event=deck_shuffle module=deck status=ok cards={} position={:?}",
            self.order.len(),
            self.position
        );
    }

    pub(crate) fn step_position(&mut self, direction: Direction) -> usize {
        let len = self.order.len();
        let next = match (direction, self.position) {
            (Direction::Forward, None) => 0,
            (Direction::Forward, Some(position)) => (position + 1) % len,
            (Direction::Backward, None) | (Direction::Backward, Some(0)) => len - 1,
            (Direction::Backward, Some(position)) => position - 1,
        };
        self.position = Some(next);
        next
    }

    pub(crate) fn card_at(&self, position: usize) -> &Card {
        &self.cards[self.order[position]]
    }
}
