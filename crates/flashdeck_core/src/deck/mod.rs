//! Deck navigation and group filtering.
//!
//! # Responsibility
//! - Own loaded cards behind a wraparound, shuffle-aware cursor.
//! - Gate navigation on per-group visibility.
//! - Build controllers from caller-supplied cards or rows.
//!
//! # Invariants
//! - A deck is never empty.
//! - At least one group is enabled at all times.
//! - Card and group membership are fixed after load.

use crate::model::card::{Card, CardKey, CardRow};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod controller;
pub mod cursor;
pub mod groups;

pub use controller::DeckController;
pub use cursor::Cursor;
pub use groups::{GroupSet, GroupState};

pub type DeckResult<T> = Result<T, DeckError>;

/// Navigation direction requested by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

/// Errors for deck construction and group updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    /// Deck construction received zero cards.
    EmptyDeck,
    /// Group name is not part of the loaded deck.
    UnknownGroup(String),
    /// Two loaded cards share one stable key.
    DuplicateCardKey(CardKey),
}

impl Display for DeckError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDeck => write!(f, "deck must contain at least one card"),
            Self::UnknownGroup(name) => write!(f, "group not found: {name}"),
            Self::DuplicateCardKey(key) => write!(f, "card key loaded twice: {key}"),
        }
    }
}

impl Error for DeckError {}

/// Builds a controller from an ordered card sequence.
///
/// Groups are registered in first-seen order, all enabled.
///
/// # Errors
/// - Returns `DeckError::EmptyDeck` when `cards` is empty.
/// - Returns `DeckError::DuplicateCardKey` when a card appears twice.
pub fn load_deck(cards: Vec<Card>) -> DeckResult<DeckController> {
    let controller = DeckController::new(Cursor::new(cards)?);
    info!(
        "event=deck_load module=deck status=ok cards={} groups={}",
        controller.len(),
        controller.groups().len()
    );
    Ok(controller)
}

/// Builds a controller from raw loader rows.
///
/// Rows with an absent or empty group cell are skipped; they belong to no
/// group and can never be shown.
///
/// # Errors
/// - Returns `DeckError::EmptyDeck` when no grouped row remains.
pub fn load_deck_from_rows(rows: impl IntoIterator<Item = CardRow>) -> DeckResult<DeckController> {
    let mut skipped = 0usize;
    let cards = rows
        .into_iter()
        .filter_map(|row| {
            let card = row.into_card();
            if card.is_none() {
                skipped += 1;
            }
            card
        })
        .collect::<Vec<_>>();
    if skipped > 0 {
        warn!(
            "event=deck_load module=deck status=partial skipped_rows={} reason=missing_group",
            skipped
        );
    }
    load_deck(cards)
}
