//! Core flashcard deck logic for flashdeck.
//! This crate is the single source of truth for navigation and filtering
//! invariants; rendering layers only call into it.

pub mod deck;
pub mod logging;
pub mod model;

pub use deck::{
    load_deck, load_deck_from_rows, Cursor, DeckController, DeckError, DeckResult, Direction,
    GroupSet, GroupState,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::card::{Card, CardKey, CardRow, CardSide, CardValidationError, DEFAULT_CARD_ID};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
