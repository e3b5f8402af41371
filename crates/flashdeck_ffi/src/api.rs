//! FFI use-case API for host rendering layers.
//!
//! # Responsibility
//! - Expose deck navigation, filtering, flipping and shuffling as sync calls.
//! - Hold the one deck session driven by host UI events.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Calls are serialized through the session lock.
//! - Calls before `deck_load` return `ok = false` envelopes.

use flashdeck_core::{
    core_version as core_version_inner, init_logging as init_logging_inner,
    load_deck_from_rows, ping as ping_inner, Card, CardRow, CardSide, DeckController, Direction,
};
use log::warn;
use std::sync::{Mutex, MutexGuard};

const NO_DECK_MESSAGE: &str = "No deck loaded.";

static SESSION: Mutex<Option<DeckController>> = Mutex::new(None);

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Sync call; may create the log directory.
/// - Idempotent for the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Navigation request from prev/next controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckNavDirection {
    Forward,
    Backward,
}

impl From<DeckNavDirection> for Direction {
    fn from(value: DeckNavDirection) -> Self {
        match value {
            DeckNavDirection::Forward => Direction::Forward,
            DeckNavDirection::Backward => Direction::Backward,
        }
    }
}

/// One row supplied by the host's table loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckRowInput {
    pub front: String,
    pub back: String,
    pub group: Option<String>,
    pub id: Option<i64>,
}

/// Displayed card as seen by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckCardItem {
    /// Stable card key in string form.
    pub card_key: String,
    /// Caller-supplied card id.
    pub card_id: i64,
    pub group: String,
    /// `Front` or `Back`.
    pub side: String,
    /// Text of the displayed face.
    pub text: String,
}

/// Response envelope for calls that produce a displayed card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckCardResponse {
    pub ok: bool,
    pub card: Option<DeckCardItem>,
    pub message: String,
}

impl DeckCardResponse {
    fn success(message: impl Into<String>, card: DeckCardItem) -> Self {
        Self {
            ok: true,
            card: Some(card),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            card: None,
            message: message.into(),
        }
    }
}

/// Group checkbox state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckGroupItem {
    pub name: String,
    pub enabled: bool,
}

/// Response envelope for group listing and toggling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckGroupsResponse {
    pub ok: bool,
    pub items: Vec<DeckGroupItem>,
    pub message: String,
}

impl DeckGroupsResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            items: Vec::new(),
            message: message.into(),
        }
    }
}

/// Loads rows as the active deck and displays its first card.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Replaces any previous session; cursor, groups and sides reset.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn deck_load(rows: Vec<DeckRowInput>) -> DeckCardResponse {
    load_rows(rows.into_iter().map(to_card_row).collect())
}

/// Loads rows from a JSON array of `{front, back, group?, id?}` objects.
///
/// # FFI contract
/// - Same semantics as `deck_load`.
/// - Malformed JSON returns `ok = false` and keeps the previous session.
#[flutter_rust_bridge::frb(sync)]
pub fn deck_load_json(json: String) -> DeckCardResponse {
    match serde_json::from_str::<Vec<CardRow>>(json.as_str()) {
        Ok(rows) => load_rows(rows),
        Err(err) => DeckCardResponse::failure(format!("deck_load_json failed: {err}")),
    }
}

/// Returns the displayed card without moving.
#[flutter_rust_bridge::frb(sync)]
pub fn deck_current() -> DeckCardResponse {
    with_deck_card(|deck| displayed_item(deck))
}

/// Moves to the next or previous card of an enabled group.
#[flutter_rust_bridge::frb(sync)]
pub fn deck_navigate(direction: DeckNavDirection) -> DeckCardResponse {
    with_deck_card(|deck| {
        deck.advance(direction.into());
        displayed_item(deck)
    })
}

/// Flips the displayed card between front and back.
#[flutter_rust_bridge::frb(sync)]
pub fn deck_flip() -> DeckCardResponse {
    with_deck_card(|deck| {
        deck.flip()?;
        displayed_item(deck)
    })
}

/// Shuffles deck order; the displayed card stays the same.
#[flutter_rust_bridge::frb(sync)]
pub fn deck_shuffle() -> DeckCardResponse {
    with_deck_card(|deck| {
        deck.shuffle();
        displayed_item(deck)
    })
}

/// Lists groups in first-seen order.
#[flutter_rust_bridge::frb(sync)]
pub fn deck_groups() -> DeckGroupsResponse {
    let session = lock_session();
    match session.as_ref() {
        Some(deck) => DeckGroupsResponse {
            ok: true,
            items: to_group_items(deck),
            message: format!("{} group(s).", deck.groups().len()),
        },
        None => DeckGroupsResponse::failure(NO_DECK_MESSAGE),
    }
}

/// Enables or disables one group.
///
/// # FFI contract
/// - Disabling the last enabled group is undone; `items` reflects the
///   effective state so the host can re-check its checkbox.
/// - Unknown group names return `ok = false`.
#[flutter_rust_bridge::frb(sync)]
pub fn deck_set_group_enabled(group: String, enabled: bool) -> DeckGroupsResponse {
    let mut session = lock_session();
    let Some(deck) = session.as_mut() else {
        return DeckGroupsResponse::failure(NO_DECK_MESSAGE);
    };

    match deck.set_group_enabled(group.as_str(), enabled) {
        Ok(effective) => {
            let message = if effective == enabled {
                format!("Group `{group}` updated.")
            } else {
                format!("Group `{group}` is the last enabled group and stays enabled.")
            };
            DeckGroupsResponse {
                ok: true,
                items: to_group_items(deck),
                message,
            }
        }
        Err(err) => DeckGroupsResponse::failure(format!("deck_set_group_enabled failed: {err}")),
    }
}

fn load_rows(rows: Vec<CardRow>) -> DeckCardResponse {
    let mut deck = match load_deck_from_rows(rows) {
        Ok(deck) => deck,
        Err(err) => return DeckCardResponse::failure(format!("deck_load failed: {err}")),
    };
    deck.advance(Direction::Forward);
    let first = displayed_item(&deck);
    let message = format!("Loaded {} card(s).", deck.len());

    let mut session = lock_session();
    *session = Some(deck);
    match first {
        Some(card) => DeckCardResponse::success(message, card),
        None => DeckCardResponse::failure("deck_load failed: no card displayed"),
    }
}

fn with_deck_card(
    f: impl FnOnce(&mut DeckController) -> Option<DeckCardItem>,
) -> DeckCardResponse {
    let mut session = lock_session();
    let Some(deck) = session.as_mut() else {
        return DeckCardResponse::failure(NO_DECK_MESSAGE);
    };
    match f(deck) {
        Some(card) => DeckCardResponse::success("OK", card),
        None => DeckCardResponse::failure("No card displayed."),
    }
}

fn lock_session() -> MutexGuard<'static, Option<DeckController>> {
    SESSION.lock().unwrap_or_else(|poisoned| {
        warn!("event=session_lock module=ffi status=recovered reason=poisoned");
        poisoned.into_inner()
    })
}

fn to_card_row(input: DeckRowInput) -> CardRow {
    CardRow {
        front: input.front,
        back: input.back,
        group: input.group,
        id: input.id,
    }
}

fn displayed_item(deck: &DeckController) -> Option<DeckCardItem> {
    let card = deck.current_card()?;
    let side = deck.current_side()?;
    Some(to_card_item(card, side))
}

fn to_card_item(card: &Card, side: CardSide) -> DeckCardItem {
    DeckCardItem {
        card_key: card.key().to_string(),
        card_id: card.id(),
        group: card.group().to_string(),
        side: side.as_str().to_string(),
        text: card.face(side).to_string(),
    }
}

fn to_group_items(deck: &DeckController) -> Vec<DeckGroupItem> {
    deck.groups()
        .iter()
        .map(|group| DeckGroupItem {
            name: group.name.clone(),
            enabled: group.enabled,
        })
        .collect()
}
