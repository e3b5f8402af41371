//! Card domain model.
//!
//! # Responsibility
//! - Define the immutable question/answer record shown to users.
//! - Define the row shape handed in by external row loaders.
//!
//! # Invariants
//! - `key` is stable and never reused for another card.
//! - Card fields never change after construction.
//! - Group membership is fixed at creation.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identity for one loaded card.
///
/// Distinct from the caller-supplied `id`, which is opaque and may repeat.
pub type CardKey = Uuid;

/// Id assigned when a row carries none.
pub const DEFAULT_CARD_ID: i64 = 0;

/// Validation errors for card construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardValidationError {
    /// Caller-provided key is the nil UUID.
    NilKey,
}

impl Display for CardValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilKey => write!(f, "card key must not be nil"),
        }
    }
}

impl Error for CardValidationError {}

/// Which face of a card is displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardSide {
    #[default]
    Front,
    Back,
}

impl CardSide {
    /// Returns the opposite face.
    pub fn flipped(self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Back => Self::Front,
        }
    }

    /// Stable label used by host renderers.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Front => "Front",
            Self::Back => "Back",
        }
    }
}

/// One question/answer pair with its group tag.
///
/// Serialize-only; cards are built through [`Card::new`], [`Card::with_key`]
/// or [`CardRow::into_card`] so key validation cannot be bypassed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    key: CardKey,
    id: i64,
    front: String,
    back: String,
    group: String,
}

impl Card {
    /// Creates a card with a generated stable key.
    pub fn new(
        front: impl Into<String>,
        back: impl Into<String>,
        id: i64,
        group: impl Into<String>,
    ) -> Self {
        Self {
            key: Uuid::new_v4(),
            id,
            front: front.into(),
            back: back.into(),
            group: group.into(),
        }
    }

    /// Creates a card with a caller-provided stable key.
    ///
    /// # Errors
    /// - Returns `CardValidationError::NilKey` for `Uuid::nil()`.
    pub fn with_key(
        key: CardKey,
        front: impl Into<String>,
        back: impl Into<String>,
        id: i64,
        group: impl Into<String>,
    ) -> Result<Self, CardValidationError> {
        if key.is_nil() {
            return Err(CardValidationError::NilKey);
        }
        Ok(Self {
            key,
            id,
            front: front.into(),
            back: back.into(),
            group: group.into(),
        })
    }

    pub fn key(&self) -> CardKey {
        self.key
    }

    /// Opaque caller-supplied id.
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn front(&self) -> &str {
        &self.front
    }

    pub fn back(&self) -> &str {
        &self.back
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    /// Returns the text printed on `side`.
    pub fn face(&self, side: CardSide) -> &str {
        match side {
            CardSide::Front => &self.front,
            CardSide::Back => &self.back,
        }
    }
}

/// Raw tabular row produced by an external loader.
///
/// `group` and `id` are optional in source data; see [`CardRow::into_card`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRow {
    pub front: String,
    pub back: String,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub id: Option<i64>,
}

impl CardRow {
    pub fn new(
        front: impl Into<String>,
        back: impl Into<String>,
        group: impl Into<String>,
    ) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
            group: Some(group.into()),
            id: None,
        }
    }

    /// Converts this row into a card.
    ///
    /// Rows whose group is absent or empty yield `None`; a whitespace-only
    /// group is kept as-is. A missing id becomes [`DEFAULT_CARD_ID`].
    pub fn into_card(self) -> Option<Card> {
        let group = self.group.filter(|group| !group.is_empty())?;
        Some(Card::new(
            self.front,
            self.back,
            self.id.unwrap_or(DEFAULT_CARD_ID),
            group,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::{Card, CardRow, CardSide, CardValidationError, DEFAULT_CARD_ID};
    use uuid::Uuid;

    #[test]
    fn new_card_gets_unique_keys() {
        let first = Card::new("q", "a", 0, "g");
        let second = Card::new("q", "a", 0, "g");
        assert!(!first.key().is_nil());
        assert_ne!(first.key(), second.key());
    }

    #[test]
    fn with_key_rejects_nil_key() {
        let err = Card::with_key(Uuid::nil(), "q", "a", 1, "g").unwrap_err();
        assert_eq!(err, CardValidationError::NilKey);
    }

    #[test]
    fn face_matches_side() {
        let card = Card::new("front text", "back text", 3, "g");
        assert_eq!(card.face(CardSide::Front), "front text");
        assert_eq!(card.face(CardSide::Back), "back text");
        assert_eq!(CardSide::Front.flipped(), CardSide::Back);
        assert_eq!(CardSide::default(), CardSide::Front);
    }

    #[test]
    fn row_without_group_yields_no_card() {
        let missing = CardRow {
            front: "q".to_string(),
            back: "a".to_string(),
            group: None,
            id: None,
        };
        assert!(missing.into_card().is_none());

        let empty = CardRow::new("q", "a", "");
        assert!(empty.into_card().is_none());
    }

    #[test]
    fn row_defaults_missing_id() {
        let card = CardRow::new("q", "a", "g").into_card().unwrap();
        assert_eq!(card.group(), "g");
        assert_eq!(card.id(), DEFAULT_CARD_ID);
    }

    #[test]
    fn whitespace_group_is_kept() {
        let row = CardRow {
            front: " ".to_string(),
            back: String::new(),
            group: Some(" ".to_string()),
            id: Some(7),
        };
        let card = row.into_card().unwrap();
        assert_eq!(card.group(), " ");
        assert_eq!(card.id(), 7);
    }
}
