//! Flashcard domain model.
//!
//! # Responsibility
//! - Define canonical card data used by deck navigation.
//! - Keep rendering concerns (widgets, HTML) out of core data.
//!
//! # Invariants
//! - Every loaded card is identified by a stable `CardKey`.
//! - Cards are immutable once constructed.

pub mod card;
