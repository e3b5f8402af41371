//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `flashdeck_core` linkage without a host UI.
//! - Walk a small built-in deck through navigation, filtering, flipping and
//!   shuffling.
//!
//! Set `FLASHDECK_LOG_DIR` to an absolute path to also write core logs.

use flashdeck_core::{load_deck_from_rows, Card, CardRow, DeckError, Direction};
use std::process::ExitCode;

const LOG_DIR_ENV: &str = "FLASHDECK_LOG_DIR";

fn main() -> ExitCode {
    println!("flashdeck_core ping={}", flashdeck_core::ping());
    println!("flashdeck_core version={}", flashdeck_core::core_version());

    if let Some(log_dir) = std::env::var(LOG_DIR_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
    {
        let level = flashdeck_core::default_log_level();
        if let Err(err) = flashdeck_core::init_logging(level, &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    match walk_sample_deck() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("sample deck failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn walk_sample_deck() -> Result<(), DeckError> {
    let mut deck = load_deck_from_rows(sample_rows())?;
    let groups = deck
        .groups()
        .iter()
        .map(|group| group.name.as_str())
        .collect::<Vec<_>>()
        .join(",");
    println!("deck cards={} groups={groups}", deck.len());

    for _ in 0..deck.len() {
        print_card("next", deck.advance(Direction::Forward));
    }

    deck.set_group_enabled("chemistry", false)?;
    println!("filter chemistry=off visible={}", deck.visible_card_count());
    print_card("next", deck.advance(Direction::Forward));
    print_card("prev", deck.advance(Direction::Backward));

    if let (Some(side), Some(card)) = (deck.flip(), deck.current_card()) {
        println!("flip: [{}] {}: {}", card.group(), side.as_str(), card.face(side));
    }

    deck.shuffle();
    if let Some(card) = deck.current_card() {
        print_card("shuffled", card);
    }
    Ok(())
}

fn print_card(label: &str, card: &Card) {
    println!("{label}: [{}] {}", card.group(), card.front());
}

fn sample_rows() -> Vec<CardRow> {
    vec![
        CardRow::new("Chemical symbol for gold?", "Au", "chemistry"),
        CardRow::new("Capital of Australia?", "Canberra", "geography"),
        CardRow::new("Atomic number of carbon?", "6", "chemistry"),
        CardRow::new("Longest river in Africa?", "Nile", "geography"),
        CardRow::new("7 x 8?", "56", "arithmetic"),
    ]
}
