use flashdeck_core::{load_deck, Card, DeckController, DeckError, Direction};

fn sample_deck() -> DeckController {
    load_deck(vec![
        Card::new("A", "a", 0, "X"),
        Card::new("B", "b", 0, "Y"),
        Card::new("C", "c", 0, "X"),
    ])
    .unwrap()
}

fn fronts(deck: &mut DeckController, direction: Direction, steps: usize) -> Vec<String> {
    (0..steps)
        .map(|_| deck.advance(direction).front().to_string())
        .collect()
}

#[test]
fn forward_visits_cards_in_order_and_wraps() {
    let mut deck = sample_deck();
    assert!(deck.current_card().is_none());
    assert_eq!(fronts(&mut deck, Direction::Forward, 4), ["A", "B", "C", "A"]);
}

#[test]
fn disabled_group_is_skipped_forward() {
    let mut deck = sample_deck();
    assert_eq!(deck.advance(Direction::Forward).front(), "A");

    assert!(!deck.set_group_enabled("Y", false).unwrap());
    assert_eq!(fronts(&mut deck, Direction::Forward, 2), ["C", "A"]);
}

#[test]
fn disabling_every_group_keeps_last_one_enabled() {
    let mut deck = sample_deck();
    assert!(!deck.set_group_enabled("X", false).unwrap());
    assert!(deck.set_group_enabled("Y", false).unwrap());

    assert!(deck.is_group_enabled("Y"));
    assert!(!deck.is_group_enabled("X"));
    assert_eq!(fronts(&mut deck, Direction::Forward, 2), ["B", "B"]);
}

#[test]
fn unknown_group_is_reported() {
    let mut deck = sample_deck();
    let err = deck.set_group_enabled("Z", false).unwrap_err();
    assert_eq!(err, DeckError::UnknownGroup("Z".to_string()));
}

#[test]
fn groups_are_listed_in_first_seen_order() {
    let deck = load_deck(vec![
        Card::new("1", "1", 0, "physics"),
        Card::new("2", "2", 0, "biology"),
        Card::new("3", "3", 0, "physics"),
        Card::new("4", "4", 0, "art"),
    ])
    .unwrap();
    let names = deck
        .groups()
        .iter()
        .map(|group| group.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, ["physics", "biology", "art"]);
}

#[test]
fn next_len_times_returns_to_first_card() {
    for len in 1..=7 {
        let cards = (0..len)
            .map(|index| Card::new(format!("q{index}"), "a", index, "g"))
            .collect::<Vec<_>>();
        let mut deck = load_deck(cards).unwrap();
        let first = deck.advance(Direction::Forward).key();
        for _ in 1..len {
            deck.advance(Direction::Forward);
        }
        assert_eq!(deck.advance(Direction::Forward).key(), first, "len={len}");
    }
}

#[test]
fn forward_then_backward_is_inverse() {
    let mut deck = sample_deck();
    deck.advance(Direction::Forward);
    for _ in 0..5 {
        let before = deck.current_card().unwrap().key();
        deck.advance(Direction::Forward);
        assert_eq!(deck.advance(Direction::Backward).key(), before);

        deck.advance(Direction::Backward);
        assert_eq!(deck.advance(Direction::Forward).key(), before);
        deck.advance(Direction::Forward);
    }
}

#[test]
fn advance_never_lands_on_disabled_group() {
    let groups = ["red", "green", "blue"];
    let cards = (0..12)
        .map(|index| Card::new(format!("q{index}"), "a", index, groups[index as usize % 3]))
        .collect::<Vec<_>>();
    let mut deck = load_deck(cards).unwrap();

    let toggles = [("red", false), ("blue", false), ("green", false), ("red", true)];
    for (group, enabled) in toggles {
        deck.set_group_enabled(group, enabled).unwrap();
        for direction in [Direction::Forward, Direction::Backward] {
            for _ in 0..15 {
                let card_group = deck.advance(direction).group().to_string();
                assert!(deck.is_group_enabled(&card_group), "landed on {card_group}");
            }
        }
    }
}
