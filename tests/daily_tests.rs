//! Daily Challenge tests.
//!
//! Mirage reshuffles and the dated board of the day.

use std::time::Duration;

use memory_engine::daily::{peek_duration, should_shuffle, MIRAGE_INTERVAL};
use memory_engine::{
    build_initial_state, flip_card, reset_error_cards, shuffle_remaining_cards, CardId,
    DailyChallenge, DifficultyType, GameMode, MemoryGameState, Mutator, ScoringConfig,
};

fn mirage_board() -> MemoryGameState {
    build_initial_state(
        6,
        ScoringConfig::default(),
        GameMode::DailyChallenge,
        DifficultyType::Casual,
        Some(31),
    )
    .unwrap()
    .with_mutators([Mutator::Mirage])
}

fn first_pair(state: &MemoryGameState) -> (CardId, CardId) {
    let card = state.cards.iter().find(|c| !c.is_matched).unwrap();
    let partner = state
        .cards
        .iter()
        .find(|c| c.id != card.id && c.pairs_with(card))
        .unwrap();
    (card.id, partner.id)
}

fn miss(state: &MemoryGameState) -> MemoryGameState {
    let open: Vec<_> = state.cards.iter().filter(|c| !c.is_matched).collect();
    let second = open.iter().find(|c| !c.pairs_with(open[0])).unwrap();
    let (state, _) = flip_card(state, open[0].id);
    let (state, _) = flip_card(&state, second.id);
    reset_error_cards(&state)
}

#[test]
fn test_mirage_fires_after_five_misses() {
    let mut state = mirage_board();
    for _ in 0..MIRAGE_INTERVAL - 1 {
        state = miss(&state);
        assert!(!should_shuffle(&state, MIRAGE_INTERVAL));
    }
    state = miss(&state);
    assert_eq!(state.moves_since_last_match, 5);
    assert!(should_shuffle(&state, MIRAGE_INTERVAL));

    let shuffled = shuffle_remaining_cards(&state);
    assert_eq!(shuffled.moves_since_last_match, 0);
    assert!(!should_shuffle(&shuffled, MIRAGE_INTERVAL));
}

#[test]
fn test_mirage_needs_the_mutator() {
    let mut state = build_initial_state(
        6,
        ScoringConfig::default(),
        GameMode::DailyChallenge,
        DifficultyType::Casual,
        Some(31),
    )
    .unwrap()
    .with_mutators([Mutator::Blackout]);
    for _ in 0..MIRAGE_INTERVAL {
        state = miss(&state);
    }
    assert!(!should_shuffle(&state, MIRAGE_INTERVAL));
}

#[test]
fn test_shuffle_keeps_matched_cards_in_front() {
    let state = mirage_board();
    let (a, b) = first_pair(&state);
    let (state, _) = flip_card(&state, a);
    let (state, _) = flip_card(&state, b);
    let matched_face = state.card(a).map(|c| (c.suit, c.rank)).unwrap();

    // Leave one card face up to see it hidden by the shuffle
    let loose = state.cards.iter().find(|c| !c.is_matched).unwrap().id;
    let (state, _) = flip_card(&state, loose);

    let shuffled = shuffle_remaining_cards(&state);

    assert!(shuffled.validate().is_ok());
    assert!(shuffled.cards[0].is_matched && shuffled.cards[1].is_matched);
    assert_eq!((shuffled.cards[0].suit, shuffled.cards[0].rank), matched_face);
    assert!(shuffled.cards.iter().skip(2).all(|c| !c.is_face_up && !c.is_error && !c.is_matched));
    assert_eq!(shuffled.last_matched_ids.as_slice(), &[CardId::new(0), CardId::new(1)]);
    for (position, card) in shuffled.cards.iter().enumerate() {
        assert_eq!(card.id, CardId::new(position as u32));
    }
}

#[test]
fn test_shuffle_is_reproducible_and_advances() {
    let state = mirage_board();

    let once = shuffle_remaining_cards(&state);
    assert_eq!(once, shuffle_remaining_cards(&state));

    let twice = shuffle_remaining_cards(&once);
    assert_ne!(once.rng, twice.rng);
    assert_ne!(once.cards, twice.cards);
}

#[test]
fn test_board_of_the_day() {
    let challenge = DailyChallenge::for_date(2026, 10, 16).unwrap();
    let state = challenge
        .build_state(ScoringConfig::default(), DifficultyType::Master)
        .unwrap();

    assert_eq!(state.mode, GameMode::DailyChallenge);
    assert_eq!(state.pair_count, DifficultyType::Master.default_pair_count());
    assert_eq!(state.seed, challenge.seed);
    assert_eq!(state.active_mutators, challenge.mutators);

    let expected = if challenge.mutators.contains(&Mutator::Blackout) {
        Duration::from_secs(1)
    } else {
        Duration::from_secs(2)
    };
    assert_eq!(peek_duration(Duration::from_secs(2), &state.active_mutators), expected);
}
