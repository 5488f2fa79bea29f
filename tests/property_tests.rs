//! Property tests for dealing, transitions and snapshots.
//!
//! Properties tested:
//! - Every dealt board holds each of its faces exactly twice
//! - Same pair count and seed deal the same board
//! - Arbitrary flip sequences never break a board invariant
//! - Flips on settled cards are no-ops
//! - Snapshots survive a JSON round trip unchanged

use proptest::prelude::*;

use memory_engine::{
    build_initial_state, flip_card, reset_error_cards, shuffle_remaining_cards, CardId,
    DifficultyType, GameMode, GameSnapshot, MemoryGameState, Mutator, ScoringConfig, MAX_PAIRS,
};

fn mode() -> impl Strategy<Value = GameMode> {
    prop_oneof![
        Just(GameMode::Standard),
        Just(GameMode::TimeAttack),
        Just(GameMode::DailyChallenge),
        Just(GameMode::HighRoller),
    ]
}

fn deal(pairs: u32, mode: GameMode, seed: u64) -> MemoryGameState {
    build_initial_state(pairs, ScoringConfig::default(), mode, DifficultyType::Casual, Some(seed))
        .unwrap()
        .with_mutators([Mutator::Mirage])
}

/// Play `flips`, resetting errors whenever `resets` says so.
fn play(mut state: MemoryGameState, flips: &[(u32, bool)]) -> Vec<MemoryGameState> {
    let mut history = vec![state.clone()];
    for &(raw, reset) in flips {
        let card = CardId::new(raw % (2 * state.pair_count + 2));
        let (next, _) = flip_card(&state, card);
        state = if reset { reset_error_cards(&next) } else { next };
        history.push(state.clone());
    }
    history
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_deal_is_well_formed(pairs in 1..=MAX_PAIRS, seed in any::<u64>()) {
        let state = deal(pairs, GameMode::Standard, seed);

        prop_assert_eq!(state.cards.len(), 2 * pairs as usize);
        prop_assert!(state.cards.iter().all(|c| !c.is_face_up && !c.is_matched));
        prop_assert!(state.validate().is_ok());
    }

    #[test]
    fn prop_deal_is_deterministic(pairs in 1..=MAX_PAIRS, seed in any::<u64>()) {
        prop_assert_eq!(
            deal(pairs, GameMode::Standard, seed).cards,
            deal(pairs, GameMode::Standard, seed).cards
        );
    }

    #[test]
    fn prop_flips_keep_invariants(
        pairs in 1u32..=8,
        mode in mode(),
        seed in any::<u64>(),
        flips in prop::collection::vec((any::<u32>(), any::<bool>()), 0..80),
    ) {
        let history = play(deal(pairs, mode, seed), &flips);

        for window in history.windows(2) {
            let (before, after) = (&window[0], &window[1]);
            prop_assert!(after.validate().is_ok(), "{:?}", after.validate());
            prop_assert!(after.moves >= before.moves);
            prop_assert!(after.pending_cards().count() <= 2);
            if before.is_game_over {
                prop_assert_eq!(before.moves, after.moves);
                prop_assert_eq!(before.score, after.score);
                prop_assert!(after.is_game_over);
            }
        }
    }

    #[test]
    fn prop_settled_cards_ignore_flips(
        pairs in 2u32..=8,
        seed in any::<u64>(),
        flips in prop::collection::vec((any::<u32>(), any::<bool>()), 0..40),
    ) {
        let history = play(deal(pairs, GameMode::Standard, seed), &flips);
        let state = history.last().unwrap();

        for card in state.cards.iter().filter(|c| c.is_face_up) {
            let (same, event) = flip_card(state, card.id);
            prop_assert!(event.is_none());
            prop_assert_eq!(&same, state);
        }
    }

    #[test]
    fn prop_shuffle_keeps_invariants(
        pairs in 2u32..=8,
        seed in any::<u64>(),
        flips in prop::collection::vec((any::<u32>(), any::<bool>()), 0..40),
    ) {
        let history = play(deal(pairs, GameMode::DailyChallenge, seed), &flips);
        let state = history.last().unwrap();
        let shuffled = shuffle_remaining_cards(state);

        prop_assert!(shuffled.validate().is_ok());
        prop_assert_eq!(
            shuffled.cards.iter().filter(|c| c.is_matched).count(),
            state.cards.iter().filter(|c| c.is_matched).count()
        );
        prop_assert_eq!(shuffled.pending_cards().count(), 0);
    }

    #[test]
    fn prop_snapshot_json_round_trip(
        pairs in 1u32..=8,
        mode in mode(),
        seed in any::<u64>(),
        elapsed in any::<u32>(),
        flips in prop::collection::vec((any::<u32>(), any::<bool>()), 0..40),
    ) {
        let history = play(deal(pairs, mode, seed), &flips);
        let snapshot = GameSnapshot::new(history.last().unwrap().clone(), u64::from(elapsed));

        let json = snapshot.to_json().unwrap();
        prop_assert_eq!(GameSnapshot::from_json(&json).unwrap(), snapshot);
    }
}
