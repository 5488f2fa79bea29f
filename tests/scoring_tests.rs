//! End-of-board scoring tests.

use memory_engine::{
    apply_final_bonuses, build_initial_state, flip_card, reset_error_cards, CardId, DifficultyType,
    EngineError, GameMode, MemoryGameState, ScoringConfig,
};

fn config() -> ScoringConfig {
    ScoringConfig::default()
        .with_base_match_points(100)
        .with_combo_bonus_points(50)
        .with_time_bonus(50, 2)
        .with_move_bonus_multiplier(1000)
}

fn deal(pairs: u32, mode: GameMode, difficulty: DifficultyType) -> MemoryGameState {
    build_initial_state(pairs, config(), mode, difficulty, Some(8)).unwrap()
}

/// Clear the board, missing once before the first match.
fn clear_with_one_miss(mut state: MemoryGameState) -> MemoryGameState {
    let open: Vec<_> = state.cards.iter().collect();
    let stranger = open.iter().find(|c| !c.pairs_with(open[0])).unwrap().id;
    let first = open[0].id;
    let (next, _) = flip_card(&state, first);
    let (next, _) = flip_card(&next, stranger);
    state = reset_error_cards(&next);

    while !state.is_game_won {
        let card = state.cards.iter().find(|c| !c.is_matched).unwrap();
        let partner: CardId = state
            .cards
            .iter()
            .find(|c| c.id != card.id && c.pairs_with(card))
            .unwrap()
            .id;
        let (next, _) = flip_card(&state, card.id);
        let (next, _) = flip_card(&next, partner);
        state = next;
    }
    state
}

#[test]
fn test_standard_final_score() {
    let won = clear_with_one_miss(deal(4, GameMode::Standard, DifficultyType::Casual));
    assert_eq!(won.moves, 5);
    // 4 * 100 + 50 * (0 + 1 + 4 + 9)
    assert_eq!(won.score, 1100);

    let finished = apply_final_bonuses(&won, 30);
    let breakdown = &finished.score_breakdown;

    assert_eq!(breakdown.match_points, 400);
    assert_eq!(breakdown.combo_bonus, 700);
    assert_eq!(breakdown.time_bonus, 4 * 50 - 30 * 2);
    assert_eq!(breakdown.move_bonus, 800);
    assert_eq!(breakdown.total_score, 1100 + 140 + 800);
    assert_eq!(finished.score, breakdown.total_score);
    assert_eq!(breakdown.earned_currency, 20);
    assert_eq!(breakdown.daily_challenge_bonus, 0);
}

#[test]
fn test_final_bonuses_are_idempotent() {
    let won = clear_with_one_miss(deal(3, GameMode::Standard, DifficultyType::Master));
    let once = apply_final_bonuses(&won, 12);
    assert_eq!(apply_final_bonuses(&once, 12), once);
}

#[test]
fn test_unfinished_board_is_untouched() {
    let state = deal(3, GameMode::Standard, DifficultyType::Casual);
    assert_eq!(apply_final_bonuses(&state, 10), state);
}

#[test]
fn test_time_attack_rewards_remaining_time() {
    let won = clear_with_one_miss(deal(4, GameMode::TimeAttack, DifficultyType::Casual));
    let finished = apply_final_bonuses(&won, 42);
    assert_eq!(finished.score_breakdown.time_bonus, 420);
}

#[test]
fn test_daily_challenge_adds_currency() {
    let won = clear_with_one_miss(deal(4, GameMode::DailyChallenge, DifficultyType::Shark));
    let finished = apply_final_bonuses(&won, 1000);
    let breakdown = &finished.score_breakdown;

    assert_eq!(breakdown.time_bonus, 0);
    assert_eq!(breakdown.daily_challenge_bonus, 500);
    // (1100 + 800) / 100 * 5, plus the daily bonus
    assert_eq!(breakdown.earned_currency, 95 + 500);
}

#[test]
fn test_oversized_tunables_are_rejected_up_front() {
    let huge_moves = config().with_move_bonus_multiplier(i64::MAX / 2);
    let huge_base = config().with_base_match_points(i64::MAX / 2 + 1);

    for scoring in [huge_moves, huge_base] {
        let result = build_initial_state(
            2,
            scoring,
            GameMode::Standard,
            DifficultyType::Casual,
            Some(8),
        );
        assert!(matches!(result, Err(EngineError::InvalidConfig(_))));
    }
}
