//! Game session: the clock-driven shell around the pure engine.
//!
//! The session owns no rules. It keeps the current state, advances a
//! discrete clock, flips mismatched cards back after a delay, fires Mirage
//! reshuffles, ends Time Attack games when the budget runs out, and saves
//! after every transition.

use std::time::Duration;

use tracing::{debug, info, warn};

use super::commentary::Commentator;
use super::store::GameStore;
use crate::cards::CardId;
use crate::circuit::advance_circuit;
use crate::core::{
    build_initial_state, DifficultyType, EngineResult, GameMode, MemoryGameState, ScoringConfig,
    SessionConfig,
};
use crate::daily::{peek_duration, should_shuffle, shuffle_remaining_cards, Mutator};
use crate::persist::GameSnapshot;
use crate::rules::{activate_double_down, flip_card, reset_error_cards, time_expired, GameEvent};
use crate::scoring::apply_final_bonuses;

/// Parameters for dealing a new game.
#[derive(Clone, Debug)]
pub struct NewGame {
    pub pair_count: u32,
    pub scoring: ScoringConfig,
    pub mode: GameMode,
    pub difficulty: DifficultyType,
    pub seed: Option<u64>,
    pub mutators: Vec<Mutator>,
}

impl NewGame {
    /// A game with the difficulty's default board size and stock scoring.
    #[must_use]
    pub fn new(mode: GameMode, difficulty: DifficultyType) -> Self {
        Self {
            pair_count: difficulty.default_pair_count(),
            scoring: ScoringConfig::default(),
            mode,
            difficulty,
            seed: None,
            mutators: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_pair_count(mut self, pair_count: u32) -> Self {
        self.pair_count = pair_count;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringConfig) -> Self {
        self.scoring = scoring;
        self
    }

    #[must_use]
    pub fn with_mutators(mut self, mutators: impl IntoIterator<Item = Mutator>) -> Self {
        self.mutators = mutators.into_iter().collect();
        self
    }

    fn deal(&self) -> EngineResult<MemoryGameState> {
        let state = build_initial_state(
            self.pair_count,
            self.scoring.clone(),
            self.mode,
            self.difficulty,
            self.seed,
        )?;
        Ok(state.with_mutators(self.mutators.iter().copied()))
    }
}

/// One player's running game.
pub struct GameSession<S: GameStore> {
    state: MemoryGameState,
    config: SessionConfig,
    store: S,
    clock: Duration,
    reset_at: Option<Duration>,
    commentator: Commentator,
    last_line: Option<&'static str>,
}

impl<S: GameStore> GameSession<S> {
    /// Deal a fresh game, replacing whatever the store held.
    pub fn start(store: S, config: SessionConfig, new_game: &NewGame) -> EngineResult<Self> {
        let state = new_game.deal()?;
        let mut session = Self::with_state(store, config, state, Duration::ZERO);
        session.persist();
        Ok(session)
    }

    /// Continue the stored game, or deal a new one if there is none or it
    /// cannot be loaded.
    pub fn resume_or_start(
        mut store: S,
        config: SessionConfig,
        new_game: &NewGame,
    ) -> EngineResult<Self> {
        match store.load() {
            Ok(Some(snapshot)) => {
                info!(
                    seed = snapshot.state.seed,
                    elapsed = snapshot.elapsed_seconds,
                    "resuming game"
                );
                let clock = Duration::from_secs(snapshot.elapsed_seconds);
                let mut session = Self::with_state(store, config, snapshot.state, clock);
                if let Some(commentary) = &snapshot.commentary {
                    session.commentator = Commentator::from_state(commentary);
                }
                if session.state.cards.iter().any(|card| card.is_error) {
                    session.reset_at = Some(clock);
                }
                Ok(session)
            }
            Ok(None) => Self::start(store, config, new_game),
            Err(err) => {
                warn!(error = %err, "failed to load saved game, starting fresh");
                Self::start(store, config, new_game)
            }
        }
    }

    fn with_state(
        store: S,
        config: SessionConfig,
        state: MemoryGameState,
        clock: Duration,
    ) -> Self {
        Self {
            commentator: Commentator::new(state.seed),
            state,
            config,
            store,
            clock,
            reset_at: None,
            last_line: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> &MemoryGameState {
        &self.state
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Play time so far.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.clock
    }

    /// Countdown left in Time Attack; `None` in other modes.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        (self.state.mode == GameMode::TimeAttack)
            .then(|| self.config.time_attack_budget.saturating_sub(self.clock))
    }

    /// Opening peek for this board.
    #[must_use]
    pub fn peek_duration(&self) -> Duration {
        peek_duration(self.config.peek_duration, &self.state.active_mutators)
    }

    /// The dealer's line for the latest event.
    #[must_use]
    pub fn last_line(&self) -> Option<&'static str> {
        self.last_line
    }

    /// Forward a flip to the engine.
    pub fn flip(&mut self, card: CardId) -> Option<GameEvent> {
        let (mut next, event) = flip_card(&self.state, card);
        let event = event?;

        match &event {
            GameEvent::MatchFailure { .. } => {
                self.reset_at = Some(self.clock + self.config.mismatch_delay);
            }
            GameEvent::GameWon { .. } => {
                let seconds = self.remaining().unwrap_or(self.clock).as_secs();
                next = apply_final_bonuses(&next, seconds);
            }
            _ => {}
        }

        self.state = next;
        self.announce(&event);
        self.persist();
        Some(event)
    }

    /// Try to arm a Double Down. Returns whether it was armed.
    pub fn double_down(&mut self) -> bool {
        let next = activate_double_down(&self.state);
        let armed = next.is_double_down_active && !self.state.is_double_down_active;
        if armed {
            self.state = next;
            self.persist();
        }
        armed
    }

    /// Advance the clock by `delta`.
    pub fn tick(&mut self, delta: Duration) -> Option<GameEvent> {
        if self.state.is_game_over {
            return None;
        }
        self.clock += delta;
        let mut changed = false;

        if self.reset_at.is_some_and(|at| self.clock >= at) {
            self.reset_at = None;
            self.state = reset_error_cards(&self.state);
            changed = true;

            if should_shuffle(&self.state, self.config.mirage_interval) {
                self.state = shuffle_remaining_cards(&self.state);
            }
        }

        let mut event = None;
        if self.remaining() == Some(Duration::ZERO) {
            let (next, expired) = time_expired(&self.state);
            self.state = next;
            event = expired;
        }

        if let Some(event) = &event {
            self.announce(event);
        }
        if changed || event.is_some() {
            self.persist();
        }
        event
    }

    /// Move a won High Roller session on to the next circuit stage.
    pub fn advance_circuit(&mut self, seed: Option<u64>) -> EngineResult<()> {
        self.state = advance_circuit(&self.state, seed)?;
        self.clock = Duration::ZERO;
        self.reset_at = None;
        self.commentator = Commentator::new(self.state.seed);
        self.persist();
        Ok(())
    }

    /// Drop the game from the store. The session keeps its last state.
    pub fn abandon(&mut self) {
        if let Err(err) = self.store.clear() {
            warn!(error = %err, "failed to clear saved game");
        }
    }

    fn announce(&mut self, event: &GameEvent) {
        self.last_line = self.commentator.line_for(event);
        if let Some(line) = self.last_line {
            debug!(line, "dealer");
        }
    }

    fn persist(&mut self) {
        let snapshot = GameSnapshot::new(self.state.clone(), self.clock.as_secs())
            .with_commentary(self.commentator.state());
        if let Err(err) = self.store.save(&snapshot) {
            warn!(error = %err, "failed to save game");
        }
    }
}
