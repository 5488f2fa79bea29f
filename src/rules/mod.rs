//! The rules engine: pure transitions from `(state, input)` to
//! `(state, event)`.
//!
//! - `engine`: flips, match/mismatch resolution, error reset, time-out
//! - `double_down`: arming and settling the Double Down gamble
//! - `event`: the domain events transitions emit
//!
//! Nothing here blocks, reads a clock, or touches shared state. Callers
//! must feed each output state into the next call.

pub mod double_down;
pub mod engine;
pub mod event;

pub use double_down::{activate_double_down, can_double_down, MIN_PAIRS_FOR_DOUBLE_DOWN};
pub use engine::{flip_card, reset_error_cards, time_expired};
pub use event::{GameEvent, GameOverReason};
