//! Session orchestration around the engine.
//!
//! - `game`: `GameSession`, the clock and side-effect shell
//! - `store`: the `GameStore` storage seam and an in-memory store
//! - `commentary`: seeded dealer lines for events

pub mod commentary;
pub mod game;
pub mod store;

pub use commentary::Commentator;
pub use game::{GameSession, NewGame};
pub use store::{GameStore, MemoryStore, StoreError};
