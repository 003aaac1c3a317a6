//! Turn driver.
//!
//! The driver is the only owner of mutable game state. Cards, inputs and
//! deferred actions receive `&mut Game` while they run and never keep it.

mod game;

pub use game::{Answer, Game, InputId, PendingView, PlayPhase, TurnStatus};
