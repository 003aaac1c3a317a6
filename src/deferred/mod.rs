//! Deferred actions.
//!
//! Effects that must wait until the current action chain has fully
//! resolved are pushed onto a [`DeferredActionQueue`]. The turn driver
//! drains it head-first, one action at a time, suspending whenever an
//! action asks its owner a question.
//!
//! ## Ordering
//!
//! The queue is strictly FIFO. Work pushed while an action runs, or while
//! its question is being answered, joins the tail behind everything that
//! was already waiting.

mod place_ocean;
mod queue;

pub use place_ocean::PlaceOceanTile;
pub use queue::DeferredActionQueue;

use crate::core::player::PlayerId;
use crate::effects::EffectResult;
use crate::rules::Game;

/// A unit of scheduled work owned by one player.
pub trait DeferredAction {
    /// The player any question raised by this action is directed at.
    fn player(&self) -> PlayerId;

    /// Short description for logs and error messages.
    fn description(&self) -> &str;

    /// Precondition checked right before execution. Must not mutate.
    ///
    /// State may have drifted since the action was queued; an `Err` keeps
    /// the action at the head of the queue and is reported as ineligible.
    fn check(&self, _game: &Game) -> Result<(), String> {
        Ok(())
    }

    fn execute(self: Box<Self>, game: &mut Game) -> EffectResult;
}

type DeferredFn = Box<dyn FnOnce(&mut Game) -> EffectResult>;
type DeferredCheck = Box<dyn Fn(&Game) -> Result<(), String>>;

/// Closure-backed deferred action.
pub struct SimpleDeferredAction {
    player: PlayerId,
    description: String,
    check: Option<DeferredCheck>,
    run: DeferredFn,
}

impl SimpleDeferredAction {
    pub fn new(
        player: PlayerId,
        description: impl Into<String>,
        run: impl FnOnce(&mut Game) -> EffectResult + 'static,
    ) -> Self {
        Self {
            player,
            description: description.into(),
            check: None,
            run: Box::new(run),
        }
    }

    #[must_use]
    pub fn with_check(mut self, check: impl Fn(&Game) -> Result<(), String> + 'static) -> Self {
        self.check = Some(Box::new(check));
        self
    }
}

impl DeferredAction for SimpleDeferredAction {
    fn player(&self) -> PlayerId {
        self.player
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn check(&self, game: &Game) -> Result<(), String> {
        match &self.check {
            Some(check) => check(game),
            None => Ok(()),
        }
    }

    fn execute(self: Box<Self>, game: &mut Game) -> EffectResult {
        (self.run)(game)
    }
}
