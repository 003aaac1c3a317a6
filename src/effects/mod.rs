//! Effect execution contract.
//!
//! Every card effect, input continuation and deferred action returns an
//! [`EffectResult`]: either the work is finished (`Done`) or it needs a
//! player's answer first (`AwaitingInput`). The question carries its own
//! continuation, so resuming is just resolving that input.
//!
//! Cards implement [`Card`]: a pure `can_play` predicate and a `play`
//! effect. New cards are new implementations of the trait, never
//! subclasses of one another.

mod card;
mod outcome;

pub use card::Card;
pub use outcome::{EffectOutcome, EffectResult};
