//! Card capability interface.

use std::sync::Arc;

use super::outcome::EffectResult;
use crate::cards::{CardDefinition, CardName};
use crate::core::player::PlayerId;
use crate::rules::Game;

/// Behavior of one card.
///
/// The core calls only two entry points: `can_play`, which must not
/// mutate anything (it only gets `&Game`), and `play`, which may mutate
/// state, defer follow-up actions, and return a question.
///
/// Cost payment, hand removal and tableau placement are the driver's job;
/// `play` only carries out the card's printed effect.
pub trait Card {
    /// Shared static properties.
    fn definition(&self) -> &Arc<CardDefinition>;

    fn name(&self) -> &CardName {
        self.definition().name()
    }

    /// Whether `player` may play this card now.
    ///
    /// Default: every printed requirement is satisfied and the player can
    /// pay the printed cost.
    fn can_play(&self, player: PlayerId, game: &Game) -> bool {
        let state = game.state();
        let definition = self.definition();
        definition
            .requirements()
            .iter()
            .all(|req| req.satisfies(player, state))
            && state.can_afford(player, definition.cost())
    }

    /// Carry out the card's effect for `player`.
    fn play(&self, player: PlayerId, game: &mut Game) -> EffectResult;
}
