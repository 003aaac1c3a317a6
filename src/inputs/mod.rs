//! Pending player inputs.
//!
//! A [`PlayerInput`] is a single-use question for one player. Primitives
//! ([`SelectOption`], [`SelectFromSet`], [`SelectAmount`]) carry a boxed
//! continuation; combinators ([`OrOptions`], [`AndOptions`]) compose them.
//! Every input validates an answer before consuming anything, so a rejected
//! answer leaves the question outstanding for a retry.

mod amount;
mod and_options;
mod option;
mod or_options;
mod response;
mod select;

use std::fmt;

pub use amount::{AmountCallback, SelectAmount};
pub use and_options::{AndCallback, AndOptions};
pub use option::{OptionCallback, SelectOption};
pub use or_options::{OrOptions, DEFAULT_OR_TITLE};
pub use response::{InputResponse, InputView};
pub use select::{
    Candidate, SelectCallback, SelectCard, SelectFromSet, SelectPlayer, SelectSpace,
    SelectionCheck,
};

use crate::core::board::SpaceId;
use crate::core::entity::EntityId;
use crate::core::error::GameResult;
use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::effects::EffectResult;
use crate::rules::Game;

/// Closed set of question shapes.
pub enum PlayerInput {
    Option(SelectOption),
    Or(OrOptions),
    And(AndOptions),
    Card(SelectCard),
    Space(SelectSpace),
    Player(SelectPlayer),
    Amount(SelectAmount),
}

impl PlayerInput {
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            PlayerInput::Option(input) => input.title(),
            PlayerInput::Or(input) => input.title(),
            PlayerInput::And(input) => input.title(),
            PlayerInput::Card(input) => input.title(),
            PlayerInput::Space(input) => input.title(),
            PlayerInput::Player(input) => input.title(),
            PlayerInput::Amount(input) => input.title(),
        }
    }

    /// Whether this input has already been resolved.
    #[must_use]
    pub fn is_consumed(&self) -> bool {
        match self {
            PlayerInput::Option(input) => input.is_consumed(),
            PlayerInput::Or(input) => input.is_consumed(),
            PlayerInput::And(input) => input.is_consumed(),
            PlayerInput::Card(input) => input.is_consumed(),
            PlayerInput::Space(input) => input.is_consumed(),
            PlayerInput::Player(input) => input.is_consumed(),
            PlayerInput::Amount(input) => input.is_consumed(),
        }
    }

    /// Serializable description for the transport layer.
    #[must_use]
    pub fn view(&self) -> InputView {
        match self {
            PlayerInput::Option(input) => input.view(),
            PlayerInput::Or(input) => input.view(),
            PlayerInput::And(input) => input.view(),
            PlayerInput::Card(input) => EntityId::render(input),
            PlayerInput::Space(input) => SpaceId::render(input),
            PlayerInput::Player(input) => PlayerId::render(input),
            PlayerInput::Amount(input) => input.view(),
        }
    }

    /// Check `response` without consuming anything.
    pub fn validate(&self, state: &GameState, response: &InputResponse) -> GameResult<()> {
        match self {
            PlayerInput::Option(input) => input.validate(response),
            PlayerInput::Or(input) => input.validate(state, response),
            PlayerInput::And(input) => input.validate(state, response),
            PlayerInput::Card(input) => input.validate(state, response),
            PlayerInput::Space(input) => input.validate(state, response),
            PlayerInput::Player(input) => input.validate(state, response),
            PlayerInput::Amount(input) => input.validate(response),
        }
    }

    /// Validate, then run the continuation.
    ///
    /// An invalid answer returns `InvalidAnswer` with nothing consumed.
    /// Resolving a consumed input returns `ProtocolMisuse::AlreadyConsumed`.
    pub fn resolve(&mut self, game: &mut Game, response: InputResponse) -> EffectResult {
        match self {
            PlayerInput::Option(input) => input.resolve(game, response),
            PlayerInput::Or(input) => input.resolve(game, response),
            PlayerInput::And(input) => input.resolve(game, response),
            PlayerInput::Card(input) => input.resolve(game, response),
            PlayerInput::Space(input) => input.resolve(game, response),
            PlayerInput::Player(input) => input.resolve(game, response),
            PlayerInput::Amount(input) => input.resolve(game, response),
        }
    }
}

impl fmt::Debug for PlayerInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayerInput")
            .field("view", &self.view())
            .field("consumed", &self.is_consumed())
            .finish()
    }
}

impl From<SelectOption> for PlayerInput {
    fn from(input: SelectOption) -> Self {
        PlayerInput::Option(input)
    }
}

impl From<OrOptions> for PlayerInput {
    fn from(input: OrOptions) -> Self {
        PlayerInput::Or(input)
    }
}

impl From<AndOptions> for PlayerInput {
    fn from(input: AndOptions) -> Self {
        PlayerInput::And(input)
    }
}

impl<T: Candidate> From<SelectFromSet<T>> for PlayerInput {
    fn from(input: SelectFromSet<T>) -> Self {
        T::into_input(input)
    }
}

impl From<SelectAmount> for PlayerInput {
    fn from(input: SelectAmount) -> Self {
        PlayerInput::Amount(input)
    }
}
