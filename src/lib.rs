//! # mars-rules
//!
//! Rules core for a turn-based terraforming card game, built around the
//! interactive decision protocol.
//!
//! ## Design Principles
//!
//! 1. **Questions are values**: A card effect either finishes or returns a
//!    [`PlayerInput`] carrying its own continuation. Resuming the effect is
//!    resolving that input.
//!
//! 2. **One outstanding input**: The [`Game`] driver holds at most one
//!    pending input. Answers quote its id; stale or misdirected answers are
//!    protocol errors, invalid ones are retryable.
//!
//! 3. **Shared definitions**: Card properties are validated once and shared
//!    by every instance through the [`StaticPropertyRegistry`].
//!
//! ## Modules
//!
//! - `core`: Ids, players, resources, board, state, RNG, configuration, errors
//! - `cards`: Card definitions, requirements, instances and the registry
//! - `effects`: The `Card` capability trait and effect outcomes
//! - `inputs`: Input primitives, combinators and their wire shapes
//! - `deferred`: Deferred actions and the FIFO queue
//! - `rules`: The turn driver
//! - `catalog`: Concrete cards
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use mars_rules::{CardCatalog, Game, GameConfig, InputResponse, PlayerId, StaticPropertyRegistry};
//! use mars_rules::catalog::LargeConvoy;
//!
//! let mut registry = StaticPropertyRegistry::new();
//! let catalog = Arc::new(CardCatalog::standard(&mut registry).unwrap());
//! let mut game = Game::new(GameConfig::default(), catalog);
//!
//! let p0 = PlayerId::new(0);
//! game.state_mut().gain(p0, mars_rules::Resource::MegaCredits, 40);
//! let convoy = game.give_card(p0, LargeConvoy::NAME).unwrap();
//!
//! // No animal holders: plants are gained directly and the ocean placement
//! // is the only question left.
//! let status = game.play_card(p0, convoy).unwrap();
//! let view = status.pending().unwrap().clone();
//! let space = game.state().board().available_ocean_spaces()[0];
//!
//! let status = game.submit(p0, view.answer(InputResponse::spaces([space]))).unwrap();
//! assert!(status.is_complete());
//! assert_eq!(game.state().player(p0).resources.plants, 5);
//! ```

pub mod cards;
pub mod catalog;
pub mod core;
pub mod deferred;
pub mod effects;
pub mod inputs;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Board, EntityId, GameConfig, GameError, GameResult, GameRng, GameState, IneligibleAction,
    InvalidAnswer, PlayerId, PlayerMap, ProtocolMisuse, Resource, SpaceId, Units,
    DefinitionError,
};

pub use crate::cards::{
    CardDefinition, CardInstance, CardMetadata, CardName, CardType, Requirement, ResourceType,
    StaticPropertyRegistry, Tag,
};

pub use crate::catalog::CardCatalog;

pub use crate::effects::{Card, EffectOutcome, EffectResult};

pub use crate::inputs::{
    AndOptions, InputResponse, InputView, OrOptions, PlayerInput, SelectAmount, SelectCard,
    SelectFromSet, SelectOption, SelectPlayer, SelectSpace,
};

pub use crate::deferred::{DeferredAction, DeferredActionQueue, PlaceOceanTile, SimpleDeferredAction};

pub use crate::rules::{Answer, Game, InputId, PendingView, PlayPhase, TurnStatus};
