//! Core types: ids, players, resources, board, state, RNG, configuration
//! and the error taxonomy.

pub mod board;
pub mod config;
pub mod entity;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;
pub mod units;

pub use board::{Board, Space, SpaceId, SpaceKind, Tile, TileKind};
pub use config::{GameConfig, MAX_OCEAN_TILES, OCEAN_TR_BONUS, STARTING_TERRAFORM_RATING};
pub use entity::{EntityAllocator, EntityId};
pub use error::{
    DefinitionError, GameError, GameResult, IneligibleAction, InvalidAnswer, ProtocolMisuse,
};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, PlayerState};
pub use units::{Resource, Units};
