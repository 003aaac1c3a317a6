//! Game configuration and rule constants.

use serde::{Deserialize, Serialize};

/// Ocean tiles available on a standard board.
pub const MAX_OCEAN_TILES: u32 = 9;

/// Terraform rating gained for placing an ocean tile.
pub const OCEAN_TR_BONUS: i32 = 1;

/// Terraform rating every player starts with.
pub const STARTING_TERRAFORM_RATING: i32 = 20;

/// Setup parameters for one game.
///
/// ```
/// use mars_rules::core::GameConfig;
///
/// let config = GameConfig::default().with_player_count(3).with_seed(99);
/// assert_eq!(config.player_count, 3);
/// assert_eq!(config.max_ocean_tiles, 9);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of seats.
    pub player_count: usize,

    /// Seed for deck shuffling.
    pub seed: u64,

    /// Ocean tiles that may be placed before the ocean track is full.
    pub max_ocean_tiles: u32,

    /// Land spaces on the board (cities, greeneries).
    pub land_spaces: u32,

    /// Terraform rating at game start.
    pub starting_terraform_rating: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            seed: 0,
            max_ocean_tiles: MAX_OCEAN_TILES,
            land_spaces: 48,
            starting_terraform_rating: STARTING_TERRAFORM_RATING,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_player_count(mut self, count: usize) -> Self {
        assert!((1..=5).contains(&count), "Player count must be 1-5");
        self.player_count = count;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_max_oceans(mut self, max: u32) -> Self {
        self.max_ocean_tiles = max;
        self
    }
}
