//! Card eligibility requirements.
//!
//! Requirements are data, evaluated against a read-only `GameState`. They
//! never mutate anything, so `can_play` built on them stays a pure
//! predicate.

use serde::{Deserialize, Serialize};

use super::definition::{ResourceType, Tag};
use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::core::units::Resource;

/// A single printed requirement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Requirement {
    /// At least this many ocean tiles on the board.
    MinOceans(u32),
    /// At most this many ocean tiles on the board.
    MaxOceans(u32),
    /// Player terraform rating at least this high.
    MinTerraformRating(i32),
    /// Player has at least `count` of `tag` in play.
    Tags { tag: Tag, count: u32 },
    /// Player production of `resource` at least `amount`.
    Production { resource: Resource, amount: i32 },
    /// Player has a card in play that can hold this resource.
    ResourceHolder(ResourceType),
}

impl Requirement {
    /// Whether `player` currently meets this requirement.
    #[must_use]
    pub fn satisfies(&self, player: PlayerId, state: &GameState) -> bool {
        match *self {
            Requirement::MinOceans(n) => state.board().oceans_placed() >= n,
            Requirement::MaxOceans(n) => state.board().oceans_placed() <= n,
            Requirement::MinTerraformRating(tr) => state.player(player).terraform_rating >= tr,
            Requirement::Tags { tag, count } => state.tag_count(player, tag) >= count,
            Requirement::Production { resource, amount } => {
                state.player(player).production.get(resource) >= amount
            }
            Requirement::ResourceHolder(resource_type) => {
                !state.resource_cards(player, resource_type).is_empty()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::SpaceId;
    use crate::core::config::GameConfig;

    #[test]
    fn test_ocean_requirements() {
        let mut state = GameState::new(GameConfig::default());
        let p0 = PlayerId::new(0);

        assert!(!Requirement::MinOceans(1).satisfies(p0, &state));
        assert!(Requirement::MaxOceans(0).satisfies(p0, &state));

        state.place_ocean(p0, SpaceId(0)).unwrap();

        assert!(Requirement::MinOceans(1).satisfies(p0, &state));
        assert!(!Requirement::MaxOceans(0).satisfies(p0, &state));
    }

    #[test]
    fn test_production_requirement() {
        let mut state = GameState::new(GameConfig::default());
        let p0 = PlayerId::new(0);
        let req = Requirement::Production { resource: Resource::Heat, amount: 1 };

        assert!(!req.satisfies(p0, &state));
        state.player_mut(p0).production.add(Resource::Heat, 2);
        assert!(req.satisfies(p0, &state));
    }

    #[test]
    fn test_terraform_rating_requirement() {
        let state = GameState::new(GameConfig::default());
        assert!(Requirement::MinTerraformRating(20).satisfies(PlayerId::new(1), &state));
        assert!(!Requirement::MinTerraformRating(21).satisfies(PlayerId::new(1), &state));
    }
}
