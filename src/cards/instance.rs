//! Card instances - runtime card state.
//!
//! A `CardInstance` is one physical copy of a card in a game. Static reads
//! (name, cost, tags, resource type) delegate to the shared definition;
//! only the attached resource counter and integer flags are per-instance.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardName, CardType, ResourceType, Tag};
use crate::core::entity::EntityId;
use crate::core::player::PlayerId;

/// Instance flag: the card's action was used this generation.
pub const ACTION_USED: &str = "action_used";

/// A card in a game.
///
/// Flags use `i64` values the same way turn counters do: 0/1 for booleans,
/// counts otherwise.
#[derive(Clone, Debug)]
pub struct CardInstance {
    /// Unique entity ID for this instance.
    pub entity_id: EntityId,

    definition: Arc<CardDefinition>,

    /// Holder of the card. `None` while it sits in the shared deck.
    pub owner: Option<PlayerId>,

    /// Resources (animals, microbes, ...) placed on the card.
    pub resources: i64,

    state: FxHashMap<String, i64>,
}

impl CardInstance {
    #[must_use]
    pub fn new(entity_id: EntityId, definition: Arc<CardDefinition>) -> Self {
        Self {
            entity_id,
            definition,
            owner: None,
            resources: 0,
            state: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn owned_by(mut self, owner: PlayerId) -> Self {
        self.owner = Some(owner);
        self
    }

    /// The shared definition backing this instance.
    #[must_use]
    pub fn definition(&self) -> &Arc<CardDefinition> {
        &self.definition
    }

    #[must_use]
    pub fn name(&self) -> &CardName {
        self.definition.name()
    }

    #[must_use]
    pub fn card_type(&self) -> CardType {
        self.definition.card_type()
    }

    #[must_use]
    pub fn cost(&self) -> u32 {
        self.definition.cost()
    }

    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        self.definition.tags()
    }

    #[must_use]
    pub fn resource_type(&self) -> Option<ResourceType> {
        self.definition.resource_type()
    }

    /// Whether this card can hold `resource_type`.
    #[must_use]
    pub fn holds(&self, resource_type: ResourceType) -> bool {
        self.resource_type() == Some(resource_type)
    }

    #[must_use]
    pub fn get_state(&self, key: &str, default: i64) -> i64 {
        self.state.get(key).copied().unwrap_or(default)
    }

    pub fn set_flag(&mut self, key: impl Into<String>, value: bool) {
        self.state.insert(key.into(), i64::from(value));
    }

    #[must_use]
    pub fn has_flag(&self, key: &str) -> bool {
        self.get_state(key, 0) != 0
    }

    /// Reset per-generation flags.
    pub fn clear_state(&mut self) {
        self.state.clear();
    }
}
