use std::sync::Arc;

use crate::cards::{
    CardDefinition, CardMetadata, CardType, ResourceType, StaticPropertyRegistry, Tag,
};
use crate::core::error::DefinitionError;
use crate::core::player::PlayerId;
use crate::effects::{Card, EffectOutcome, EffectResult};
use crate::rules::Game;

/// Microbe holder.
pub struct Tardigrades {
    definition: Arc<CardDefinition>,
}

impl Tardigrades {
    pub const NAME: &'static str = "Tardigrades";

    pub fn new(registry: &mut StaticPropertyRegistry) -> Result<Self, DefinitionError> {
        let definition = registry.get_or_create(
            CardDefinition::new(Self::NAME, CardType::Active)
                .with_cost(4)
                .with_tags([Tag::Microbe])
                .with_resource_type(ResourceType::Microbe)
                .with_initial_action_text("Add 1 Microbe to this card")
                .with_metadata(CardMetadata::new("049", "1 VP per 4 Microbes on this card.")),
        )?;
        Ok(Self { definition })
    }
}

impl Card for Tardigrades {
    fn definition(&self) -> &Arc<CardDefinition> {
        &self.definition
    }

    fn play(&self, _player: PlayerId, _game: &mut Game) -> EffectResult {
        Ok(EffectOutcome::Done)
    }
}
