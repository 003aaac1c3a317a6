use std::sync::Arc;

use crate::cards::{
    CardDefinition, CardMetadata, CardType, ResourceType, StaticPropertyRegistry, Tag,
};
use crate::core::error::DefinitionError;
use crate::core::player::PlayerId;
use crate::effects::{Card, EffectOutcome, EffectResult};
use crate::rules::Game;

/// Animal holder.
pub struct Pets {
    definition: Arc<CardDefinition>,
}

impl Pets {
    pub const NAME: &'static str = "Pets";

    pub fn new(registry: &mut StaticPropertyRegistry) -> Result<Self, DefinitionError> {
        let definition = registry.get_or_create(
            CardDefinition::new(Self::NAME, CardType::Active)
                .with_cost(10)
                .with_tags([Tag::Earth, Tag::Animal])
                .with_resource_type(ResourceType::Animal)
                .with_metadata(CardMetadata::new(
                    "172",
                    "Animals may not be removed from this card. 1 VP per 2 Animals here.",
                )),
        )?;
        Ok(Self { definition })
    }
}

impl Card for Pets {
    fn definition(&self) -> &Arc<CardDefinition> {
        &self.definition
    }

    fn play(&self, _player: PlayerId, _game: &mut Game) -> EffectResult {
        Ok(EffectOutcome::Done)
    }
}
