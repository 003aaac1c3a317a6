use std::sync::Arc;

use crate::cards::{
    CardDefinition, CardMetadata, CardType, Requirement, StaticPropertyRegistry, Tag,
};
use crate::core::error::DefinitionError;
use crate::core::player::PlayerId;
use crate::core::units::{Resource, Units};
use crate::effects::{Card, EffectOutcome, EffectResult};
use crate::rules::Game;

pub struct KelpFarming {
    definition: Arc<CardDefinition>,
}

impl KelpFarming {
    pub const NAME: &'static str = "Kelp Farming";

    pub fn new(registry: &mut StaticPropertyRegistry) -> Result<Self, DefinitionError> {
        let mut production = Units::of(Resource::MegaCredits, 2);
        production.add(Resource::Plants, 3);

        let definition = registry.get_or_create(
            CardDefinition::new(Self::NAME, CardType::Automated)
                .with_cost(17)
                .with_tags([Tag::Plant])
                .with_requirement(Requirement::MinOceans(6))
                .with_production(production)
                .with_metadata(
                    CardMetadata::new(
                        "055",
                        "Requires 6 ocean tiles. Increase your MC production 2 steps and your plant production 3 steps. Gain 2 plants.",
                    )
                    .with_victory_points(1),
                ),
        )?;
        Ok(Self { definition })
    }
}

impl Card for KelpFarming {
    fn definition(&self) -> &Arc<CardDefinition> {
        &self.definition
    }

    fn play(&self, player: PlayerId, game: &mut Game) -> EffectResult {
        let production = self.definition.production();
        game.state_mut().add_production(player, &production);
        game.state_mut().gain(player, Resource::Plants, 2);
        Ok(EffectOutcome::Done)
    }
}
