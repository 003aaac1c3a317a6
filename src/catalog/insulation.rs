use std::sync::Arc;

use crate::cards::{CardDefinition, CardMetadata, CardType, Requirement, StaticPropertyRegistry};
use crate::core::error::DefinitionError;
use crate::core::player::PlayerId;
use crate::core::units::{Resource, Units};
use crate::effects::{Card, EffectOutcome, EffectResult};
use crate::inputs::SelectAmount;
use crate::rules::Game;

/// Trade heat production for megacredit production, step for step.
pub struct Insulation {
    definition: Arc<CardDefinition>,
}

impl Insulation {
    pub const NAME: &'static str = "Insulation";

    pub fn new(registry: &mut StaticPropertyRegistry) -> Result<Self, DefinitionError> {
        let definition = registry.get_or_create(
            CardDefinition::new(Self::NAME, CardType::Automated)
                .with_cost(2)
                .with_requirement(Requirement::Production {
                    resource: Resource::Heat,
                    amount: 1,
                })
                .with_metadata(CardMetadata::new(
                    "152",
                    "Decrease your heat production any number of steps and increase your MC production the same number of steps.",
                )),
        )?;
        Ok(Self { definition })
    }
}

impl Card for Insulation {
    fn definition(&self) -> &Arc<CardDefinition> {
        &self.definition
    }

    fn play(&self, player: PlayerId, game: &mut Game) -> EffectResult {
        let heat = i64::from(game.state().player(player).production.heat);
        let select = SelectAmount::new(
            "Select amount of heat production to decrease",
            "Decrease",
            1,
            heat,
            move |game, amount| {
                let steps = i32::try_from(amount).unwrap_or(0);
                let mut delta = Units::of(Resource::Heat, -steps);
                delta.add(Resource::MegaCredits, steps);
                game.state_mut().add_production(player, &delta);
                log::info!("{player} moved {steps} heat production to megacredits");
                Ok(EffectOutcome::Done)
            },
        );
        Ok(EffectOutcome::AwaitingInput(select.into()))
    }
}
