use std::sync::Arc;

use crate::cards::{
    CardDefinition, CardMetadata, CardType, ResourceType, StaticPropertyRegistry, Tag,
};
use crate::core::entity::EntityId;
use crate::core::error::{DefinitionError, InvalidAnswer};
use crate::core::player::PlayerId;
use crate::core::units::Resource;
use crate::effects::{Card, EffectOutcome, EffectResult};
use crate::inputs::{AndOptions, PlayerInput, SelectCard};
use crate::rules::Game;

const PLANTS_GAINED: i32 = 4;
const MICROBES_ADDED: i64 = 3;
const ANIMALS_ADDED: i64 = 2;

/// Event: raise TR 1 step, gain 4 plants, then add 3 microbes and 2
/// animals to other cards.
///
/// A resource with one possible holder is placed directly. Choices left
/// over are asked one after another.
pub struct ImportedNitrogen {
    definition: Arc<CardDefinition>,
}

impl ImportedNitrogen {
    pub const NAME: &'static str = "Imported Nitrogen";

    pub fn new(registry: &mut StaticPropertyRegistry) -> Result<Self, DefinitionError> {
        let definition = registry.get_or_create(
            CardDefinition::new(Self::NAME, CardType::Event)
                .with_cost(23)
                .with_tags([Tag::Earth, Tag::Space])
                .with_metadata(CardMetadata::new(
                    "163",
                    "Raise your TR 1 step and gain 4 Plants. Add 3 Microbes to ANOTHER card and 2 Animals to ANOTHER card.",
                )),
        )?;
        Ok(Self { definition })
    }
}

fn add_to(amount: i64) -> impl FnOnce(&mut Game, Vec<EntityId>) -> EffectResult {
    move |game: &mut Game, chosen: Vec<EntityId>| {
        let target = chosen
            .first()
            .copied()
            .ok_or(InvalidAnswer::SelectionSize { min: 1, max: 1, got: 0 })?;
        game.state_mut().add_resource_to(target, amount)?;
        Ok(EffectOutcome::Done)
    }
}

/// Place `amount` resources now, or build the question that places them.
fn place(
    game: &mut Game,
    player: PlayerId,
    resource_type: ResourceType,
    amount: i64,
    noun: &str,
) -> EffectResult {
    let holders = game.state().resource_cards(player, resource_type);
    match holders.len() {
        0 => Ok(EffectOutcome::Done),
        1 => {
            let only = holders[0];
            game.state_mut().add_resource_to(only, amount)?;
            log::info!("{player} added {amount} {noun} to {only}");
            Ok(EffectOutcome::Done)
        }
        _ => {
            let select = SelectCard::new(
                format!("Select card to add {amount} {noun}"),
                format!("Add {noun}"),
                holders,
                add_to(amount),
            );
            Ok(EffectOutcome::AwaitingInput(select.into()))
        }
    }
}

impl Card for ImportedNitrogen {
    fn definition(&self) -> &Arc<CardDefinition> {
        &self.definition
    }

    fn play(&self, player: PlayerId, game: &mut Game) -> EffectResult {
        game.state_mut().raise_terraform_rating(player, 1);
        game.state_mut().gain(player, Resource::Plants, PLANTS_GAINED);

        let questions: Vec<PlayerInput> = [
            place(game, player, ResourceType::Microbe, MICROBES_ADDED, "microbes")?,
            place(game, player, ResourceType::Animal, ANIMALS_ADDED, "animals")?,
        ]
        .into_iter()
        .filter_map(EffectOutcome::into_input)
        .collect();

        match questions.len() {
            0 | 1 => Ok(questions.into_iter().next().into()),
            _ => Ok(EffectOutcome::AwaitingInput(
                AndOptions::of(questions)
                    .with_title("Add resources to cards")
                    .into(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition() {
        let mut registry = StaticPropertyRegistry::new();
        let card = ImportedNitrogen::new(&mut registry).unwrap();
        assert_eq!(card.definition().cost(), 23);
        assert_eq!(card.definition().card_type(), CardType::Event);
        assert_eq!(card.definition().victory_points(), 0);
    }
}
