use std::sync::Arc;

use crate::cards::{
    CardDefinition, CardMetadata, CardType, ResourceType, StaticPropertyRegistry, Tag,
};
use crate::core::entity::EntityId;
use crate::core::error::{DefinitionError, InvalidAnswer};
use crate::core::player::PlayerId;
use crate::core::units::Resource;
use crate::deferred::PlaceOceanTile;
use crate::effects::{Card, EffectOutcome, EffectResult};
use crate::inputs::{OrOptions, PlayerInput, SelectCard, SelectOption};
use crate::rules::Game;

const CARDS_DRAWN: usize = 2;
const PLANTS_GAINED: i32 = 5;
const ANIMALS_ADDED: i64 = 4;

/// Event: draw 2 cards, then gain 5 plants or put 4 animals on another
/// card. Either way an ocean placement is deferred.
pub struct LargeConvoy {
    definition: Arc<CardDefinition>,
}

impl LargeConvoy {
    pub const NAME: &'static str = "Large Convoy";

    pub fn new(registry: &mut StaticPropertyRegistry) -> Result<Self, DefinitionError> {
        let definition = registry.get_or_create(
            CardDefinition::new(Self::NAME, CardType::Event)
                .with_cost(36)
                .with_tags([Tag::Earth, Tag::Space])
                .with_metadata(
                    CardMetadata::new(
                        "143",
                        "Place an ocean tile and draw 2 cards. Gain 5 Plants or add 4 Animals to ANOTHER card.",
                    )
                    .with_victory_points(2),
                ),
        )?;
        Ok(Self { definition })
    }
}

fn gain_plants(player: PlayerId, game: &mut Game) -> EffectResult {
    game.state_mut().gain(player, Resource::Plants, PLANTS_GAINED);
    log::info!("{player} gained {PLANTS_GAINED} plants");
    game.defer(PlaceOceanTile::new(player));
    Ok(EffectOutcome::Done)
}

fn add_animals(player: PlayerId, target: EntityId, game: &mut Game) -> EffectResult {
    game.state_mut().add_resource_to(target, ANIMALS_ADDED)?;
    log::info!("{player} added {ANIMALS_ADDED} animals to {target}");
    game.defer(PlaceOceanTile::new(player));
    Ok(EffectOutcome::Done)
}

impl Card for LargeConvoy {
    fn definition(&self) -> &Arc<CardDefinition> {
        &self.definition
    }

    /// Always playable, unless a policy surcharge applies to ocean
    /// placement. Then the player must cover cost plus surcharge.
    fn can_play(&self, player: PlayerId, game: &Game) -> bool {
        let state = game.state();
        match state.policy_surcharge {
            Some(surcharge) if !state.board().oceans_maxed() => {
                state.can_afford(player, self.definition.cost() + surcharge)
            }
            _ => true,
        }
    }

    fn play(&self, player: PlayerId, game: &mut Game) -> EffectResult {
        game.state_mut().draw_cards(player, CARDS_DRAWN);

        let animal_cards = game.state().resource_cards(player, ResourceType::Animal);
        let add_animals_branch: PlayerInput = match animal_cards.len() {
            0 => return gain_plants(player, game),
            1 => {
                let target = animal_cards[0];
                let name = game
                    .state()
                    .card(target)
                    .map(|card| card.name().to_string())
                    .unwrap_or_default();
                SelectOption::new(
                    format!("Add {ANIMALS_ADDED} animals to {name}"),
                    "Add animals",
                    move |game| add_animals(player, target, game),
                )
                .into()
            }
            _ => SelectCard::new(
                "Select card to add 4 animals",
                "Add animals",
                animal_cards,
                move |game, chosen| {
                    let target = chosen
                        .first()
                        .copied()
                        .ok_or(InvalidAnswer::SelectionSize { min: 1, max: 1, got: 0 })?;
                    add_animals(player, target, game)
                },
            )
            .into(),
        };

        let gain_plants_branch =
            SelectOption::new("Gain 5 plants", "Gain plants", move |game| gain_plants(player, game));

        Ok(EffectOutcome::AwaitingInput(
            OrOptions::new(vec![gain_plants_branch.into(), add_animals_branch]).into(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition() {
        let mut registry = StaticPropertyRegistry::new();
        let card = LargeConvoy::new(&mut registry).unwrap();
        let def = card.definition();

        assert_eq!(def.cost(), 36);
        assert_eq!(def.card_type(), CardType::Event);
        assert_eq!(def.tags(), &[Tag::Earth, Tag::Space]);
        assert_eq!(def.victory_points(), 2);
        assert_eq!(def.metadata().card_number.as_deref(), Some("143"));
    }
}
