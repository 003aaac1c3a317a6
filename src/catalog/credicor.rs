use std::sync::Arc;

use crate::cards::{CardDefinition, CardMetadata, CardType, StaticPropertyRegistry};
use crate::core::error::DefinitionError;
use crate::core::player::PlayerId;
use crate::effects::{Card, EffectOutcome, EffectResult};
use crate::rules::Game;

/// Corporation starting with 57 megacredits.
pub struct CrediCor {
    definition: Arc<CardDefinition>,
}

impl CrediCor {
    pub const NAME: &'static str = "CrediCor";

    pub fn new(registry: &mut StaticPropertyRegistry) -> Result<Self, DefinitionError> {
        let definition = registry.get_or_create(
            CardDefinition::new(Self::NAME, CardType::Corporation)
                .with_starting_megacredits(57)
                .with_metadata(CardMetadata {
                    card_number: None,
                    description: "You start with 57 MC.".to_string(),
                    victory_points: None,
                }),
        )?;
        Ok(Self { definition })
    }
}

impl Card for CrediCor {
    fn definition(&self) -> &Arc<CardDefinition> {
        &self.definition
    }

    /// Corporations are always playable at setup.
    fn can_play(&self, _player: PlayerId, _game: &Game) -> bool {
        true
    }

    fn play(&self, _player: PlayerId, _game: &mut Game) -> EffectResult {
        Ok(EffectOutcome::Done)
    }
}
