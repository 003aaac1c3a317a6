use super::DeferredAction;
use crate::core::player::PlayerId;
use crate::effects::{EffectOutcome, EffectResult};
use crate::inputs::SelectSpace;
use crate::rules::Game;

/// Ask `player` where to put an ocean, then place it.
///
/// Placing raises the player's terraform rating. Once every ocean is on
/// the board the precondition fails and the driver decides what to do.
#[derive(Clone, Debug)]
pub struct PlaceOceanTile {
    player: PlayerId,
    title: String,
}

impl PlaceOceanTile {
    pub fn new(player: PlayerId) -> Self {
        Self {
            player,
            title: "Select space for ocean tile".to_string(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

impl DeferredAction for PlaceOceanTile {
    fn player(&self) -> PlayerId {
        self.player
    }

    fn description(&self) -> &str {
        "place ocean tile"
    }

    fn check(&self, game: &Game) -> Result<(), String> {
        let board = game.state().board();
        if board.oceans_maxed() {
            return Err(format!("all {} oceans are placed", board.max_oceans()));
        }
        if board.available_ocean_spaces().is_empty() {
            return Err("no ocean space is free".to_string());
        }
        Ok(())
    }

    fn execute(self: Box<Self>, game: &mut Game) -> EffectResult {
        let player = self.player;
        let spaces = game.state().board().available_ocean_spaces();
        let select = SelectSpace::new(self.title, "Place", spaces, move |game, chosen| {
            for space in chosen {
                game.state_mut().place_ocean(player, space)?;
            }
            Ok(EffectOutcome::Done)
        });
        Ok(EffectOutcome::AwaitingInput(select.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CardCatalog;
    use crate::core::board::SpaceId;
    use crate::core::config::GameConfig;
    use crate::inputs::InputResponse;
    use std::sync::Arc;

    fn game(max_oceans: u32) -> Game {
        let config = GameConfig::default().with_max_oceans(max_oceans);
        Game::new(config, Arc::new(CardCatalog::new()))
    }

    #[test]
    fn test_place_ocean_raises_rating() {
        let mut game = game(9);
        let before = game.state().player(PlayerId(0)).terraform_rating;

        let action = Box::new(PlaceOceanTile::new(PlayerId(0)));
        assert!(action.check(&game).is_ok());

        let mut input = action.execute(&mut game).unwrap().into_input().unwrap();
        input
            .resolve(&mut game, InputResponse::spaces([SpaceId(3)]))
            .unwrap();

        assert_eq!(game.state().board().oceans_placed(), 1);
        assert_eq!(game.state().player(PlayerId(0)).terraform_rating, before + 1);
    }

    #[test]
    fn test_check_fails_when_oceans_maxed() {
        let mut game = game(1);
        game.state_mut().place_ocean(PlayerId(1), SpaceId(0)).unwrap();

        let action = PlaceOceanTile::new(PlayerId(0));
        assert!(action.check(&game).is_err());
    }
}
