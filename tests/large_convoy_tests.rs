//! Large Convoy end-to-end tests.
//!
//! These tests play the card through the driver:
//! - No animal holder: plants directly, ocean still deferred
//! - One holder: the alternative names it, no further selection
//! - Several holders: the alternative asks for a card
//! - Eligibility under a policy surcharge

use std::sync::Arc;

use mars_rules::catalog::{LargeConvoy, Pets, Tardigrades};
use mars_rules::inputs::{InputResponse, InputView};
use mars_rules::{
    CardCatalog, Game, GameConfig, GameError, IneligibleAction, PlayPhase, PlayerId, Resource,
    SpaceId, StaticPropertyRegistry, Tag, TurnStatus,
};

const P0: PlayerId = PlayerId(0);

fn new_game(config: GameConfig) -> Game {
    let mut registry = StaticPropertyRegistry::new();
    let catalog = CardCatalog::standard(&mut registry).expect("standard catalog is valid");
    let mut game = Game::new(config, Arc::new(catalog));
    for _ in 0..3 {
        game.add_to_deck(Tardigrades::NAME).unwrap();
    }
    game.state_mut().gain(P0, Resource::MegaCredits, 40);
    game
}

fn ocean_answer(game: &Game, status: &TurnStatus) -> (PlayerId, mars_rules::Answer) {
    let view = status.pending().expect("ocean placement pending");
    assert!(matches!(view.input, InputView::Spaces { .. }));
    let space = game.state().board().available_ocean_spaces()[0];
    (view.player, view.answer(InputResponse::spaces([space])))
}

#[test]
fn test_no_animal_cards_gains_plants_directly() {
    let mut game = new_game(GameConfig::default());
    let convoy = game.give_card(P0, LargeConvoy::NAME).unwrap();
    let tr = game.state().player(P0).terraform_rating;

    let status = game.play_card(P0, convoy).unwrap();

    // The alternative is skipped: plants are already in, the ocean is next.
    let player = game.state().player(P0);
    assert_eq!(player.resources.plants, 5);
    assert_eq!(player.resources.megacredits, 4);
    assert_eq!(player.hand.len(), 2);
    assert!(player.tableau.contains(&convoy));
    assert_eq!(game.state().deck_size(), 1);

    let (owner, answer) = ocean_answer(&game, &status);
    assert_eq!(owner, P0);
    let status = game.submit(P0, answer).unwrap();

    assert!(status.is_complete());
    assert_eq!(game.phase(), PlayPhase::Resolved);
    assert_eq!(game.state().player(P0).terraform_rating, tr + 1);
    assert_eq!(game.state().board().oceans_placed(), 1);
}

#[test]
fn test_single_animal_card_is_named_in_option() {
    let mut game = new_game(GameConfig::default());
    let pets = game.place_in_tableau(P0, Pets::NAME).unwrap();
    let convoy = game.give_card(P0, LargeConvoy::NAME).unwrap();

    let status = game.play_card(P0, convoy).unwrap();
    let view = status.pending().unwrap().clone();
    let InputView::Or { options, .. } = &view.input else {
        panic!("expected an alternative, got {:?}", view.input);
    };
    let titles: Vec<_> = options.iter().map(InputView::title).collect();
    assert_eq!(titles, vec!["Gain 5 plants", "Add 4 animals to Pets"]);
    assert!(matches!(options[1], InputView::Option { .. }));

    // The ocean placement waits until the alternative resolves.
    assert_eq!(game.deferred().len(), 0);
    assert_eq!(game.state().board().oceans_placed(), 0);

    let status = game
        .submit(P0, view.answer(InputResponse::or(1, InputResponse::Option)))
        .unwrap();

    assert_eq!(game.state().card(pets).unwrap().resources, 4);
    assert_eq!(game.state().player(P0).resources.plants, 0);

    let (_, answer) = ocean_answer(&game, &status);
    assert!(game.submit(P0, answer).unwrap().is_complete());
    assert_eq!(game.state().board().oceans_placed(), 1);
}

#[test]
fn test_choosing_plants_with_animal_cards_present() {
    let mut game = new_game(GameConfig::default());
    let pets = game.place_in_tableau(P0, Pets::NAME).unwrap();
    let convoy = game.give_card(P0, LargeConvoy::NAME).unwrap();

    let view = game.play_card(P0, convoy).unwrap().pending().unwrap().clone();
    let status = game
        .submit(P0, view.answer(InputResponse::or(0, InputResponse::Option)))
        .unwrap();

    assert_eq!(game.state().player(P0).resources.plants, 5);
    assert_eq!(game.state().card(pets).unwrap().resources, 0);

    let (_, answer) = ocean_answer(&game, &status);
    assert!(game.submit(P0, answer).unwrap().is_complete());
}

#[test]
fn test_several_animal_cards_ask_for_selection() {
    let mut game = new_game(GameConfig::default());
    let first = game.place_in_tableau(P0, Pets::NAME).unwrap();
    let second = game.place_in_tableau(P0, Pets::NAME).unwrap();
    // Microbe holders are not candidates.
    game.place_in_tableau(P0, Tardigrades::NAME).unwrap();
    let convoy = game.give_card(P0, LargeConvoy::NAME).unwrap();

    let view = game.play_card(P0, convoy).unwrap().pending().unwrap().clone();
    let InputView::Or { options, .. } = &view.input else {
        panic!("expected an alternative");
    };
    assert_eq!(
        options[1],
        InputView::Cards {
            title: "Select card to add 4 animals".into(),
            button_label: "Add animals".into(),
            cards: vec![first, second],
            min: 1,
            max: 1,
        }
    );

    // Both cards at once is out of bounds; the question stays open.
    let err = game
        .submit(
            P0,
            view.answer(InputResponse::or(1, InputResponse::cards([first, second]))),
        )
        .unwrap_err();
    assert!(err.is_recoverable());
    assert_eq!(game.pending_view().map(|v| v.id), Some(view.id));

    let status = game
        .submit(P0, view.answer(InputResponse::or(1, InputResponse::cards([second]))))
        .unwrap();
    assert_eq!(game.state().card(first).unwrap().resources, 0);
    assert_eq!(game.state().card(second).unwrap().resources, 4);

    let (_, answer) = ocean_answer(&game, &status);
    assert!(game.submit(P0, answer).unwrap().is_complete());
}

#[test]
fn test_unknown_option_keeps_input() {
    let mut game = new_game(GameConfig::default());
    game.place_in_tableau(P0, Pets::NAME).unwrap();
    let convoy = game.give_card(P0, LargeConvoy::NAME).unwrap();

    let view = game.play_card(P0, convoy).unwrap().pending().unwrap().clone();
    let err = game
        .submit(P0, view.answer(InputResponse::or(2, InputResponse::Option)))
        .unwrap_err();

    assert!(matches!(err, GameError::InvalidAnswer(_)));
    assert_eq!(game.phase(), PlayPhase::AwaitingInput);
    assert_eq!(game.pending_view(), Some(view));
}

#[test]
fn test_surcharge_blocks_unaffordable_play() {
    let mut game = new_game(GameConfig::default());
    game.state_mut().policy_surcharge = Some(6);
    let convoy = game.give_card(P0, LargeConvoy::NAME).unwrap();

    let err = game.play_card(P0, convoy).unwrap_err();
    assert_eq!(
        err,
        GameError::Ineligible(IneligibleAction::CannotPlay {
            card: LargeConvoy::NAME.into()
        })
    );
    assert_eq!(game.phase(), PlayPhase::Rejected);

    // Nothing changed.
    let player = game.state().player(P0);
    assert_eq!(player.resources.megacredits, 40);
    assert!(player.hand.contains(&convoy));
    assert_eq!(game.state().deck_size(), 3);

    game.state_mut().gain(P0, Resource::MegaCredits, 2);
    assert!(game.play_card(P0, convoy).is_ok());
}

#[test]
fn test_surcharge_ignored_when_oceans_maxed() {
    let mut game = new_game(GameConfig::default().with_max_oceans(1));
    game.state_mut().policy_surcharge = Some(6);
    game.state_mut().place_ocean(PlayerId(1), SpaceId(0)).unwrap();
    let convoy = game.give_card(P0, LargeConvoy::NAME).unwrap();

    // Playable, but the deferred ocean can no longer be placed.
    let err = game.play_card(P0, convoy).unwrap_err();
    assert!(matches!(
        err,
        GameError::Ineligible(IneligibleAction::DeferredPrecondition { .. })
    ));
    assert_eq!(game.state().player(P0).resources.plants, 5);

    assert!(game.skip_deferred().unwrap().is_complete());
}

#[test]
fn test_insufficient_megacredits_rejected() {
    let mut game = new_game(GameConfig::default());
    game.state_mut().player_mut(P0).resources.megacredits = 10;
    let convoy = game.give_card(P0, LargeConvoy::NAME).unwrap();

    let err = game.play_card(P0, convoy).unwrap_err();
    assert!(matches!(
        err,
        GameError::Ineligible(IneligibleAction::InsufficientResources { needed: 36, available: 10, .. })
    ));
    assert_eq!(game.phase(), PlayPhase::Rejected);
    assert!(game.state().player(P0).hand.contains(&convoy));
}

#[test]
fn test_played_event_tags_do_not_count() {
    let mut game = new_game(GameConfig::default());
    let convoy = game.give_card(P0, LargeConvoy::NAME).unwrap();
    let status = game.play_card(P0, convoy).unwrap();
    let (_, answer) = ocean_answer(&game, &status);
    game.submit(P0, answer).unwrap();

    assert_eq!(game.state().tag_count(P0, Tag::Earth), 0);
    assert_eq!(
        game.state().card(convoy).unwrap().definition().victory_points(),
        2
    );
}

#[test]
fn test_card_not_in_hand() {
    let mut game = new_game(GameConfig::default());
    let convoy = game.place_in_tableau(P0, LargeConvoy::NAME).unwrap();

    let err = game.play_card(P0, convoy).unwrap_err();
    assert_eq!(
        err,
        GameError::Ineligible(IneligibleAction::CardNotInHand { player: P0, card: convoy })
    );
}
