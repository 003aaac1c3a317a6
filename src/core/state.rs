//! Game state: the shared aggregate mutated by card effects.
//!
//! ## PlayerState
//!
//! Per-seat stock, production, terraform rating, hand and tableau.
//!
//! ## GameState
//!
//! Everything a card effect may touch:
//! - Player states
//! - Card instances by entity ID, and the shared project deck
//! - The board
//! - Generation counter and active player
//! - RNG
//!
//! The turn driver owns the `GameState`. Effects, inputs and deferred
//! actions receive borrows of it for the duration of one call and never
//! keep a copy.

use rustc_hash::FxHashMap;

use super::board::{Board, SpaceId};
use super::config::{GameConfig, OCEAN_TR_BONUS};
use super::entity::{EntityAllocator, EntityId};
use super::error::IneligibleAction;
use super::player::{PlayerId, PlayerMap};
use super::rng::GameRng;
use super::units::{Resource, Units};
use crate::cards::{CardInstance, CardType, ResourceType, Tag};

/// One player's public and private state.
#[derive(Clone, Debug, Default)]
pub struct PlayerState {
    /// Resource stock.
    pub resources: Units,

    /// Production levels.
    pub production: Units,

    pub terraform_rating: i32,

    /// Cards in hand.
    pub hand: Vec<EntityId>,

    /// Cards played, in play order. Includes events.
    pub tableau: Vec<EntityId>,

    pub corporation: Option<EntityId>,
}

/// Full game state.
pub struct GameState {
    config: GameConfig,

    players: PlayerMap<PlayerState>,

    /// Card instances by entity ID.
    cards: FxHashMap<EntityId, CardInstance>,

    /// Shared project deck (top = end of vec).
    deck: Vec<EntityId>,

    board: Board,

    /// Generation number (starts at 1).
    pub generation: u32,

    /// Seat whose turn it is.
    pub active_player: PlayerId,

    /// Extra megacredits a ruling political policy charges per
    /// terraforming step. Set by the political subsystem; `None` when no
    /// such policy is in force.
    pub policy_surcharge: Option<u32>,

    /// Deterministic RNG.
    pub rng: GameRng,

    ids: EntityAllocator,
}

impl GameState {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let starting_tr = config.starting_terraform_rating;
        Self {
            players: PlayerMap::new(config.player_count, |_| PlayerState {
                terraform_rating: starting_tr,
                ..PlayerState::default()
            }),
            cards: FxHashMap::default(),
            deck: Vec::new(),
            board: Board::new(config.max_ocean_tiles, config.land_spaces),
            generation: 1,
            active_player: PlayerId::new(0),
            policy_surcharge: None,
            rng: GameRng::new(config.seed),
            ids: EntityAllocator::default(),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerState {
        &self.players[player]
    }

    pub fn player_mut(&mut self, player: PlayerId) -> &mut PlayerState {
        &mut self.players[player]
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    // === Cards ===

    pub fn alloc_entity(&mut self) -> EntityId {
        self.ids.next_id()
    }

    /// Store a card instance. It is not in any hand, deck or tableau yet.
    pub fn insert_card(&mut self, card: CardInstance) -> EntityId {
        let id = card.entity_id;
        self.cards.insert(id, card);
        id
    }

    #[must_use]
    pub fn card(&self, id: EntityId) -> Option<&CardInstance> {
        self.cards.get(&id)
    }

    pub fn card_mut(&mut self, id: EntityId) -> Option<&mut CardInstance> {
        self.cards.get_mut(&id)
    }

    // === Deck and hands ===

    /// Put a card on top of the project deck.
    pub fn add_to_deck(&mut self, id: EntityId) {
        self.deck.push(id);
    }

    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    pub fn shuffle_deck(&mut self) {
        self.rng.shuffle(&mut self.deck);
    }

    /// Draw up to `count` cards into `player`'s hand.
    ///
    /// Stops early when the deck runs out. Returns the drawn ids.
    pub fn draw_cards(&mut self, player: PlayerId, count: usize) -> Vec<EntityId> {
        let mut drawn = Vec::with_capacity(count);
        for _ in 0..count {
            let Some(id) = self.deck.pop() else {
                log::warn!("{player} tried to draw from an empty deck");
                break;
            };
            self.add_to_hand(player, id);
            drawn.push(id);
        }
        drawn
    }

    pub fn add_to_hand(&mut self, player: PlayerId, id: EntityId) {
        if let Some(card) = self.cards.get_mut(&id) {
            card.owner = Some(player);
        }
        self.players[player].hand.push(id);
    }

    /// Returns true if the card was found and removed.
    pub fn remove_from_hand(&mut self, player: PlayerId, id: EntityId) -> bool {
        let hand = &mut self.players[player].hand;
        if let Some(pos) = hand.iter().position(|&c| c == id) {
            hand.remove(pos);
            true
        } else {
            false
        }
    }

    pub fn play_to_tableau(&mut self, player: PlayerId, id: EntityId) {
        if let Some(card) = self.cards.get_mut(&id) {
            card.owner = Some(player);
        }
        self.players[player].tableau.push(id);
    }

    /// Tags in play for `player`. Event tags stop counting once played.
    #[must_use]
    pub fn tag_count(&self, player: PlayerId, tag: Tag) -> u32 {
        let state = &self.players[player];
        state
            .tableau
            .iter()
            .chain(state.corporation.iter())
            .filter_map(|id| self.cards.get(id))
            .filter(|card| card.card_type() != CardType::Event)
            .map(|card| card.tags().iter().filter(|&&t| t == tag).count() as u32)
            .sum()
    }

    /// Cards in `player`'s tableau that can hold `resource_type`.
    #[must_use]
    pub fn resource_cards(&self, player: PlayerId, resource_type: ResourceType) -> Vec<EntityId> {
        self.players[player]
            .tableau
            .iter()
            .copied()
            .filter(|id| self.cards.get(id).is_some_and(|c| c.holds(resource_type)))
            .collect()
    }

    /// Place `amount` resources on a card.
    pub fn add_resource_to(&mut self, id: EntityId, amount: i64) -> Result<(), IneligibleAction> {
        match self.cards.get_mut(&id) {
            Some(card) if card.resource_type().is_some() => {
                card.resources += amount;
                Ok(())
            }
            _ => Err(IneligibleAction::NoResourceHolder { card: id }),
        }
    }

    // === Resources ===

    pub fn gain(&mut self, player: PlayerId, resource: Resource, amount: i32) {
        self.players[player].resources.add(resource, amount);
    }

    /// Remove resources, failing without change if the stock is short.
    pub fn spend(
        &mut self,
        player: PlayerId,
        resource: Resource,
        amount: i32,
    ) -> Result<(), IneligibleAction> {
        let available = self.players[player].resources.get(resource);
        if available < amount {
            return Err(IneligibleAction::InsufficientResources {
                player,
                resource,
                needed: amount,
                available,
            });
        }
        self.players[player].resources.add(resource, -amount);
        Ok(())
    }

    #[must_use]
    pub fn can_afford(&self, player: PlayerId, megacredits: u32) -> bool {
        i64::from(self.players[player].resources.megacredits) >= i64::from(megacredits)
    }

    pub fn add_production(&mut self, player: PlayerId, delta: &Units) {
        self.players[player].production.add_all(delta);
    }

    pub fn raise_terraform_rating(&mut self, player: PlayerId, steps: i32) {
        self.players[player].terraform_rating += steps;
    }

    // === Board ===

    /// Place an ocean for `player`, raising their terraform rating.
    pub fn place_ocean(&mut self, player: PlayerId, space: SpaceId) -> Result<(), IneligibleAction> {
        self.board.place_ocean(space)?;
        self.raise_terraform_rating(player, OCEAN_TR_BONUS);
        log::debug!("{player} placed an ocean on {space}");
        Ok(())
    }
}
