//! Turn driver.
//!
//! `Game` owns the state and runs the resolution protocol: it plays a
//! card, presents any question the effect raises to the responsible
//! player, routes answers back into the question's continuation, and
//! drains the deferred queue once the direct chain bottoms out.
//!
//! ## Protocol
//!
//! - At most one input is outstanding. Each one gets a fresh [`InputId`];
//!   an [`Answer`] must quote the id of the input it answers.
//! - A rejected answer leaves the same input outstanding under the same id.
//! - A turn action is finished only when no input is outstanding and the
//!   deferred queue is empty; then [`TurnStatus::Complete`] is returned.
//! - After an error the phase reflects what is left: `AwaitingInput` if an
//!   input is still outstanding, `Draining` if deferred actions remain
//!   queued (drain, skip or abort next), `Resolved` otherwise.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::cards::{CardName, CardType};
use crate::catalog::CardCatalog;
use crate::core::config::GameConfig;
use crate::core::entity::EntityId;
use crate::core::error::{GameError, GameResult, IneligibleAction, ProtocolMisuse};
use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::core::units::Resource;
use crate::deferred::{DeferredAction, DeferredActionQueue};
use crate::effects::{Card, EffectOutcome};
use crate::inputs::{InputResponse, InputView, PlayerInput};

/// Identifier of one emitted input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InputId(pub u32);

/// A player's answer to the outstanding input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub input_id: InputId,
    pub response: InputResponse,
}

impl Answer {
    #[must_use]
    pub fn new(input_id: InputId, response: InputResponse) -> Self {
        Self { input_id, response }
    }
}

/// What the transport layer sees of the outstanding input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingView {
    pub id: InputId,
    pub player: PlayerId,
    pub input: InputView,
}

impl PendingView {
    /// Build an answer to this input.
    #[must_use]
    pub fn answer(&self, response: InputResponse) -> Answer {
        Answer::new(self.id, response)
    }
}

/// Where the current card play stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayPhase {
    NotStarted,
    AwaitingInput,
    Draining,
    Resolved,
    /// Eligibility failed before anything changed.
    Rejected,
}

/// Result of driving the protocol one step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnStatus {
    /// Suspended until the given input is answered.
    AwaitingInput(PendingView),

    /// Direct chain and deferred queue are both empty.
    Complete,
}

impl TurnStatus {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self, TurnStatus::Complete)
    }

    #[must_use]
    pub fn pending(&self) -> Option<&PendingView> {
        match self {
            TurnStatus::AwaitingInput(view) => Some(view),
            TurnStatus::Complete => None,
        }
    }
}

struct PendingInput {
    id: InputId,
    player: PlayerId,
    input: PlayerInput,
}

/// Single-threaded game driver.
pub struct Game {
    state: GameState,
    deferred: DeferredActionQueue,
    catalog: Arc<CardCatalog>,
    pending: Option<PendingInput>,
    phase: PlayPhase,
    next_input_id: u32,
}

impl Game {
    pub fn new(config: GameConfig, catalog: Arc<CardCatalog>) -> Self {
        Self {
            state: GameState::new(config),
            deferred: DeferredActionQueue::new(),
            catalog,
            pending: None,
            phase: PlayPhase::NotStarted,
            next_input_id: 0,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<CardCatalog> {
        &self.catalog
    }

    #[must_use]
    pub fn phase(&self) -> PlayPhase {
        self.phase
    }

    #[must_use]
    pub fn deferred(&self) -> &DeferredActionQueue {
        &self.deferred
    }

    /// Schedule `action` behind everything already queued.
    pub fn defer(&mut self, action: impl DeferredAction + 'static) {
        self.deferred.push(Box::new(action));
    }

    #[must_use]
    pub fn has_pending_input(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn pending_view(&self) -> Option<PendingView> {
        self.pending.as_ref().map(|p| PendingView {
            id: p.id,
            player: p.player,
            input: p.input.view(),
        })
    }

    // === Setup ===

    fn create_card(&mut self, name: &CardName, owner: Option<PlayerId>) -> GameResult<EntityId> {
        let catalog = Arc::clone(&self.catalog);
        Ok(catalog.instantiate(&mut self.state, name, owner)?)
    }

    /// Put a new instance of `name` into `player`'s hand.
    pub fn give_card(&mut self, player: PlayerId, name: impl Into<CardName>) -> GameResult<EntityId> {
        let id = self.create_card(&name.into(), Some(player))?;
        self.state.add_to_hand(player, id);
        Ok(id)
    }

    /// Put a new instance of `name` straight into `player`'s tableau.
    pub fn place_in_tableau(
        &mut self,
        player: PlayerId,
        name: impl Into<CardName>,
    ) -> GameResult<EntityId> {
        let id = self.create_card(&name.into(), Some(player))?;
        self.state.play_to_tableau(player, id);
        Ok(id)
    }

    /// Put a new instance of `name` on top of the project deck.
    pub fn add_to_deck(&mut self, name: impl Into<CardName>) -> GameResult<EntityId> {
        let id = self.create_card(&name.into(), None)?;
        self.state.add_to_deck(id);
        Ok(id)
    }

    fn card_behavior(&self, entity: EntityId) -> GameResult<Arc<dyn Card>> {
        let instance = self
            .state
            .card(entity)
            .ok_or(ProtocolMisuse::UnknownInstance(entity))?;
        let card = self
            .catalog
            .get(instance.name())
            .ok_or_else(|| ProtocolMisuse::UnknownCard(instance.name().to_string()))?;
        Ok(Arc::clone(card))
    }

    fn ensure_idle(&self) -> GameResult<()> {
        if self.pending.is_some() {
            return Err(ProtocolMisuse::InputOutstanding.into());
        }
        if !self.deferred.is_empty() {
            return Err(ProtocolMisuse::QueueNotEmpty.into());
        }
        Ok(())
    }

    /// Give `player` the corporation `name`: starting megacredits first,
    /// then its play effect.
    ///
    /// Only corporation cards qualify, and each player gets one.
    pub fn choose_corporation(
        &mut self,
        player: PlayerId,
        name: impl Into<CardName>,
    ) -> GameResult<TurnStatus> {
        self.ensure_idle()?;
        let name = name.into();
        if self.state.player(player).corporation.is_some() {
            return Err(IneligibleAction::CorporationAlreadyChosen { player }.into());
        }
        let card_type = self
            .catalog
            .get(&name)
            .ok_or_else(|| ProtocolMisuse::UnknownCard(name.to_string()))?
            .definition()
            .card_type();
        if card_type != CardType::Corporation {
            return Err(IneligibleAction::NotACorporation {
                card: name.to_string(),
            }
            .into());
        }

        let id = self.create_card(&name, Some(player))?;
        let card = self.card_behavior(id)?;

        let starting = card.definition().starting_megacredits();
        self.state.player_mut(player).corporation = Some(id);
        self.state
            .gain(player, Resource::MegaCredits, i32::try_from(starting).unwrap_or(i32::MAX));
        log::info!("{player} chose {} with {starting} MC", card.name());

        self.phase = PlayPhase::NotStarted;
        let outcome = card.play(player, self).map_err(|err| self.settle(err))?;
        self.continue_with(player, outcome)
    }

    // === Turn protocol ===

    /// Play `entity` from `player`'s hand.
    ///
    /// Eligibility is checked before anything changes; a failure leaves the
    /// play [`Rejected`](PlayPhase::Rejected). Then the cost is paid, the
    /// card moves to the tableau and its effect runs.
    ///
    /// An error from the effect itself is returned as is. Payment and the
    /// move to the tableau are not undone, nor is anything the effect
    /// changed before failing.
    pub fn play_card(&mut self, player: PlayerId, entity: EntityId) -> GameResult<TurnStatus> {
        self.ensure_idle()?;
        let active = self.state.active_player;
        if player != active {
            return Err(ProtocolMisuse::NotCurrentTurn { active, got: player }.into());
        }
        if !self.state.player(player).hand.contains(&entity) {
            return Err(IneligibleAction::CardNotInHand { player, card: entity }.into());
        }
        let card = self.card_behavior(entity)?;
        self.phase = PlayPhase::NotStarted;

        if !card.can_play(player, self) {
            self.phase = PlayPhase::Rejected;
            log::info!("{player} cannot play {}", card.name());
            return Err(IneligibleAction::CannotPlay {
                card: card.name().to_string(),
            }
            .into());
        }

        let cost = i32::try_from(card.definition().cost()).unwrap_or(i32::MAX);
        if let Err(err) = self.state.spend(player, Resource::MegaCredits, cost) {
            self.phase = PlayPhase::Rejected;
            return Err(err.into());
        }
        self.state.remove_from_hand(player, entity);
        self.state.play_to_tableau(player, entity);
        log::info!("{player} played {} for {cost} MC", card.name());

        let outcome = card.play(player, self).map_err(|err| self.settle(err))?;
        self.continue_with(player, outcome)
    }

    /// Answer the outstanding input.
    pub fn submit(&mut self, player: PlayerId, answer: Answer) -> GameResult<TurnStatus> {
        let pending = self.pending.as_ref().ok_or(ProtocolMisuse::NoInputOutstanding)?;
        if pending.player != player {
            return Err(ProtocolMisuse::WrongPlayer {
                expected: pending.player,
                got: player,
            }
            .into());
        }
        if pending.id != answer.input_id {
            return Err(ProtocolMisuse::StaleInput {
                expected: pending.id.0,
                got: answer.input_id.0,
            }
            .into());
        }

        let Some(mut pending) = self.pending.take() else {
            return Err(ProtocolMisuse::NoInputOutstanding.into());
        };
        match pending.input.resolve(self, answer.response) {
            Err(err) => {
                if pending.input.is_consumed() {
                    log::warn!("input {} failed after resolving: {err}", pending.id.0);
                    return Err(self.settle(err));
                }
                log::warn!("rejected answer to input {}: {err}", pending.id.0);
                self.pending = Some(pending);
                Err(err)
            }
            Ok(EffectOutcome::AwaitingInput(next)) => Ok(self.emit(pending.player, next)),
            // A sequence that advanced but has members left.
            Ok(EffectOutcome::Done) if !pending.input.is_consumed() => {
                Ok(self.emit(pending.player, pending.input))
            }
            Ok(EffectOutcome::Done) => self.drain_deferred(),
        }
    }

    /// Run queued deferred actions head-first until one asks a question or
    /// the queue is empty.
    ///
    /// A failed precondition leaves the action at the head and returns
    /// [`IneligibleAction::DeferredPrecondition`]; follow up with
    /// [`skip_deferred`](Self::skip_deferred) or
    /// [`abort_deferred`](Self::abort_deferred).
    pub fn drain_deferred(&mut self) -> GameResult<TurnStatus> {
        if self.pending.is_some() {
            return Err(ProtocolMisuse::InputOutstanding.into());
        }
        self.phase = PlayPhase::Draining;

        while let Some(head) = self.deferred.peek() {
            if let Err(reason) = head.check(self) {
                log::warn!("deferred '{}' is ineligible: {reason}", head.description());
                return Err(IneligibleAction::DeferredPrecondition {
                    action: head.description().to_string(),
                    reason,
                }
                .into());
            }
            let Some(action) = self.deferred.pop_front() else {
                break;
            };
            let player = action.player();
            log::debug!("running deferred '{}' for {player}", action.description());
            let outcome = action.execute(self).map_err(|err| self.settle(err))?;
            if let EffectOutcome::AwaitingInput(input) = outcome {
                return Ok(self.emit(player, input));
            }
        }

        self.phase = PlayPhase::Resolved;
        log::debug!("action chain resolved");
        Ok(TurnStatus::Complete)
    }

    /// Drop the head deferred action and keep draining.
    pub fn skip_deferred(&mut self) -> GameResult<TurnStatus> {
        if self.pending.is_some() {
            return Err(ProtocolMisuse::InputOutstanding.into());
        }
        self.deferred.skip_next();
        self.drain_deferred()
    }

    /// Discard every deferred action owned by `player` and keep draining
    /// the rest.
    pub fn abort_deferred(&mut self, player: PlayerId) -> GameResult<TurnStatus> {
        if self.pending.is_some() {
            return Err(ProtocolMisuse::InputOutstanding.into());
        }
        self.deferred.clear_player(player);
        self.drain_deferred()
    }

    /// Pass the turn to the next player. A new generation starts when the
    /// turn wraps around to the first player.
    pub fn end_turn(&mut self) -> GameResult<PlayerId> {
        self.ensure_idle()?;
        let next = self.state.active_player.next(self.state.player_count());
        if next.index() == 0 {
            self.state.generation += 1;
            log::info!("generation {} begins", self.state.generation);
        }
        self.state.active_player = next;
        self.phase = PlayPhase::NotStarted;
        Ok(next)
    }

    fn continue_with(&mut self, player: PlayerId, outcome: EffectOutcome) -> GameResult<TurnStatus> {
        match outcome {
            EffectOutcome::AwaitingInput(input) => Ok(self.emit(player, input)),
            EffectOutcome::Done => self.drain_deferred(),
        }
    }

    /// Bring the phase in line with what an error left behind.
    fn settle(&mut self, err: GameError) -> GameError {
        self.phase = if self.pending.is_some() {
            PlayPhase::AwaitingInput
        } else if !self.deferred.is_empty() {
            PlayPhase::Draining
        } else {
            PlayPhase::Resolved
        };
        err
    }

    fn emit(&mut self, player: PlayerId, input: PlayerInput) -> TurnStatus {
        let id = InputId(self.next_input_id);
        self.next_input_id += 1;
        log::debug!("input {} for {player}: '{}'", id.0, input.title());

        let view = PendingView {
            id,
            player,
            input: input.view(),
        };
        self.pending = Some(PendingInput { id, player, input });
        self.phase = PlayPhase::AwaitingInput;
        TurnStatus::AwaitingInput(view)
    }
}
