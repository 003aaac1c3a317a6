//! Error taxonomy for the rules core.
//!
//! Four families, each with a different recovery policy:
//!
//! - [`DefinitionError`]: a card's static properties are structurally
//!   invalid. Fatal at registration time.
//! - [`InvalidAnswer`]: an answer violates the constraints of the
//!   outstanding input. Recoverable: the input stays outstanding.
//! - [`IneligibleAction`]: an effect or deferred action was invoked while
//!   its precondition does not hold. The turn driver decides whether to
//!   skip the action or abort the turn.
//! - [`ProtocolMisuse`]: the driver broke the one-input-at-a-time protocol.
//!   Always a logic error in the caller.

use thiserror::Error;

use super::board::SpaceId;
use super::entity::EntityId;
use super::player::PlayerId;
use super::units::Resource;

/// A card definition failed validation on first registration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DefinitionError {
    #[error("{card}: corporation cards must define starting megacredits")]
    MissingStartingMegaCredits { card: String },

    #[error("{card}: must have a cost property")]
    MissingCost { card: String },
}

/// An answer that does not satisfy the outstanding input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidAnswer {
    #[error("response does not match input shape, expected {expected}")]
    WrongResponseType { expected: &'static str },

    #[error("selected {got} items, must select between {min} and {max}")]
    SelectionSize { min: usize, max: usize, got: usize },

    #[error("selection contains an item that was not offered")]
    NotACandidate,

    #[error("selection contains the same item twice")]
    DuplicateSelection,

    #[error("selection rejected: {reason}")]
    RejectedSelection { reason: String },

    #[error("amount {got} outside [{min}, {max}]")]
    AmountOutOfRange { min: i64, max: i64, got: i64 },

    #[error("option {index} does not exist, {count} options offered")]
    UnknownOption { index: usize, count: usize },
}

/// An action whose precondition does not hold.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IneligibleAction {
    #[error("{card} cannot be played now")]
    CannotPlay { card: String },

    #[error("deferred action '{action}' cannot run: {reason}")]
    DeferredPrecondition { action: String, reason: String },

    #[error("{player} needs {needed} {resource:?}, has {available}")]
    InsufficientResources {
        player: PlayerId,
        resource: Resource,
        needed: i32,
        available: i32,
    },

    #[error("{card} is not in {player}'s hand")]
    CardNotInHand { player: PlayerId, card: EntityId },

    #[error("{card} cannot hold resources")]
    NoResourceHolder { card: EntityId },

    #[error("{space} cannot take an ocean tile")]
    SpaceUnavailable { space: SpaceId },

    #[error("all ocean tiles are already placed")]
    OceansMaxed,

    #[error("{card} is not a corporation")]
    NotACorporation { card: String },

    #[error("{player} already has a corporation")]
    CorporationAlreadyChosen { player: PlayerId },
}

/// The driver used the input protocol incorrectly.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ProtocolMisuse {
    #[error("input has already been resolved")]
    AlreadyConsumed,

    #[error("answer targets input {got}, but input {expected} is outstanding")]
    StaleInput { expected: u32, got: u32 },

    #[error("input belongs to {expected}, answered by {got}")]
    WrongPlayer { expected: PlayerId, got: PlayerId },

    #[error("another input is still outstanding")]
    InputOutstanding,

    #[error("no input is outstanding")]
    NoInputOutstanding,

    #[error("no card named {0} in the catalog")]
    UnknownCard(String),

    #[error("unknown card instance {0}")]
    UnknownInstance(EntityId),

    #[error("it is {active}'s turn, not {got}'s")]
    NotCurrentTurn { active: PlayerId, got: PlayerId },

    #[error("turn cannot end while deferred actions are queued")]
    QueueNotEmpty,
}

/// Umbrella error returned by effects, inputs and the turn driver.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Definition(#[from] DefinitionError),

    #[error(transparent)]
    InvalidAnswer(#[from] InvalidAnswer),

    #[error(transparent)]
    Ineligible(#[from] IneligibleAction),

    #[error(transparent)]
    Protocol(#[from] ProtocolMisuse),
}

impl GameError {
    /// Whether the caller may retry with a different answer.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GameError::InvalidAnswer(_) | GameError::Ineligible(_))
    }
}

/// Result alias used throughout the crate.
pub type GameResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_error_names_card() {
        let err = DefinitionError::MissingCost { card: "Large Convoy".into() };
        assert_eq!(err.to_string(), "Large Convoy: must have a cost property");
    }

    #[test]
    fn test_from_conversions() {
        let err: GameError = InvalidAnswer::NotACandidate.into();
        assert!(matches!(err, GameError::InvalidAnswer(InvalidAnswer::NotACandidate)));

        let err: GameError = ProtocolMisuse::AlreadyConsumed.into();
        assert!(matches!(err, GameError::Protocol(ProtocolMisuse::AlreadyConsumed)));
    }

    #[test]
    fn test_recoverability() {
        assert!(GameError::from(InvalidAnswer::NotACandidate).is_recoverable());
        assert!(GameError::from(IneligibleAction::OceansMaxed).is_recoverable());
        assert!(!GameError::from(ProtocolMisuse::AlreadyConsumed).is_recoverable());
        assert!(!GameError::from(DefinitionError::MissingCost { card: "X".into() }).is_recoverable());
    }

    #[test]
    fn test_transparent_display() {
        let err: GameError = InvalidAnswer::AmountOutOfRange { min: 1, max: 3, got: 5 }.into();
        assert_eq!(err.to_string(), "amount 5 outside [1, 3]");
    }
}
