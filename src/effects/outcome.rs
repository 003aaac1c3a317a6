//! Effect outcomes.

use crate::core::error::GameError;
use crate::inputs::PlayerInput;

/// What an effect left behind.
#[derive(Debug)]
pub enum EffectOutcome {
    /// Fully resolved.
    Done,

    /// Paused on a question. Resolving the input resumes the effect.
    AwaitingInput(PlayerInput),
}

impl EffectOutcome {
    #[must_use]
    pub fn is_done(&self) -> bool {
        matches!(self, EffectOutcome::Done)
    }

    /// The pending question, if any.
    #[must_use]
    pub fn into_input(self) -> Option<PlayerInput> {
        match self {
            EffectOutcome::Done => None,
            EffectOutcome::AwaitingInput(input) => Some(input),
        }
    }
}

impl From<PlayerInput> for EffectOutcome {
    fn from(input: PlayerInput) -> Self {
        EffectOutcome::AwaitingInput(input)
    }
}

impl From<Option<PlayerInput>> for EffectOutcome {
    fn from(input: Option<PlayerInput>) -> Self {
        input.map_or(EffectOutcome::Done, EffectOutcome::AwaitingInput)
    }
}

/// Result of running an effect or continuation.
pub type EffectResult = Result<EffectOutcome, GameError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::SelectOption;

    #[test]
    fn test_outcome_from_option() {
        assert!(EffectOutcome::from(None).is_done());

        let input = SelectOption::new("Confirm", "OK", |_| Ok(EffectOutcome::Done));
        let outcome = EffectOutcome::from(Some(PlayerInput::from(input)));
        assert!(!outcome.is_done());
        assert_eq!(outcome.into_input().map(|i| i.title().to_string()), Some("Confirm".into()));
    }
}
