//! Mutually exclusive alternatives.

use super::response::{InputResponse, InputView};
use super::PlayerInput;
use crate::core::error::{GameResult, InvalidAnswer, ProtocolMisuse};
use crate::core::state::GameState;
use crate::effects::{EffectOutcome, EffectResult};
use crate::rules::Game;

pub const DEFAULT_OR_TITLE: &str = "Select one option";

/// Exactly one branch is answered; the others are discarded unresolved.
pub struct OrOptions {
    title: String,
    button_label: String,
    options: Option<Vec<PlayerInput>>,
}

impl OrOptions {
    pub fn new(options: Vec<PlayerInput>) -> Self {
        Self {
            title: DEFAULT_OR_TITLE.to_string(),
            button_label: "Confirm".to_string(),
            options: Some(options),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_button_label(mut self, label: impl Into<String>) -> Self {
        self.button_label = label.into();
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The branches still on offer. Empty once resolved.
    #[must_use]
    pub fn options(&self) -> &[PlayerInput] {
        self.options.as_deref().unwrap_or(&[])
    }

    #[must_use]
    pub fn is_consumed(&self) -> bool {
        self.options.is_none()
    }

    #[must_use]
    pub fn view(&self) -> InputView {
        InputView::Or {
            title: self.title.clone(),
            button_label: self.button_label.clone(),
            options: self.options().iter().map(PlayerInput::view).collect(),
        }
    }

    pub fn validate(&self, state: &GameState, response: &InputResponse) -> GameResult<()> {
        let options = self
            .options
            .as_ref()
            .ok_or(ProtocolMisuse::AlreadyConsumed)?;
        let InputResponse::Or { index, response } = response else {
            return Err(InvalidAnswer::WrongResponseType { expected: "or" }.into());
        };
        let chosen = options.get(*index).ok_or(InvalidAnswer::UnknownOption {
            index: *index,
            count: options.len(),
        })?;
        chosen.validate(state, response)
    }

    /// Resolve the chosen branch. Sibling branches are dropped without
    /// running, so none of their side effects happen.
    pub fn resolve(&mut self, game: &mut Game, response: InputResponse) -> EffectResult {
        self.validate(game.state(), &response)?;
        let InputResponse::Or { index, response } = response else {
            return Err(InvalidAnswer::WrongResponseType { expected: "or" }.into());
        };
        let options = self.options.take().ok_or(ProtocolMisuse::AlreadyConsumed)?;
        let count = options.len();
        let mut chosen = options
            .into_iter()
            .nth(index)
            .ok_or(InvalidAnswer::UnknownOption { index, count })?;

        log::debug!("'{}' took branch {} '{}'", self.title, index, chosen.title());
        match chosen.resolve(game, *response)? {
            EffectOutcome::Done if !chosen.is_consumed() => Ok(EffectOutcome::AwaitingInput(chosen)),
            outcome => Ok(outcome),
        }
    }
}
