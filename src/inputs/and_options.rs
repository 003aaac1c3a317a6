//! Sequential composition.

use super::response::{InputResponse, InputView};
use super::PlayerInput;
use crate::core::error::{GameResult, InvalidAnswer, ProtocolMisuse};
use crate::core::state::GameState;
use crate::effects::{EffectOutcome, EffectResult};
use crate::rules::Game;

/// Continuation run once every member has been answered. Receives one
/// response per member, in member order: the answer to the member itself.
/// Answers to follow-up questions a member chains are not included.
pub type AndCallback = Box<dyn FnOnce(&mut Game, Vec<InputResponse>) -> EffectResult>;

/// Answer every member, one at a time, in order.
///
/// Each response addresses the member under the cursor. A member that
/// chains a follow-up question is replaced in place by it, so the cursor
/// only moves once a member's whole chain is finished. Until the last
/// member finishes, resolving returns `Done` while the sequence itself
/// stays unconsumed; the driver re-presents it.
pub struct AndOptions {
    title: String,
    button_label: String,
    members: Vec<PlayerInput>,
    cursor: usize,
    responses: Vec<InputResponse>,
    on_complete: Option<AndCallback>,
}

impl AndOptions {
    pub fn new(
        members: Vec<PlayerInput>,
        on_complete: impl FnOnce(&mut Game, Vec<InputResponse>) -> EffectResult + 'static,
    ) -> Self {
        Self {
            title: String::new(),
            button_label: "Save".to_string(),
            members,
            cursor: 0,
            responses: Vec::new(),
            on_complete: Some(Box::new(on_complete)),
        }
    }

    /// Sequence with no completion work of its own.
    pub fn of(members: Vec<PlayerInput>) -> Self {
        Self::new(members, |_, _| Ok(EffectOutcome::Done))
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn members(&self) -> &[PlayerInput] {
        &self.members
    }

    /// The member the next response answers, if any remain.
    #[must_use]
    pub fn current(&self) -> Option<&PlayerInput> {
        self.members.get(self.cursor)
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn is_consumed(&self) -> bool {
        self.on_complete.is_none()
    }

    #[must_use]
    pub fn view(&self) -> InputView {
        InputView::And {
            title: self.title.clone(),
            button_label: self.button_label.clone(),
            members: self.members.iter().map(PlayerInput::view).collect(),
            current: self.cursor,
        }
    }

    pub fn validate(&self, state: &GameState, response: &InputResponse) -> GameResult<()> {
        if self.is_consumed() {
            return Err(ProtocolMisuse::AlreadyConsumed.into());
        }
        match self.current() {
            Some(member) => member.validate(state, response),
            // An empty sequence is confirmed like an option.
            None if *response == InputResponse::Option => Ok(()),
            None => Err(InvalidAnswer::WrongResponseType { expected: "option" }.into()),
        }
    }

    pub fn resolve(&mut self, game: &mut Game, response: InputResponse) -> EffectResult {
        self.validate(game.state(), &response)?;

        let cursor = self.cursor;
        if let Some(member) = self.members.get_mut(cursor) {
            let first_answer = self.responses.len() == cursor;
            let outcome = if first_answer {
                let outcome = member.resolve(game, response.clone())?;
                self.responses.push(response);
                outcome
            } else {
                member.resolve(game, response)?
            };
            match outcome {
                EffectOutcome::AwaitingInput(next) => {
                    self.members[cursor] = next;
                    return Ok(EffectOutcome::Done);
                }
                EffectOutcome::Done if !self.members[cursor].is_consumed() => {
                    return Ok(EffectOutcome::Done);
                }
                EffectOutcome::Done => self.cursor += 1,
            }
            if self.cursor < self.members.len() {
                log::debug!("'{}' advanced to member {}", self.title, self.cursor);
                return Ok(EffectOutcome::Done);
            }
        }

        let on_complete = self
            .on_complete
            .take()
            .ok_or(ProtocolMisuse::AlreadyConsumed)?;
        log::debug!("'{}' completed with {} members", self.title, self.responses.len());
        on_complete(game, std::mem::take(&mut self.responses))
    }
}
