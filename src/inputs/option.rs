//! Single labeled action.

use super::response::{InputResponse, InputView};
use crate::core::error::{GameResult, InvalidAnswer, ProtocolMisuse};
use crate::effects::EffectResult;
use crate::rules::Game;

/// Continuation run when an option is confirmed.
pub type OptionCallback = Box<dyn FnOnce(&mut Game) -> EffectResult>;

/// A labeled action answered by [`InputResponse::Option`].
///
/// On its own it is a confirmation; inside [`OrOptions`](super::OrOptions)
/// it is one mutually exclusive branch. A "decline" branch is just an
/// option whose continuation does nothing.
pub struct SelectOption {
    title: String,
    button_label: String,
    on_select: Option<OptionCallback>,
}

impl SelectOption {
    pub fn new(
        title: impl Into<String>,
        button_label: impl Into<String>,
        on_select: impl FnOnce(&mut Game) -> EffectResult + 'static,
    ) -> Self {
        Self {
            title: title.into(),
            button_label: button_label.into(),
            on_select: Some(Box::new(on_select)),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn is_consumed(&self) -> bool {
        self.on_select.is_none()
    }

    #[must_use]
    pub fn view(&self) -> InputView {
        InputView::Option {
            title: self.title.clone(),
            button_label: self.button_label.clone(),
        }
    }

    pub fn validate(&self, response: &InputResponse) -> GameResult<()> {
        if self.is_consumed() {
            return Err(ProtocolMisuse::AlreadyConsumed.into());
        }
        match response {
            InputResponse::Option => Ok(()),
            _ => Err(InvalidAnswer::WrongResponseType { expected: "option" }.into()),
        }
    }

    pub fn resolve(&mut self, game: &mut Game, response: InputResponse) -> EffectResult {
        self.validate(&response)?;
        let on_select = self
            .on_select
            .take()
            .ok_or(ProtocolMisuse::AlreadyConsumed)?;
        log::debug!("option '{}' selected", self.title);
        on_select(game)
    }
}
