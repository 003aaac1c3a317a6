//! Numeric amount within bounds.

use super::response::{InputResponse, InputView};
use crate::core::error::{GameResult, InvalidAnswer, ProtocolMisuse};
use crate::effects::EffectResult;
use crate::rules::Game;

pub type AmountCallback = Box<dyn FnOnce(&mut Game, i64) -> EffectResult>;

/// Choose an integer in `[min, max]`.
pub struct SelectAmount {
    title: String,
    button_label: String,
    min: i64,
    max: i64,
    on_select: Option<AmountCallback>,
}

impl SelectAmount {
    pub fn new(
        title: impl Into<String>,
        button_label: impl Into<String>,
        min: i64,
        max: i64,
        on_select: impl FnOnce(&mut Game, i64) -> EffectResult + 'static,
    ) -> Self {
        Self {
            title: title.into(),
            button_label: button_label.into(),
            min,
            max,
            on_select: Some(Box::new(on_select)),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn bounds(&self) -> (i64, i64) {
        (self.min, self.max)
    }

    #[must_use]
    pub fn is_consumed(&self) -> bool {
        self.on_select.is_none()
    }

    #[must_use]
    pub fn view(&self) -> InputView {
        InputView::Amount {
            title: self.title.clone(),
            button_label: self.button_label.clone(),
            min: self.min,
            max: self.max,
        }
    }

    pub fn validate(&self, response: &InputResponse) -> GameResult<()> {
        if self.is_consumed() {
            return Err(ProtocolMisuse::AlreadyConsumed.into());
        }
        match *response {
            InputResponse::Amount { amount } if (self.min..=self.max).contains(&amount) => Ok(()),
            InputResponse::Amount { amount } => Err(InvalidAnswer::AmountOutOfRange {
                min: self.min,
                max: self.max,
                got: amount,
            }
            .into()),
            _ => Err(InvalidAnswer::WrongResponseType { expected: "amount" }.into()),
        }
    }

    pub fn resolve(&mut self, game: &mut Game, response: InputResponse) -> EffectResult {
        self.validate(&response)?;
        let InputResponse::Amount { amount } = response else {
            return Err(InvalidAnswer::WrongResponseType { expected: "amount" }.into());
        };
        let on_select = self
            .on_select
            .take()
            .ok_or(ProtocolMisuse::AlreadyConsumed)?;
        log::debug!("'{}' resolved with {}", self.title, amount);
        on_select(game, amount)
    }
}
