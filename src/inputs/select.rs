//! Selection from a candidate set.
//!
//! One generic primitive covers cards, board spaces and players. The
//! candidate type decides which response shape answers it and how it is
//! rendered; bounds checking and the optional validity predicate are
//! shared.

use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::FxHashSet;

use super::response::{InputResponse, InputView};
use super::PlayerInput;
use crate::core::board::SpaceId;
use crate::core::entity::EntityId;
use crate::core::error::{GameResult, InvalidAnswer, ProtocolMisuse};
use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::effects::EffectResult;
use crate::rules::Game;

/// Continuation receiving the chosen subset, in the order it was given.
pub type SelectCallback<T> = Box<dyn FnOnce(&mut Game, Vec<T>) -> EffectResult>;

/// Extra validity rule over a whole selection. `Err` carries the reason.
pub type SelectionCheck<T> = Box<dyn Fn(&GameState, &[T]) -> Result<(), String>>;

/// Something that can be offered in a selection.
pub trait Candidate: Copy + Eq + Hash + Debug + 'static {
    /// Response shape name used in error messages.
    const KIND: &'static str;

    /// The selected items, if `response` has this candidate's shape.
    fn extract(response: &InputResponse) -> Option<&[Self]>;

    fn render(select: &SelectFromSet<Self>) -> InputView;

    fn into_input(select: SelectFromSet<Self>) -> PlayerInput;
}

/// Pick between `min` and `max` distinct items from `candidates`.
///
/// `min == 0` is the idiom for an optional selection.
pub struct SelectFromSet<T: Candidate> {
    title: String,
    button_label: String,
    candidates: Vec<T>,
    min: usize,
    max: usize,
    check: Option<SelectionCheck<T>>,
    on_select: Option<SelectCallback<T>>,
}

pub type SelectCard = SelectFromSet<EntityId>;
pub type SelectSpace = SelectFromSet<SpaceId>;
pub type SelectPlayer = SelectFromSet<PlayerId>;

impl<T: Candidate> SelectFromSet<T> {
    /// Exactly one of `candidates`.
    pub fn new(
        title: impl Into<String>,
        button_label: impl Into<String>,
        candidates: Vec<T>,
        on_select: impl FnOnce(&mut Game, Vec<T>) -> EffectResult + 'static,
    ) -> Self {
        Self {
            title: title.into(),
            button_label: button_label.into(),
            candidates,
            min: 1,
            max: 1,
            check: None,
            on_select: Some(Box::new(on_select)),
        }
    }

    #[must_use]
    pub fn with_bounds(mut self, min: usize, max: usize) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    #[must_use]
    pub fn with_check(
        mut self,
        check: impl Fn(&GameState, &[T]) -> Result<(), String> + 'static,
    ) -> Self {
        self.check = Some(Box::new(check));
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn button_label(&self) -> &str {
        &self.button_label
    }

    #[must_use]
    pub fn candidates(&self) -> &[T] {
        &self.candidates
    }

    #[must_use]
    pub fn bounds(&self) -> (usize, usize) {
        (self.min, self.max)
    }

    /// Whether any answer could satisfy the bounds.
    #[must_use]
    pub fn is_satisfiable(&self) -> bool {
        self.min <= self.max && self.min <= self.candidates.len()
    }

    #[must_use]
    pub fn is_consumed(&self) -> bool {
        self.on_select.is_none()
    }

    pub fn validate(&self, state: &GameState, response: &InputResponse) -> GameResult<()> {
        if self.is_consumed() {
            return Err(ProtocolMisuse::AlreadyConsumed.into());
        }
        let selected = T::extract(response)
            .ok_or(InvalidAnswer::WrongResponseType { expected: T::KIND })?;

        if selected.len() < self.min || selected.len() > self.max {
            return Err(InvalidAnswer::SelectionSize {
                min: self.min,
                max: self.max,
                got: selected.len(),
            }
            .into());
        }

        let mut seen = FxHashSet::default();
        for item in selected {
            if !self.candidates.contains(item) {
                return Err(InvalidAnswer::NotACandidate.into());
            }
            if !seen.insert(*item) {
                return Err(InvalidAnswer::DuplicateSelection.into());
            }
        }

        if let Some(check) = &self.check {
            check(state, selected).map_err(|reason| InvalidAnswer::RejectedSelection { reason })?;
        }
        Ok(())
    }

    pub fn resolve(&mut self, game: &mut Game, response: InputResponse) -> EffectResult {
        self.validate(game.state(), &response)?;
        let selected = T::extract(&response)
            .map(<[T]>::to_vec)
            .ok_or(InvalidAnswer::WrongResponseType { expected: T::KIND })?;
        let on_select = self
            .on_select
            .take()
            .ok_or(ProtocolMisuse::AlreadyConsumed)?;
        log::debug!("'{}' resolved with {:?}", self.title, selected);
        on_select(game, selected)
    }
}

impl Candidate for EntityId {
    const KIND: &'static str = "cards";

    fn extract(response: &InputResponse) -> Option<&[Self]> {
        match response {
            InputResponse::Cards { cards } => Some(cards),
            _ => None,
        }
    }

    fn render(select: &SelectFromSet<Self>) -> InputView {
        InputView::Cards {
            title: select.title.clone(),
            button_label: select.button_label.clone(),
            cards: select.candidates.clone(),
            min: select.min,
            max: select.max,
        }
    }

    fn into_input(select: SelectFromSet<Self>) -> PlayerInput {
        PlayerInput::Card(select)
    }
}

impl Candidate for SpaceId {
    const KIND: &'static str = "spaces";

    fn extract(response: &InputResponse) -> Option<&[Self]> {
        match response {
            InputResponse::Spaces { spaces } => Some(spaces),
            _ => None,
        }
    }

    fn render(select: &SelectFromSet<Self>) -> InputView {
        InputView::Spaces {
            title: select.title.clone(),
            button_label: select.button_label.clone(),
            spaces: select.candidates.clone(),
            min: select.min,
            max: select.max,
        }
    }

    fn into_input(select: SelectFromSet<Self>) -> PlayerInput {
        PlayerInput::Space(select)
    }
}

impl Candidate for PlayerId {
    const KIND: &'static str = "players";

    fn extract(response: &InputResponse) -> Option<&[Self]> {
        match response {
            InputResponse::Players { players } => Some(players),
            _ => None,
        }
    }

    fn render(select: &SelectFromSet<Self>) -> InputView {
        InputView::Players {
            title: select.title.clone(),
            button_label: select.button_label.clone(),
            players: select.candidates.clone(),
            min: select.min,
            max: select.max,
        }
    }

    fn into_input(select: SelectFromSet<Self>) -> PlayerInput {
        PlayerInput::Player(select)
    }
}
