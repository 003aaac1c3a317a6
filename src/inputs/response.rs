//! Client-observable input shapes and answers.
//!
//! Continuations never leave the process. What the transport sees is an
//! [`InputView`] describing the question, and what it sends back is an
//! [`InputResponse`] of the matching shape.

use serde::{Deserialize, Serialize};

use crate::core::board::SpaceId;
use crate::core::entity::EntityId;
use crate::core::player::PlayerId;

/// An answer to a pending input.
///
/// An `AndOptions` sequence is answered one member at a time: the response
/// has the shape of the member currently offered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputResponse {
    /// Confirm a single option.
    Option,

    /// Pick branch `index` of an alternative and answer it.
    Or {
        index: usize,
        response: Box<InputResponse>,
    },

    Cards { cards: Vec<EntityId> },

    Spaces { spaces: Vec<SpaceId> },

    Players { players: Vec<PlayerId> },

    Amount { amount: i64 },
}

impl InputResponse {
    #[must_use]
    pub fn or(index: usize, response: InputResponse) -> Self {
        InputResponse::Or {
            index,
            response: Box::new(response),
        }
    }

    #[must_use]
    pub fn cards(cards: impl IntoIterator<Item = EntityId>) -> Self {
        InputResponse::Cards {
            cards: cards.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn spaces(spaces: impl IntoIterator<Item = SpaceId>) -> Self {
        InputResponse::Spaces {
            spaces: spaces.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn players(players: impl IntoIterator<Item = PlayerId>) -> Self {
        InputResponse::Players {
            players: players.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn amount(amount: i64) -> Self {
        InputResponse::Amount { amount }
    }
}

/// Description of a pending input for rendering and client-side checks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputView {
    Option {
        title: String,
        button_label: String,
    },

    Or {
        title: String,
        button_label: String,
        options: Vec<InputView>,
    },

    And {
        title: String,
        button_label: String,
        members: Vec<InputView>,
        /// Index of the member the next response answers.
        current: usize,
    },

    Cards {
        title: String,
        button_label: String,
        cards: Vec<EntityId>,
        min: usize,
        max: usize,
    },

    Spaces {
        title: String,
        button_label: String,
        spaces: Vec<SpaceId>,
        min: usize,
        max: usize,
    },

    Players {
        title: String,
        button_label: String,
        players: Vec<PlayerId>,
        min: usize,
        max: usize,
    },

    Amount {
        title: String,
        button_label: String,
        min: i64,
        max: i64,
    },
}

impl InputView {
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            InputView::Option { title, .. }
            | InputView::Or { title, .. }
            | InputView::And { title, .. }
            | InputView::Cards { title, .. }
            | InputView::Spaces { title, .. }
            | InputView::Players { title, .. }
            | InputView::Amount { title, .. } => title,
        }
    }
}
