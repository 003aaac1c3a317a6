//! Board boundary: spaces and tile placement.
//!
//! Layout and adjacency bonuses live outside the rules core. This module
//! only tracks which spaces exist, which of them are reserved for oceans,
//! and what has been placed, so deferred placement actions can offer the
//! open spaces and fail cleanly when the board has drifted.

use serde::{Deserialize, Serialize};

use super::error::IneligibleAction;
use super::player::PlayerId;

/// Identifier of a board space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SpaceId(pub u16);

impl std::fmt::Display for SpaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Space({})", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpaceKind {
    Land,
    Ocean,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileKind {
    Ocean,
    Greenery,
    City,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub kind: TileKind,
    /// Oceans are neutral; other tiles belong to whoever placed them.
    pub owner: Option<PlayerId>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    pub id: SpaceId,
    pub kind: SpaceKind,
    pub tile: Option<Tile>,
}

/// Board spaces with placed tiles.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    spaces: Vec<Space>,
    max_oceans: u32,
}

impl Board {
    /// A board with `max_oceans` reserved ocean spaces followed by
    /// `land_spaces` land spaces.
    #[must_use]
    pub fn new(max_oceans: u32, land_spaces: u32) -> Self {
        let oceans = (0..max_oceans).map(|_| SpaceKind::Ocean);
        let land = (0..land_spaces).map(|_| SpaceKind::Land);
        let spaces = oceans
            .chain(land)
            .enumerate()
            .map(|(i, kind)| Space {
                id: SpaceId(i as u16),
                kind,
                tile: None,
            })
            .collect();

        Self { spaces, max_oceans }
    }

    #[must_use]
    pub fn space(&self, id: SpaceId) -> Option<&Space> {
        self.spaces.get(id.0 as usize)
    }

    #[must_use]
    pub fn max_oceans(&self) -> u32 {
        self.max_oceans
    }

    #[must_use]
    pub fn oceans_placed(&self) -> u32 {
        self.spaces
            .iter()
            .filter(|s| matches!(s.tile, Some(Tile { kind: TileKind::Ocean, .. })))
            .count() as u32
    }

    #[must_use]
    pub fn oceans_maxed(&self) -> bool {
        self.oceans_placed() >= self.max_oceans
    }

    /// Empty ocean-reserved spaces, in board order.
    #[must_use]
    pub fn available_ocean_spaces(&self) -> Vec<SpaceId> {
        self.spaces
            .iter()
            .filter(|s| s.kind == SpaceKind::Ocean && s.tile.is_none())
            .map(|s| s.id)
            .collect()
    }

    /// Put an ocean tile on `space`.
    pub fn place_ocean(&mut self, space: SpaceId) -> Result<(), IneligibleAction> {
        if self.oceans_maxed() {
            return Err(IneligibleAction::OceansMaxed);
        }

        match self.spaces.get_mut(space.0 as usize) {
            Some(slot) if slot.kind == SpaceKind::Ocean && slot.tile.is_none() => {
                slot.tile = Some(Tile {
                    kind: TileKind::Ocean,
                    owner: None,
                });
                Ok(())
            }
            _ => Err(IneligibleAction::SpaceUnavailable { space }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_layout() {
        let board = Board::new(3, 5);
        assert_eq!(board.available_ocean_spaces(), vec![SpaceId(0), SpaceId(1), SpaceId(2)]);
        assert_eq!(board.space(SpaceId(4)).map(|s| s.kind), Some(SpaceKind::Land));
        assert_eq!(board.oceans_placed(), 0);
    }

    #[test]
    fn test_place_ocean() {
        let mut board = Board::new(2, 1);
        board.place_ocean(SpaceId(1)).unwrap();

        assert_eq!(board.oceans_placed(), 1);
        assert_eq!(board.available_ocean_spaces(), vec![SpaceId(0)]);
    }

    #[test]
    fn test_place_ocean_rejects_taken_and_land() {
        let mut board = Board::new(2, 1);
        board.place_ocean(SpaceId(0)).unwrap();

        assert_eq!(
            board.place_ocean(SpaceId(0)),
            Err(IneligibleAction::SpaceUnavailable { space: SpaceId(0) })
        );
        assert_eq!(
            board.place_ocean(SpaceId(2)),
            Err(IneligibleAction::SpaceUnavailable { space: SpaceId(2) })
        );
    }

    #[test]
    fn test_oceans_maxed() {
        let mut board = Board::new(1, 0);
        board.place_ocean(SpaceId(0)).unwrap();

        assert!(board.oceans_maxed());
        assert_eq!(board.place_ocean(SpaceId(0)), Err(IneligibleAction::OceansMaxed));
    }
}
