//! Card catalog.
//!
//! Maps card names to their behavior. Every card in here is built through
//! a [`StaticPropertyRegistry`], so all of its instances share the one
//! registered definition.

mod credicor;
mod imported_nitrogen;
mod insulation;
mod kelp_farming;
mod large_convoy;
mod pets;
mod tardigrades;

pub use credicor::CrediCor;
pub use imported_nitrogen::ImportedNitrogen;
pub use insulation::Insulation;
pub use kelp_farming::KelpFarming;
pub use large_convoy::LargeConvoy;
pub use pets::Pets;
pub use tardigrades::Tardigrades;

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::cards::{CardInstance, CardName, StaticPropertyRegistry};
use crate::core::entity::EntityId;
use crate::core::error::{DefinitionError, ProtocolMisuse};
use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::effects::Card;

/// Name to behavior lookup.
#[derive(Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardName, Arc<dyn Card>>,
}

impl CardCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every card shipped with the crate.
    pub fn standard(registry: &mut StaticPropertyRegistry) -> Result<Self, DefinitionError> {
        let mut catalog = Self::new();
        catalog.register(LargeConvoy::new(registry)?);
        catalog.register(ImportedNitrogen::new(registry)?);
        catalog.register(Insulation::new(registry)?);
        catalog.register(KelpFarming::new(registry)?);
        catalog.register(Pets::new(registry)?);
        catalog.register(Tardigrades::new(registry)?);
        catalog.register(CrediCor::new(registry)?);
        log::debug!("standard catalog holds {} cards", catalog.len());
        Ok(catalog)
    }

    /// Add `card`, replacing any card with the same name.
    pub fn register(&mut self, card: impl Card + 'static) -> Option<Arc<dyn Card>> {
        let name = card.name().clone();
        self.cards.insert(name, Arc::new(card))
    }

    #[must_use]
    pub fn get(&self, name: &CardName) -> Option<&Arc<dyn Card>> {
        self.cards.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &CardName) -> bool {
        self.cards.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&CardName> {
        let mut names: Vec<_> = self.cards.keys().collect();
        names.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        names
    }

    /// Create a new instance of `name` in `state` and return its id.
    ///
    /// The instance shares the catalog card's definition.
    pub fn instantiate(
        &self,
        state: &mut GameState,
        name: &CardName,
        owner: Option<PlayerId>,
    ) -> Result<EntityId, ProtocolMisuse> {
        let card = self
            .get(name)
            .ok_or_else(|| ProtocolMisuse::UnknownCard(name.to_string()))?;
        let id = state.alloc_entity();
        let instance = CardInstance::new(id, Arc::clone(card.definition()));
        let instance = match owner {
            Some(player) => instance.owned_by(player),
            None => instance,
        };
        Ok(state.insert_card(instance))
    }
}

impl fmt::Debug for CardCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardCatalog")
            .field("cards", &self.names())
            .finish()
    }
}
