//! Static property registry.
//!
//! Maps each card identity to its one canonical `CardDefinition`. The first
//! definition offered for a name is validated and stored; every later
//! request for that name gets the stored definition back, whatever
//! candidate it passed. All instances of a card therefore share one
//! allocation, and validation runs once per name.
//!
//! The registry is an owned value rather than a process global. Writes
//! need `&mut self`, which gives the single-writer guarantee; a fresh
//! registry per test gives isolation.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardName};
use crate::core::error::DefinitionError;

/// Read-through cache of card definitions, first writer wins.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use mars_rules::cards::{CardDefinition, CardType, StaticPropertyRegistry};
///
/// let mut registry = StaticPropertyRegistry::new();
///
/// let first = registry
///     .get_or_create(CardDefinition::new("Pets", CardType::Active).with_cost(10))
///     .unwrap();
/// let second = registry
///     .get_or_create(CardDefinition::new("Pets", CardType::Active).with_cost(99))
///     .unwrap();
///
/// assert!(Arc::ptr_eq(&first, &second));
/// assert_eq!(second.cost(), 10);
/// ```
#[derive(Clone, Debug, Default)]
pub struct StaticPropertyRegistry {
    definitions: FxHashMap<CardName, Arc<CardDefinition>>,
}

impl StaticPropertyRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the canonical definition for `candidate`'s name.
    ///
    /// On first sight of the name the candidate is validated and stored.
    /// Afterwards the candidate is ignored.
    pub fn get_or_create(
        &mut self,
        candidate: CardDefinition,
    ) -> Result<Arc<CardDefinition>, DefinitionError> {
        if let Some(existing) = self.definitions.get(candidate.name()) {
            return Ok(Arc::clone(existing));
        }

        candidate.validate()?;
        log::debug!("registered static properties for {}", candidate.name());

        let definition = Arc::new(candidate);
        self.definitions
            .insert(definition.name().clone(), Arc::clone(&definition));
        Ok(definition)
    }

    #[must_use]
    pub fn get(&self, name: &CardName) -> Option<&Arc<CardDefinition>> {
        self.definitions.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &CardName) -> bool {
        self.definitions.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<CardDefinition>> {
        self.definitions.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::definition::{CardType, Tag};

    #[test]
    fn test_first_writer_wins() {
        let mut registry = StaticPropertyRegistry::new();

        let first = registry
            .get_or_create(CardDefinition::new("Large Convoy", CardType::Event).with_cost(36))
            .unwrap();
        let later = registry
            .get_or_create(
                CardDefinition::new("Large Convoy", CardType::Event)
                    .with_cost(1)
                    .with_tags([Tag::Wild]),
            )
            .unwrap();

        assert!(Arc::ptr_eq(&first, &later));
        assert_eq!(later.cost(), 36);
        assert!(later.tags().is_empty());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_invalid_candidate_not_stored() {
        let mut registry = StaticPropertyRegistry::new();

        let err = registry
            .get_or_create(CardDefinition::new("CrediCor", CardType::Corporation))
            .unwrap_err();
        assert_eq!(err, DefinitionError::MissingStartingMegaCredits { card: "CrediCor".into() });
        assert!(!registry.contains(&CardName::from("CrediCor")));

        let ok = registry.get_or_create(
            CardDefinition::new("CrediCor", CardType::Corporation).with_starting_megacredits(57),
        );
        assert!(ok.is_ok());
    }

    #[test]
    fn test_later_invalid_candidate_is_ignored() {
        let mut registry = StaticPropertyRegistry::new();
        registry
            .get_or_create(CardDefinition::new("Pets", CardType::Active).with_cost(10))
            .unwrap();

        // No cost: would fail validation, but the stored definition answers.
        let stored = registry
            .get_or_create(CardDefinition::new("Pets", CardType::Active))
            .unwrap();
        assert_eq!(stored.cost(), 10);
    }

    #[test]
    fn test_lookup_and_iteration() {
        let mut registry = StaticPropertyRegistry::new();
        assert!(registry.is_empty());

        registry
            .get_or_create(CardDefinition::new("A", CardType::Event).with_cost(1))
            .unwrap();
        registry
            .get_or_create(CardDefinition::new("B", CardType::Event).with_cost(2))
            .unwrap();

        assert_eq!(registry.get(&"B".into()).map(|d| d.cost()), Some(2));
        assert!(registry.get(&"C".into()).is_none());

        let mut names: Vec<_> = registry.iter().map(|d| d.name().to_string()).collect();
        names.sort();
        assert_eq!(names, vec!["A", "B"]);
    }
}
