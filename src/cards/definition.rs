//! Card definitions - static card properties.
//!
//! `CardDefinition` holds what every copy of a card has in common: name,
//! category, cost, tags, production box, requirements and rendered text.
//! Definitions are built once, validated by the registry, and then shared
//! read-only by every `CardInstance` of that card.
//!
//! Per-game data (attached resources, used-this-generation flags) lives in
//! `CardInstance`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::requirements::Requirement;
use crate::core::error::DefinitionError;
use crate::core::units::Units;

/// Unique card identity.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardName(String);

impl CardName {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for CardName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl std::fmt::Display for CardName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Card category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Automated,
    Active,
    Event,
    Corporation,
    Prelude,
    StandardAction,
    StandardProject,
}

impl CardType {
    /// Categories that may omit a cost.
    #[must_use]
    pub fn cost_exempt(self) -> bool {
        matches!(
            self,
            CardType::Corporation | CardType::Prelude | CardType::StandardAction
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    Building,
    Space,
    Science,
    Power,
    Earth,
    Jovian,
    Plant,
    Microbe,
    Animal,
    City,
    Event,
    Wild,
}

/// Kind of resource a card can hold on itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceType {
    Animal,
    Microbe,
    Science,
    Floater,
    Fighter,
}

/// Rendering metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardMetadata {
    pub card_number: Option<String>,
    pub description: String,
    pub victory_points: Option<i32>,
}

impl CardMetadata {
    #[must_use]
    pub fn new(card_number: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            card_number: Some(card_number.into()),
            description: description.into(),
            victory_points: None,
        }
    }

    #[must_use]
    pub fn with_victory_points(mut self, points: i32) -> Self {
        self.victory_points = Some(points);
        self
    }
}

/// Immutable card properties.
///
/// ## Example
///
/// ```
/// use mars_rules::cards::{CardDefinition, CardType, Tag};
///
/// let convoy = CardDefinition::new("Large Convoy", CardType::Event)
///     .with_cost(36)
///     .with_tags([Tag::Earth, Tag::Space]);
///
/// assert_eq!(convoy.cost(), 36);
/// assert!(convoy.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardDefinition {
    name: CardName,
    card_type: CardType,
    cost: Option<u32>,
    starting_megacredits: Option<u32>,
    tags: SmallVec<[Tag; 4]>,
    production: Option<Units>,
    resource_type: Option<ResourceType>,
    requirements: Vec<Requirement>,
    initial_action_text: Option<String>,
    metadata: CardMetadata,
}

impl CardDefinition {
    #[must_use]
    pub fn new(name: impl Into<CardName>, card_type: CardType) -> Self {
        Self {
            name: name.into(),
            card_type,
            cost: None,
            starting_megacredits: None,
            tags: SmallVec::new(),
            production: None,
            resource_type: None,
            requirements: Vec::new(),
            initial_action_text: None,
            metadata: CardMetadata::default(),
        }
    }

    #[must_use]
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = Some(cost);
        self
    }

    #[must_use]
    pub fn with_starting_megacredits(mut self, amount: u32) -> Self {
        self.starting_megacredits = Some(amount);
        self
    }

    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.extend(tags);
        self
    }

    #[must_use]
    pub fn with_production(mut self, production: Units) -> Self {
        self.production = Some(production);
        self
    }

    #[must_use]
    pub fn with_resource_type(mut self, resource_type: ResourceType) -> Self {
        self.resource_type = Some(resource_type);
        self
    }

    #[must_use]
    pub fn with_requirement(mut self, requirement: Requirement) -> Self {
        self.requirements.push(requirement);
        self
    }

    #[must_use]
    pub fn with_initial_action_text(mut self, text: impl Into<String>) -> Self {
        self.initial_action_text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: CardMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Check category-specific required fields.
    pub fn validate(&self) -> Result<(), DefinitionError> {
        if self.card_type == CardType::Corporation && self.starting_megacredits.is_none() {
            return Err(DefinitionError::MissingStartingMegaCredits {
                card: self.name.to_string(),
            });
        }
        if self.cost.is_none() && !self.card_type.cost_exempt() {
            return Err(DefinitionError::MissingCost {
                card: self.name.to_string(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn name(&self) -> &CardName {
        &self.name
    }

    #[must_use]
    pub fn card_type(&self) -> CardType {
        self.card_type
    }

    /// Printed cost, 0 when the category has none.
    #[must_use]
    pub fn cost(&self) -> u32 {
        self.cost.unwrap_or(0)
    }

    /// Starting megacredits, 0 for anything but corporations.
    #[must_use]
    pub fn starting_megacredits(&self) -> u32 {
        self.starting_megacredits.unwrap_or(0)
    }

    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    #[must_use]
    pub fn production(&self) -> Units {
        self.production.unwrap_or(Units::EMPTY)
    }

    #[must_use]
    pub fn resource_type(&self) -> Option<ResourceType> {
        self.resource_type
    }

    #[must_use]
    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    #[must_use]
    pub fn initial_action_text(&self) -> Option<&str> {
        self.initial_action_text.as_deref()
    }

    #[must_use]
    pub fn metadata(&self) -> &CardMetadata {
        &self.metadata
    }

    #[must_use]
    pub fn victory_points(&self) -> i32 {
        self.metadata.victory_points.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::units::Resource;

    #[test]
    fn test_absent_fields_default() {
        let card = CardDefinition::new("Birds", CardType::Active).with_cost(10);

        assert_eq!(card.starting_megacredits(), 0);
        assert!(card.tags().is_empty());
        assert!(card.production().is_empty());
        assert_eq!(card.resource_type(), None);
        assert_eq!(card.victory_points(), 0);
    }

    #[test]
    fn test_corporation_requires_starting_megacredits() {
        let corp = CardDefinition::new("CrediCor", CardType::Corporation);
        assert_eq!(
            corp.validate(),
            Err(DefinitionError::MissingStartingMegaCredits { card: "CrediCor".into() })
        );

        let corp = corp.with_starting_megacredits(57);
        assert!(corp.validate().is_ok());
    }

    #[test]
    fn test_cost_exemptions() {
        for card_type in [CardType::Prelude, CardType::StandardAction] {
            assert!(CardDefinition::new("X", card_type).validate().is_ok());
        }
        for card_type in [CardType::Automated, CardType::Active, CardType::Event, CardType::StandardProject] {
            assert_eq!(
                CardDefinition::new("X", card_type).validate(),
                Err(DefinitionError::MissingCost { card: "X".into() })
            );
        }
    }

    #[test]
    fn test_builder_fields() {
        let card = CardDefinition::new("Kelp Farming", CardType::Automated)
            .with_cost(17)
            .with_tags([Tag::Plant])
            .with_production(Units { megacredits: 2, plants: 3, ..Units::EMPTY })
            .with_requirement(Requirement::MinOceans(6))
            .with_metadata(CardMetadata::new("055", "Requires 6 ocean tiles.").with_victory_points(1));

        assert_eq!(card.cost(), 17);
        assert_eq!(card.production().get(Resource::Plants), 3);
        assert_eq!(card.requirements(), &[Requirement::MinOceans(6)]);
        assert_eq!(card.victory_points(), 1);
        assert_eq!(card.metadata().card_number.as_deref(), Some("055"));
    }

    #[test]
    fn test_definition_serialization() {
        let card = CardDefinition::new("Large Convoy", CardType::Event)
            .with_cost(36)
            .with_tags([Tag::Earth, Tag::Space]);

        let json = serde_json::to_string(&card).unwrap();
        let back: CardDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
