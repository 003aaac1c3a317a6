//! Standard resources and resource bundles.

use serde::{Deserialize, Serialize};

/// The six standard resources a player stocks and produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resource {
    MegaCredits,
    Steel,
    Titanium,
    Plants,
    Energy,
    Heat,
}

impl Resource {
    pub const ALL: [Resource; 6] = [
        Resource::MegaCredits,
        Resource::Steel,
        Resource::Titanium,
        Resource::Plants,
        Resource::Energy,
        Resource::Heat,
    ];
}

/// An amount of each standard resource.
///
/// Used both for stockpiles and for production levels. MegaCredit
/// production may go negative, so amounts are signed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Units {
    pub megacredits: i32,
    pub steel: i32,
    pub titanium: i32,
    pub plants: i32,
    pub energy: i32,
    pub heat: i32,
}

impl Units {
    pub const EMPTY: Units = Units {
        megacredits: 0,
        steel: 0,
        titanium: 0,
        plants: 0,
        energy: 0,
        heat: 0,
    };

    /// A bundle holding `amount` of a single resource.
    #[must_use]
    pub fn of(resource: Resource, amount: i32) -> Self {
        let mut units = Self::EMPTY;
        units.set(resource, amount);
        units
    }

    #[must_use]
    pub fn get(&self, resource: Resource) -> i32 {
        match resource {
            Resource::MegaCredits => self.megacredits,
            Resource::Steel => self.steel,
            Resource::Titanium => self.titanium,
            Resource::Plants => self.plants,
            Resource::Energy => self.energy,
            Resource::Heat => self.heat,
        }
    }

    pub fn set(&mut self, resource: Resource, amount: i32) {
        let slot = match resource {
            Resource::MegaCredits => &mut self.megacredits,
            Resource::Steel => &mut self.steel,
            Resource::Titanium => &mut self.titanium,
            Resource::Plants => &mut self.plants,
            Resource::Energy => &mut self.energy,
            Resource::Heat => &mut self.heat,
        };
        *slot = amount;
    }

    pub fn add(&mut self, resource: Resource, delta: i32) {
        self.set(resource, self.get(resource) + delta);
    }

    /// Add every resource of `other` to this bundle.
    pub fn add_all(&mut self, other: &Units) {
        for resource in Resource::ALL {
            self.add(resource, other.get(resource));
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_add() {
        let mut units = Units::EMPTY;
        units.set(Resource::Plants, 3);
        units.add(Resource::Plants, 5);
        assert_eq!(units.get(Resource::Plants), 8);
        assert_eq!(units.get(Resource::Heat), 0);
    }

    #[test]
    fn test_add_all() {
        let mut units = Units::of(Resource::MegaCredits, 2);
        units.add_all(&Units { plants: 3, megacredits: -1, ..Units::EMPTY });
        assert_eq!(units.megacredits, 1);
        assert_eq!(units.plants, 3);
    }

    #[test]
    fn test_empty() {
        assert!(Units::default().is_empty());
        assert!(!Units::of(Resource::Energy, 1).is_empty());
    }
}
