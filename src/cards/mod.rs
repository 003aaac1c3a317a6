//! Card system: definitions, requirements, instances, and the registry.
//!
//! ## Key Types
//!
//! - `CardName`: Card identity
//! - `CardDefinition`: Immutable properties shared by every copy
//! - `StaticPropertyRegistry`: One validated definition per name
//! - `CardInstance`: A copy in a game, with its own resource counter
//! - `Requirement`: Pure eligibility predicates

pub mod definition;
pub mod instance;
pub mod registry;
pub mod requirements;

pub use definition::{CardDefinition, CardMetadata, CardName, CardType, ResourceType, Tag};
pub use instance::{CardInstance, ACTION_USED};
pub use registry::StaticPropertyRegistry;
pub use requirements::Requirement;
