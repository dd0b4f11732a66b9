//! Workout model
//!
//! The parsed form of a `.prac` document is a strict tree:
//!
//!   WorkoutConfig
//!   [PracticeSet -> [SetItem -> {GroupLabel -> GroupVariation}]]
//!
//! Nothing holds a back-reference, and nothing is mutated once the parser
//! hands it over. Group `A` is the primary definition of every item and is
//! never stored in an item's variation map.

pub mod config;
pub mod group;
pub mod practice_set;
pub mod set_item;

pub use config::{InvalidUnits, Units, WorkoutConfig};
pub use group::{GroupLabel, GroupLabelOverflow, GroupVariation, InvalidGroupLabel};
pub use practice_set::PracticeSet;
pub use set_item::SetItem;
