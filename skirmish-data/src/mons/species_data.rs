use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    StatTable,
    Type,
};

/// Data about a particular species.
///
/// Species data is common to all creatures of a given species. Data about one creature in a battle
/// (its level, leveled stats, or current health) does not belong here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesData {
    /// The name of the species.
    pub name: String,
    /// The primary type of the species.
    pub primary_type: Type,
    /// The secondary type of the species, if it exists.
    #[serde(default)]
    pub secondary_type: Option<Type>,
    /// Base stats, as seen at level 50.
    pub base_stats: StatTable,
    /// Names of the moves the species knows, in the order they are considered for a moveset.
    #[serde(default)]
    pub moves: Vec<String>,
}

impl SpeciesData {
    /// The types of the species.
    pub fn types(&self) -> Vec<Type> {
        let mut types = vec![self.primary_type];
        types.extend(self.secondary_type);
        types
    }
}
