use serde::{
    Deserialize,
    Serialize,
};

/// A full stat table.
///
/// Used both for species base stats and for the leveled stats of a single combatant.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatTable {
    #[serde(default)]
    pub hp: u16,
    #[serde(default, alias = "attack")]
    pub atk: u16,
    #[serde(default, alias = "defense")]
    pub def: u16,
    #[serde(default, alias = "speed")]
    pub spe: u16,
}
