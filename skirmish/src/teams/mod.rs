mod calculations;
mod provider;
mod team;

pub use calculations::calculate_combatant_stats;
pub use provider::{
    DataStoreStatProvider,
    StatProvider,
};
pub use team::{
    CombatantData,
    TeamData,
};
