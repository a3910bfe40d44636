use anyhow::{
    Context,
    Error,
    Result,
};
use log::debug;
use skirmish_data::{
    DataStore,
    Id,
    MAX_MOVES,
    MoveData,
};

use crate::teams::{
    CombatantData,
    TeamData,
    calculate_combatant_stats,
};

/// A source of complete, already-leveled combatant records.
///
/// Retries, caching, and any network access are the provider's concern. A battle only ever sees
/// the finished records.
pub trait StatProvider {
    /// Returns the record for the creature with the given identifier, scaled to the given level.
    fn combatant(&self, id: &str, level: u8) -> Result<CombatantData>;

    /// Returns a team of the given creatures, all at the same level.
    fn team(&self, ids: &[&str], level: u8) -> Result<TeamData> {
        Ok(TeamData {
            members: ids
                .iter()
                .map(|id| self.combatant(id, level))
                .collect::<Result<Vec<_>>>()?,
        })
    }
}

/// A [`StatProvider`] backed by a [`DataStore`].
///
/// A combatant knows the first four damaging moves of its species, in the order the species lists
/// them. A species with no damaging moves knows Tackle.
pub struct DataStoreStatProvider<'d> {
    data: &'d dyn DataStore,
}

impl<'d> DataStoreStatProvider<'d> {
    pub fn new(data: &'d dyn DataStore) -> Self {
        Self { data }
    }

    fn moveset(&self, moves: &[String]) -> Result<Vec<MoveData>> {
        let mut moveset = Vec::with_capacity(MAX_MOVES);
        for name in moves {
            let mv = self
                .data
                .get_move(&Id::from(name.as_str()))?
                .with_context(|| format!("move {name} not found"))?;
            if mv.is_damaging() {
                moveset.push(mv);
            }
            if moveset.len() >= MAX_MOVES {
                break;
            }
        }
        if moveset.is_empty() {
            moveset.push(MoveData::tackle());
        }
        Ok(moveset)
    }
}

impl StatProvider for DataStoreStatProvider<'_> {
    fn combatant(&self, id: &str, level: u8) -> Result<CombatantData> {
        let species = self
            .data
            .get_species(&Id::from(id))?
            .ok_or_else(|| Error::msg(format!("species {id} not found")))?;
        let moves = self
            .moveset(&species.moves)
            .with_context(|| format!("failed to build moveset for {}", species.name))?;
        debug!("providing {} at level {level}", species.name);
        Ok(CombatantData {
            name: species.name.clone(),
            level,
            types: species.types(),
            stats: calculate_combatant_stats(&species.base_stats, level),
            health: None,
            moves,
        })
    }
}
