use anyhow::Result;

use crate::{
    Id,
    MoveData,
    SpeciesData,
    TypeChart,
};

/// Collection of tables for all resource data.
///
/// This trait can be implemented for different data sources, such as an external API or disk.
/// Lookups are by normalized [`Id`]; a missing resource is `Ok(None)`, while a broken data source
/// is an error.
pub trait DataStore: Send + Sync {
    /// Gets all species IDs, sorted.
    fn all_species_ids(&self) -> Result<Vec<Id>>;
    /// Gets the type chart.
    fn get_type_chart(&self) -> Result<TypeChart>;
    /// Gets a move by ID.
    fn get_move(&self, id: &Id) -> Result<Option<MoveData>>;
    /// Gets a species by ID.
    fn get_species(&self, id: &Id) -> Result<Option<SpeciesData>>;
}
