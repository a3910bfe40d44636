mod species_data;
mod stat;
mod r#type;

pub use species_data::SpeciesData;
pub use stat::StatTable;
pub use r#type::{
    Type,
    TypeChart,
    TypeEffectiveness,
    TypeTable,
};
