use itertools::Itertools;
use skirmish_data::{
    MAX_MOVES,
    MoveData,
    StatTable,
    Type,
};

use crate::{
    common::ValidationError,
    teams::CombatantData,
};

/// A single creature taking part in a battle.
///
/// Built once per battle from a [`CombatantData`] record. Only the battle engine mutates a
/// combatant, and the only mutation is damage. A combatant with no health has fainted and stays on
/// its roster for the rest of the battle.
#[derive(Debug, Clone, PartialEq)]
pub struct Combatant {
    name: String,
    level: u8,
    types: Vec<Type>,
    stats: StatTable,
    health: u16,
    moves: Vec<MoveData>,
}

impl Combatant {
    /// Creates a new combatant, validating the record.
    ///
    /// Every problem in the record is reported at once.
    pub fn new(data: CombatantData) -> Result<Self, ValidationError> {
        Self::validate(&data)?;
        let moves = if data.moves.is_empty() {
            vec![MoveData::tackle()]
        } else {
            data.moves
        };
        Ok(Self {
            health: data.health.unwrap_or(data.stats.hp),
            name: data.name,
            level: data.level,
            types: data.types,
            stats: data.stats,
            moves,
        })
    }

    fn validate(data: &CombatantData) -> Result<(), ValidationError> {
        let mut error = ValidationError::default();
        if data.name.trim().is_empty() {
            error.add_problem("combatant name cannot be empty");
        }
        if data.level == 0 {
            error.add_problem(format!("{} must be at least level 1", data.name));
        }
        match data.types.len() {
            1 => (),
            2 if data.types[0] != data.types[1] => (),
            2 => error.add_problem(format!(
                "{} cannot have {} twice",
                data.name,
                data.types[0].name()
            )),
            count => error.add_problem(format!(
                "{} must have one or two types, found {count}",
                data.name
            )),
        }
        if data.moves.len() > MAX_MOVES {
            error.add_problem(format!(
                "{} knows {} moves, but at most {MAX_MOVES} are allowed",
                data.name,
                data.moves.len()
            ));
        }
        error.extend(data.moves.iter().flat_map(|mv| mv.problems()));
        match data.health {
            Some(health) if health > data.stats.hp => error.add_problem(format!(
                "{} has {health} health, which exceeds its maximum of {}",
                data.name, data.stats.hp
            )),
            _ => (),
        }
        error.into_result()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    /// The combatant's one or two types.
    pub fn types(&self) -> &[Type] {
        &self.types
    }

    pub fn attack(&self) -> u16 {
        self.stats.atk
    }

    pub fn defense(&self) -> u16 {
        self.stats.def
    }

    pub fn speed(&self) -> u16 {
        self.stats.spe
    }

    pub fn health(&self) -> u16 {
        self.health
    }

    pub fn max_health(&self) -> u16 {
        self.stats.hp
    }

    /// The moves the combatant knows. Never empty.
    pub fn moves(&self) -> &[MoveData] {
        &self.moves
    }

    /// Has the combatant fainted?
    pub fn fainted(&self) -> bool {
        self.health == 0
    }

    /// Type names joined by slashes, for display.
    pub fn type_names(&self) -> String {
        self.types.iter().map(|typ| typ.name()).join("/")
    }

    /// Applies damage, saturating at zero health. Returns the remaining health.
    pub(crate) fn apply_damage(&mut self, damage: u32) -> u16 {
        let damage = damage.min(self.health as u32) as u16;
        self.health -= damage;
        self.health
    }
}
