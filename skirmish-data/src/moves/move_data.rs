use serde::{
    Deserialize,
    Serialize,
};

use crate::Type;

/// The highest base power a move may have.
pub const MAX_BASE_POWER: u8 = 250;

/// The most moves a single creature may know.
pub const MAX_MOVES: usize = 4;

/// Data about a particular move.
///
/// Moves are immutable. Every creature enters a battle with one to four of them, and each turn it
/// uses one to damage the opposing creature.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveData {
    /// Name of the move.
    pub name: String,
    /// Move type.
    #[serde(alias = "type")]
    pub primary_type: Type,
    /// Base power, between 0 and [`MAX_BASE_POWER`].
    #[serde(default, alias = "power")]
    pub base_power: u8,
}

impl MoveData {
    /// The move every creature falls back to when it knows no other moves.
    pub fn tackle() -> Self {
        Self {
            name: "Tackle".to_owned(),
            primary_type: Type::Normal,
            base_power: 40,
        }
    }

    /// Does the move deal damage?
    pub fn is_damaging(&self) -> bool {
        self.base_power > 0
    }

    /// Validates the move, returning a description of every problem found.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.name.trim().is_empty() {
            problems.push("move name cannot be empty".to_owned());
        }
        if self.base_power > MAX_BASE_POWER {
            problems.push(format!(
                "{} has base power {}, which exceeds {MAX_BASE_POWER}",
                self.name, self.base_power
            ));
        }
        problems
    }
}
