use serde::Serialize;
use skirmish_data::Type;

use crate::battle::{
    BattleMode,
    BattleStatus,
    BattleView,
    Combatant,
    Roster,
    Side,
};

/// The combatant currently battling for a side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActiveCombatantSnapshot {
    pub name: String,
    pub level: u8,
    pub types: Vec<Type>,
    pub health: u16,
    pub max_health: u16,
}

impl From<&Combatant> for ActiveCombatantSnapshot {
    fn from(combatant: &Combatant) -> Self {
        Self {
            name: combatant.name().to_owned(),
            level: combatant.level(),
            types: combatant.types().to_vec(),
            health: combatant.health(),
            max_health: combatant.max_health(),
        }
    }
}

/// One side of a battle, as seen after a turn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SideSnapshot {
    pub side: Side,
    pub name: String,
    /// The active combatant. After a side loses, this is the combatant that fainted last.
    pub active: Option<ActiveCombatantSnapshot>,
    pub remaining: usize,
    pub total: usize,
}

impl From<&Roster> for SideSnapshot {
    fn from(roster: &Roster) -> Self {
        Self {
            side: roster.side(),
            name: roster.name().to_owned(),
            active: roster
                .members()
                .get(roster.active_index())
                .map(ActiveCombatantSnapshot::from),
            remaining: roster.remaining(),
            total: roster.members().len(),
        }
    }
}

/// Everything a presentation layer needs to render a battle between turns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BattleSnapshot {
    pub mode: BattleMode,
    pub turn: u32,
    #[serde(flatten)]
    pub status: BattleStatus,
    pub side_a: SideSnapshot,
    pub side_b: SideSnapshot,
}

impl BattleSnapshot {
    /// Takes a snapshot of a battle in any phase.
    pub fn from_view<V>(view: &V) -> Self
    where
        V: BattleView + ?Sized,
    {
        Self {
            mode: view.mode(),
            turn: view.turn(),
            status: view.status(),
            side_a: view.roster(Side::A).into(),
            side_b: view.roster(Side::B).into(),
        }
    }

    pub fn side(&self, side: Side) -> &SideSnapshot {
        match side {
            Side::A => &self.side_a,
            Side::B => &self.side_b,
        }
    }
}
