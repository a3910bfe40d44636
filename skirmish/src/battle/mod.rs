mod battle;
mod battle_options;
mod combatant;
mod damage;
mod roster;
mod side;
mod snapshot;

pub use battle::{
    Battle,
    BattleStatus,
    BattleView,
    FinishedBattle,
    Match,
    RejectedTurn,
};
pub use battle_options::{
    BattleEngineOptions,
    BattleMode,
    BattleOptions,
    Difficulty,
    SideData,
};
pub use combatant::Combatant;
pub use damage::{
    DamageRoll,
    MAX_VARIANCE,
    MIN_VARIANCE,
    calculate_damage,
};
pub use roster::Roster;
pub use side::Side;
pub use snapshot::{
    ActiveCombatantSnapshot,
    BattleSnapshot,
    SideSnapshot,
};
