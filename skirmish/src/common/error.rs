use thiserror::Error;

use crate::{
    battle::Side,
    common::ValidationError,
};

/// An error returned by the battle engine.
///
/// Every error is returned to the direct caller. The engine does not log or retry on its own.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleError {
    /// A move was submitted for the side that is not currently expected to act.
    #[error("it is not {side}'s turn; waiting on {awaiting}")]
    NotYourTurn { side: Side, awaiting: Side },
    /// An explicit move index does not refer to one of the attacker's moves.
    #[error("move index {index} is invalid; {count} moves are available")]
    InvalidMoveIndex { index: usize, count: usize },
    /// A side was created without a single combatant that can battle.
    #[error("{side} has no combatant able to battle")]
    IncompleteRoster { side: Side },
    /// A combatant record from the stat provider is malformed.
    #[error("invalid combatant for {side}: {error}")]
    InvalidCombatant {
        side: Side,
        #[source]
        error: ValidationError,
    },
    /// A scripted turn was requested in a battle without a scripted opponent.
    #[error("battle has no scripted opponent")]
    NoScriptedOpponent,
    /// Every combatant on a side has fainted, but the battle was not finished.
    ///
    /// This is an invariant violation in the engine itself.
    #[error("no combatant is available to battle")]
    NoCombatantAvailable,
}

impl BattleError {
    /// Can the caller recover from the error by correcting its input?
    ///
    /// Unrecoverable errors indicate a bug in the engine or in the code driving it.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::NoCombatantAvailable)
    }
}
