use std::fmt;

use log::{
    debug,
    trace,
};
use serde::Serialize;
use skirmish_data::TypeChart;
use skirmish_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};
use thiserror::Error;

use crate::{
    battle::{
        BattleEngineOptions,
        BattleMode,
        BattleOptions,
        BattleSnapshot,
        DamageRoll,
        MAX_VARIANCE,
        MIN_VARIANCE,
        Roster,
        Side,
        calculate_damage,
    },
    common::BattleError,
    log::{
        Effectiveness,
        TurnEvent,
        TurnLog,
    },
};

/// Where a battle stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "side", rename_all = "snake_case")]
pub enum BattleStatus {
    /// The battle is waiting for the given side to choose a move.
    AwaitingMove(Side),
    /// The battle is over, and the given side won.
    Finished(Side),
}

impl BattleStatus {
    /// The side expected to act next, if the battle is still going.
    pub fn awaiting(&self) -> Option<Side> {
        match self {
            Self::AwaitingMove(side) => Some(*side),
            Self::Finished(_) => None,
        }
    }

    /// The winning side, if the battle is over.
    pub fn winner(&self) -> Option<Side> {
        match self {
            Self::AwaitingMove(_) => None,
            Self::Finished(side) => Some(*side),
        }
    }
}

/// Read access shared by battles in every phase.
pub trait BattleView {
    /// The roster of the given side.
    fn roster(&self, side: Side) -> &Roster;
    /// Events of the most recently resolved turn.
    fn log(&self) -> &TurnLog;
    fn status(&self) -> BattleStatus;
    fn mode(&self) -> BattleMode;
    /// Number of turns resolved so far.
    fn turn(&self) -> u32;

    /// A serializable summary for the presentation layer.
    fn snapshot(&self) -> BattleSnapshot {
        BattleSnapshot::from_view(self)
    }
}

/// State common to ongoing and finished battles.
#[derive(Debug, Clone)]
struct BattleState {
    mode: BattleMode,
    rosters: [Roster; 2],
    log: TurnLog,
    turn: u32,
}

impl BattleState {
    fn roster(&self, side: Side) -> &Roster {
        &self.rosters[side.index()]
    }
}

/// An ongoing battle between two sides, waiting for one of them to choose a move.
///
/// Resolving a turn consumes the battle and hands back either the next [`Battle`] or a
/// [`FinishedBattle`], so a finished battle can never resolve another turn. Rejected turns hand the
/// battle back untouched inside a [`RejectedTurn`].
pub struct Battle {
    state: BattleState,
    awaiting: Side,
    type_chart: TypeChart,
    prng: Box<dyn PseudoRandomNumberGenerator>,
}

impl Battle {
    /// Creates a new battle.
    ///
    /// Every combatant is validated. The side whose first combatant is faster moves first, and side
    /// A wins speed ties.
    pub fn new(
        options: BattleOptions,
        engine_options: BattleEngineOptions,
    ) -> Result<Self, BattleError> {
        let side_a = Roster::from_data(Side::A, options.side_a)?;
        let side_b = Roster::from_data(Side::B, options.side_b)?;
        let awaiting = if side_b.active()?.speed() > side_a.active()?.speed() {
            Side::B
        } else {
            Side::A
        };
        let prng = (engine_options.rng_factory)(options.seed);
        debug!(
            "starting {:?} battle between {} ({}) and {} ({}) with seed {}; {awaiting} moves first",
            options.mode,
            side_a.name(),
            side_a.members().len(),
            side_b.name(),
            side_b.members().len(),
            prng.initial_seed(),
        );
        Ok(Self {
            state: BattleState {
                mode: options.mode,
                rosters: [side_a, side_b],
                log: TurnLog::new(),
                turn: 0,
            },
            awaiting,
            type_chart: engine_options.type_chart,
            prng,
        })
    }

    /// The side expected to choose a move.
    pub fn awaiting(&self) -> Side {
        self.awaiting
    }

    /// The seed the battle's random number generator started with.
    pub fn seed(&self) -> u64 {
        self.prng.initial_seed()
    }

    /// The battle's random number generator.
    ///
    /// Meant for tests that control the generator's output.
    pub fn prng_mut(&mut self) -> &mut dyn PseudoRandomNumberGenerator {
        self.prng.as_mut()
    }

    /// Resolves a turn for the given side.
    ///
    /// With a move index, the attacker uses that move. Without one, a move is picked uniformly at
    /// random. The active combatant of `side` attacks the active combatant of the other side.
    ///
    /// The previous turn's log is cleared before new events are recorded.
    pub fn resolve_turn(
        mut self,
        side: Side,
        move_index: Option<usize>,
    ) -> Result<Match, RejectedTurn> {
        if let Err(error) = self.validate_turn(side, move_index) {
            return Err(RejectedTurn::new(self, error));
        }
        match self.execute_turn(side, move_index) {
            Ok(BattleStatus::AwaitingMove(next)) => {
                self.awaiting = next;
                Ok(Match::Ongoing(self))
            }
            Ok(BattleStatus::Finished(winner)) => Ok(Match::Finished(self.finish(winner))),
            Err(error) => Err(RejectedTurn::new(self, error)),
        }
    }

    /// Resolves a turn for the scripted opponent, which picks a move at random.
    ///
    /// Only valid in single-player battles while the scripted side is expected to act. The battle
    /// never resolves scripted turns on its own.
    pub fn resolve_scripted_turn(self) -> Result<Match, RejectedTurn> {
        match self.state.mode.scripted_side() {
            Some(side) => self.resolve_turn(side, None),
            None => Err(RejectedTurn::new(self, BattleError::NoScriptedOpponent)),
        }
    }

    /// Ends the battle immediately, with the other side winning.
    pub fn forfeit(mut self, side: Side) -> FinishedBattle {
        self.state.log.clear();
        self.state.log.push(TurnEvent::Forfeit {
            side_name: self.state.roster(side).name().to_owned(),
        });
        debug!("{side} forfeited on turn {}", self.state.turn);
        self.finish(side.foe())
    }

    fn finish(self, winner: Side) -> FinishedBattle {
        debug!(
            "{winner} ({}) won after {} turns",
            self.state.roster(winner).name(),
            self.state.turn
        );
        FinishedBattle {
            state: self.state,
            winner,
        }
    }

    fn validate_turn(&self, side: Side, move_index: Option<usize>) -> Result<(), BattleError> {
        if side != self.awaiting {
            return Err(BattleError::NotYourTurn {
                side,
                awaiting: self.awaiting,
            });
        }
        let attacker = self.state.roster(side).active()?;
        self.state.roster(side.foe()).active()?;
        match move_index {
            Some(index) if index >= attacker.moves().len() => Err(BattleError::InvalidMoveIndex {
                index,
                count: attacker.moves().len(),
            }),
            _ => Ok(()),
        }
    }

    fn execute_turn(
        &mut self,
        side: Side,
        move_index: Option<usize>,
    ) -> Result<BattleStatus, BattleError> {
        let target = side.foe();
        let attacker = self.state.rosters[side.index()].active()?;
        let defender = self.state.rosters[target.index()].active()?;

        let count = attacker.moves().len();
        let index = match move_index {
            Some(index) => index,
            None => rand_util::range(self.prng.as_mut(), 0, count as u64) as usize,
        };
        let mv = attacker
            .moves()
            .get(index)
            .ok_or(BattleError::InvalidMoveIndex { index, count })?;

        let type_multiplier = self
            .type_chart
            .effectiveness(mv.primary_type, defender.types());
        let roll = DamageRoll {
            level: attacker.level(),
            base_power: mv.base_power,
            attack: attacker.attack(),
            defense: defender.defense(),
            variance: rand_util::uniform(self.prng.as_mut(), MIN_VARIANCE, MAX_VARIANCE),
            type_multiplier,
        };
        let damage = calculate_damage(&roll);
        trace!("{roll:?} => {damage} damage");

        let attack = TurnEvent::Attack {
            attacker: attacker.name().to_owned(),
            move_name: mv.name.clone(),
            defender: defender.name().to_owned(),
            damage,
        };
        let defender_name = defender.name().to_owned();

        self.state.turn += 1;
        self.state.log.clear();
        let roster = &mut self.state.rosters[target.index()];
        let remaining = roster.active_mut()?.apply_damage(damage);
        debug!(
            "turn {}: {attack} {defender_name} has {remaining} health left",
            self.state.turn
        );
        self.state.log.push(attack);
        if let Some(effectiveness) = Effectiveness::from_multiplier(type_multiplier) {
            self.state
                .log
                .push(TurnEvent::Effectiveness { effectiveness });
        }

        if remaining > 0 {
            return Ok(BattleStatus::AwaitingMove(target));
        }

        self.state.log.push(TurnEvent::Faint {
            combatant: defender_name,
        });
        if !roster.advance_if_fainted() {
            return Ok(BattleStatus::Finished(side));
        }
        let replacement = roster.active()?.name().to_owned();
        self.state.log.push(TurnEvent::SendOut {
            side_name: roster.name().to_owned(),
            combatant: replacement,
        });
        Ok(BattleStatus::AwaitingMove(target))
    }
}

impl BattleView for Battle {
    fn roster(&self, side: Side) -> &Roster {
        self.state.roster(side)
    }

    fn log(&self) -> &TurnLog {
        &self.state.log
    }

    fn status(&self) -> BattleStatus {
        BattleStatus::AwaitingMove(self.awaiting)
    }

    fn mode(&self) -> BattleMode {
        self.state.mode
    }

    fn turn(&self) -> u32 {
        self.state.turn
    }
}

impl fmt::Debug for Battle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Battle")
            .field("state", &self.state)
            .field("awaiting", &self.awaiting)
            .field("seed", &self.prng.initial_seed())
            .finish_non_exhaustive()
    }
}

/// A battle that has ended.
#[derive(Debug, Clone)]
pub struct FinishedBattle {
    state: BattleState,
    winner: Side,
}

impl FinishedBattle {
    pub fn winner(&self) -> Side {
        self.winner
    }
}

impl BattleView for FinishedBattle {
    fn roster(&self, side: Side) -> &Roster {
        self.state.roster(side)
    }

    fn log(&self) -> &TurnLog {
        &self.state.log
    }

    fn status(&self) -> BattleStatus {
        BattleStatus::Finished(self.winner)
    }

    fn mode(&self) -> BattleMode {
        self.state.mode
    }

    fn turn(&self) -> u32 {
        self.state.turn
    }
}

/// The result of a resolved turn.
#[derive(Debug)]
pub enum Match {
    Ongoing(Battle),
    Finished(FinishedBattle),
}

impl Match {
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished(_))
    }

    /// The ongoing battle, if the battle has not ended.
    pub fn ongoing(self) -> Option<Battle> {
        match self {
            Self::Ongoing(battle) => Some(battle),
            Self::Finished(_) => None,
        }
    }

    /// The finished battle, if the battle has ended.
    pub fn finished(self) -> Option<FinishedBattle> {
        match self {
            Self::Ongoing(_) => None,
            Self::Finished(battle) => Some(battle),
        }
    }

    fn view(&self) -> &dyn BattleView {
        match self {
            Self::Ongoing(battle) => battle,
            Self::Finished(battle) => battle,
        }
    }
}

impl BattleView for Match {
    fn roster(&self, side: Side) -> &Roster {
        self.view().roster(side)
    }

    fn log(&self) -> &TurnLog {
        self.view().log()
    }

    fn status(&self) -> BattleStatus {
        self.view().status()
    }

    fn mode(&self) -> BattleMode {
        self.view().mode()
    }

    fn turn(&self) -> u32 {
        self.view().turn()
    }
}

/// A turn the battle refused to resolve.
///
/// Holds the battle exactly as it was before the call, so the caller can correct its input and
/// try again.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct RejectedTurn {
    battle: Box<Battle>,
    error: BattleError,
}

impl RejectedTurn {
    fn new(battle: Battle, error: BattleError) -> Self {
        Self {
            battle: Box::new(battle),
            error,
        }
    }

    pub fn error(&self) -> &BattleError {
        &self.error
    }

    pub fn battle(&self) -> &Battle {
        &self.battle
    }

    /// Recovers the untouched battle.
    pub fn into_battle(self) -> Battle {
        *self.battle
    }

    pub fn into_parts(self) -> (Battle, BattleError) {
        (*self.battle, self.error)
    }
}
