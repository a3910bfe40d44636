use std::io::{
    BufRead,
    Write,
};

use anyhow::{
    Error,
    Result,
};
use log::debug;
use skirmish::{
    Battle,
    BattleView,
    Match,
    Side,
};

use crate::render;

/// A choice read from the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Move(usize),
    Random,
    Forfeit,
}

impl Command {
    fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "r" | "random" => Some(Self::Random),
            "f" | "forfeit" => Some(Self::Forfeit),
            other => match other.parse::<usize>() {
                Ok(number) if number > 0 => Some(Self::Move(number - 1)),
                _ => None,
            },
        }
    }
}

/// Drives a battle from terminal input until it ends.
///
/// The scripted opponent always acts on its own. With `auto`, human sides pick random moves too.
pub struct Session<R, W> {
    input: R,
    output: W,
    auto: bool,
    json: bool,
}

impl<R, W> Session<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W, auto: bool, json: bool) -> Self {
        Self {
            input,
            output,
            auto,
            json,
        }
    }

    /// Plays the battle to the end, returning the winner.
    pub fn run(&mut self, mut battle: Battle) -> Result<Side> {
        self.show_state(&battle)?;
        loop {
            let side = battle.awaiting();
            let result = if battle.mode().scripted_side() == Some(side) {
                battle.resolve_scripted_turn()
            } else if self.auto {
                battle.resolve_turn(side, None)
            } else {
                match self.prompt(&battle, side)? {
                    Command::Move(index) => battle.resolve_turn(side, Some(index)),
                    Command::Random => battle.resolve_turn(side, None),
                    Command::Forfeit => {
                        let finished = battle.forfeit(side);
                        self.show_log(&finished)?;
                        self.show_state(&finished)?;
                        return Ok(finished.winner());
                    }
                }
            };
            match result {
                Ok(Match::Ongoing(next)) => {
                    self.show_log(&next)?;
                    self.show_state(&next)?;
                    battle = next;
                }
                Ok(Match::Finished(finished)) => {
                    self.show_log(&finished)?;
                    self.show_state(&finished)?;
                    return Ok(finished.winner());
                }
                Err(rejected) => {
                    if !rejected.error().is_recoverable() {
                        return Err(rejected.into());
                    }
                    debug!("rejected turn: {rejected}");
                    writeln!(self.output, "{rejected}")?;
                    battle = rejected.into_battle();
                }
            }
        }
    }

    fn prompt(&mut self, battle: &Battle, side: Side) -> Result<Command> {
        let roster = battle.roster(side);
        let active = roster.active()?;
        loop {
            writeln!(
                self.output,
                "{}, what will {} do?",
                roster.name(),
                active.name()
            )?;
            for line in render::move_lines(active) {
                writeln!(self.output, "{line}")?;
            }
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(Error::msg("input closed before the battle ended"));
            }
            match Command::parse(&line) {
                Some(command) => return Ok(command),
                None => writeln!(self.output, "Unrecognized choice: {}", line.trim())?,
            }
        }
    }

    fn show_log(&mut self, battle: &dyn BattleView) -> Result<()> {
        for line in battle.log().lines() {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    fn show_state(&mut self, battle: &dyn BattleView) -> Result<()> {
        let snapshot = battle.snapshot();
        if self.json {
            writeln!(self.output, "{}", serde_json::to_string(&snapshot)?)?;
        } else {
            for line in render::snapshot_lines(&snapshot) {
                writeln!(self.output, "{line}")?;
            }
        }
        Ok(())
    }
}
