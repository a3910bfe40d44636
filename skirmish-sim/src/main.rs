//! Terminal driver for skirmish battles.
//!
//! Usage:
//!   cargo run -p skirmish-sim -- --team-a Charmander,Pikachu --difficulty hard
//!   cargo run -p skirmish-sim -- --mode pvp --team-a Squirtle --team-b Bulbasaur
//!   cargo run -p skirmish-sim -- --auto --seed 42

mod render;
mod session;

use std::{
    env,
    io,
};

use anyhow::{
    Context,
    Result,
};
use clap::{
    Parser,
    ValueEnum,
};
use log::info;
use skirmish::{
    Battle,
    BattleEngineOptions,
    BattleMode,
    BattleOptions,
    DataStoreStatProvider,
    Difficulty,
    SideData,
    StatProvider,
    data::{
        DataStore,
        LocalDataStore,
    },
    rng::{
        PseudoRandomNumberGenerator,
        RealPseudoRandomNumberGenerator,
        rand_util,
    },
};
use tracing_subscriber::filter::LevelFilter;

use crate::session::Session;

/// Environment variable pointing at the data directory.
const DATA_DIR_ENV: &str = "SKIRMISH_DATA_DIR";

/// Number of combatants picked for a side when no team is given.
const DEFAULT_TEAM_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    /// Play against the scripted opponent.
    Pve,
    /// Two players share the terminal.
    Pvp,
}

#[derive(Debug, Parser)]
#[command(name = "skirmish-sim", about = "Play a tag-team battle in the terminal")]
struct Args {
    /// Data directory. Defaults to $SKIRMISH_DATA_DIR, then ./data.
    #[arg(long)]
    data_dir: Option<String>,

    #[arg(long, value_enum, default_value_t = ModeArg::Pve)]
    mode: ModeArg,

    /// Strength of the scripted opponent: easy, normal, or hard.
    #[arg(long, default_value_t = Difficulty::Normal)]
    difficulty: Difficulty,

    /// Species for side A, comma-separated. Picked at random when omitted.
    #[arg(long, value_delimiter = ',')]
    team_a: Vec<String>,

    /// Species for side B, comma-separated. Picked at random when omitted.
    #[arg(long, value_delimiter = ',')]
    team_b: Vec<String>,

    /// Seed for the battle and for random team selection.
    #[arg(long)]
    seed: Option<u64>,

    /// Pick every move at random instead of prompting.
    #[arg(long)]
    auto: bool,

    /// Print a JSON snapshot after every turn.
    #[arg(long)]
    json: bool,

    /// Maximum level of diagnostic output.
    #[arg(long, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,
}

fn data_dir(args: &Args) -> String {
    args.data_dir
        .clone()
        .or_else(|| env::var(DATA_DIR_ENV).ok())
        .unwrap_or_else(|| "data".to_owned())
}

fn pick_team(
    data: &dyn DataStore,
    prng: &mut dyn PseudoRandomNumberGenerator,
    requested: &[String],
) -> Result<Vec<String>> {
    if !requested.is_empty() {
        return Ok(requested.to_vec());
    }
    let mut ids = data.all_species_ids()?;
    ids.sort();
    rand_util::shuffle(prng, &mut ids);
    Ok(ids
        .into_iter()
        .take(DEFAULT_TEAM_SIZE)
        .map(|id| id.to_string())
        .collect())
}

fn side(
    provider: &dyn StatProvider,
    name: &str,
    species: &[String],
    level: u8,
) -> Result<SideData> {
    let ids = species.iter().map(|id| id.as_str()).collect::<Vec<_>>();
    Ok(SideData {
        name: Some(name.to_owned()),
        team: provider
            .team(&ids, level)
            .with_context(|| format!("failed to build team for {name}"))?,
    })
}

fn build_battle(args: &Args, data: &dyn DataStore) -> Result<Battle> {
    let mut prng = RealPseudoRandomNumberGenerator::new(args.seed);
    let team_a = pick_team(data, &mut prng, &args.team_a)?;
    let team_b = pick_team(data, &mut prng, &args.team_b)?;

    let (mode, names, level_b) = match args.mode {
        ModeArg::Pve => (
            BattleMode::SinglePlayer,
            ["Player", "Opponent"],
            args.difficulty.opponent_level(),
        ),
        ModeArg::Pvp => (
            BattleMode::TwoPlayer,
            ["Player 1", "Player 2"],
            Difficulty::PLAYER_LEVEL,
        ),
    };

    let provider = DataStoreStatProvider::new(data);
    let options = BattleOptions {
        seed: Some(prng.initial_seed()),
        mode,
        side_a: side(&provider, names[0], &team_a, Difficulty::PLAYER_LEVEL)?,
        side_b: side(&provider, names[1], &team_b, level_b)?,
    };
    info!(
        "{} ({}) vs {} ({})",
        names[0],
        team_a.join(", "),
        names[1],
        team_b.join(", ")
    );
    Battle::new(options, BattleEngineOptions {
        type_chart: data.get_type_chart()?,
        ..Default::default()
    })
    .context("failed to start battle")
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(io::stderr)
        .init();

    let data = LocalDataStore::new(data_dir(&args)).context("failed to load data")?;
    let battle = build_battle(&args, &data)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), args.auto, args.json);
    let winner = session.run(battle)?;
    info!("{winner} won");
    Ok(())
}

#[cfg(test)]
mod args_test {
    use clap::Parser;
    use pretty_assertions::assert_eq;

    use skirmish::Difficulty;

    use crate::{
        Args,
        ModeArg,
    };

    #[test]
    fn parses_defaults() {
        let args = Args::parse_from(["skirmish-sim"]);
        assert_eq!(args.mode, ModeArg::Pve);
        assert_eq!(args.difficulty, Difficulty::Normal);
        assert!(args.team_a.is_empty());
        assert!(!args.auto);
    }

    #[test]
    fn parses_comma_separated_teams() {
        let args = Args::parse_from([
            "skirmish-sim",
            "--mode",
            "pvp",
            "--team-a",
            "Charmander,Pikachu",
            "--seed",
            "42",
        ]);
        assert_eq!(args.mode, ModeArg::Pvp);
        assert_eq!(args.team_a, vec!["Charmander", "Pikachu"]);
        assert_eq!(args.seed, Some(42));
    }

    #[test]
    fn parses_difficulty_labels_case_insensitively() {
        let args = Args::parse_from(["skirmish-sim", "--difficulty", "hard"]);
        assert_eq!(args.difficulty, Difficulty::Hard);
        let args = Args::parse_from(["skirmish-sim", "--difficulty", "Easy"]);
        assert_eq!(args.difficulty, Difficulty::Easy);
        assert!(Args::try_parse_from(["skirmish-sim", "--difficulty", "brutal"]).is_err());
    }
}
