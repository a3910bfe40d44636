use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};
use skirmish_data::TypeChart;
use skirmish_prng::{
    PseudoRandomNumberGenerator,
    RealPseudoRandomNumberGenerator,
};

use crate::{
    battle::Side,
    teams::TeamData,
};

/// Who controls each side of a battle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattleMode {
    /// Side A is played by a human, side B by the scripted opponent.
    #[default]
    SinglePlayer,
    /// Both sides are played by humans sharing the battle.
    TwoPlayer,
}

impl BattleMode {
    /// The side played by the scripted opponent, if any.
    pub fn scripted_side(&self) -> Option<Side> {
        match self {
            Self::SinglePlayer => Some(Side::B),
            Self::TwoPlayer => None,
        }
    }
}

/// How strong the scripted opponent is.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Difficulty {
    #[string = "Easy"]
    Easy,
    #[string = "Normal"]
    #[default]
    Normal,
    #[string = "Hard"]
    Hard,
}

impl Difficulty {
    /// The level human players battle at.
    pub const PLAYER_LEVEL: u8 = 50;

    /// The level the scripted opponent's team battles at.
    pub fn opponent_level(&self) -> u8 {
        match self {
            Self::Easy => 40,
            Self::Normal => 50,
            Self::Hard => 60,
        }
    }
}

/// A single side of a battle.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideData {
    /// Display name of the side. Defaults to "Team A" or "Team B".
    #[serde(default)]
    pub name: Option<String>,
    /// The side's team, in the order combatants are sent out.
    pub team: TeamData,
}

/// Options for a new battle.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleOptions {
    /// The initial seed for random number generation.
    ///
    /// This can be used to effectively replay or control a battle.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub mode: BattleMode,
    pub side_a: SideData,
    pub side_b: SideData,
}

fn default_rng_factory() -> fn(seed: Option<u64>) -> Box<dyn PseudoRandomNumberGenerator> {
    |seed: Option<u64>| Box::new(RealPseudoRandomNumberGenerator::new(seed))
}

/// Options that change how the battle engine itself behaves, which is not specific to any
/// individual battle.
#[derive(Debug, Clone)]
pub struct BattleEngineOptions {
    /// Function for creating the battle's random number generator.
    ///
    /// Primarily useful for tests where we wish to have fine-grained control over battle RNG.
    pub rng_factory: fn(seed: Option<u64>) -> Box<dyn PseudoRandomNumberGenerator>,

    /// The type chart used for every hit.
    pub type_chart: TypeChart,
}

impl Default for BattleEngineOptions {
    fn default() -> Self {
        Self {
            rng_factory: default_rng_factory(),
            type_chart: TypeChart::standard(),
        }
    }
}

#[cfg(test)]
mod battle_options_test {
    use pretty_assertions::assert_eq;

    use crate::battle::{
        BattleMode,
        BattleOptions,
        Difficulty,
        Side,
    };

    #[test]
    fn single_player_scripts_side_b() {
        assert_eq!(BattleMode::SinglePlayer.scripted_side(), Some(Side::B));
        assert_eq!(BattleMode::TwoPlayer.scripted_side(), None);
    }

    #[test]
    fn difficulty_sets_opponent_level() {
        assert_eq!(Difficulty::Easy.opponent_level(), 40);
        assert_eq!(
            Difficulty::Normal.opponent_level(),
            Difficulty::PLAYER_LEVEL
        );
        assert_eq!(Difficulty::Hard.opponent_level(), 60);
    }

    #[test]
    fn deserializes_difficulty_case_insensitively() {
        assert_eq!(
            serde_json::from_str::<Difficulty>(r#""hard""#).unwrap(),
            Difficulty::Hard
        );
        assert_eq!(
            serde_json::to_string(&Difficulty::Easy).unwrap(),
            r#""Easy""#
        );
    }

    #[test]
    fn deserializes_minimal_options() {
        let options: BattleOptions = serde_json::from_str(
            r#"{
                "side_a": {"team": {"members": []}},
                "side_b": {"name": "Rival", "team": {"members": []}}
            }"#,
        )
        .unwrap();
        assert_eq!(options.seed, None);
        assert_eq!(options.mode, BattleMode::SinglePlayer);
        assert_eq!(options.side_a.name, None);
        assert_eq!(options.side_b.name.as_deref(), Some("Rival"));
    }
}
