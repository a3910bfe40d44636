use std::fmt::{
    self,
    Display,
};

use serde::Serialize;

/// Qualitative note on how effective a hit was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Effectiveness {
    SuperEffective,
    NotVeryEffective,
    NoEffect,
}

impl Effectiveness {
    /// The note for a type multiplier, if the multiplier deserves one.
    pub fn from_multiplier(multiplier: f32) -> Option<Self> {
        if multiplier > 1f32 {
            Some(Self::SuperEffective)
        } else if multiplier <= 0f32 {
            Some(Self::NoEffect)
        } else if multiplier < 1f32 {
            Some(Self::NotVeryEffective)
        } else {
            None
        }
    }
}

/// A single event that occurred while resolving a turn.
///
/// Events are structured so that the presentation layer can format them however it wishes. The
/// [`Display`] implementation gives a plain English rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TurnEvent {
    /// A combatant used a move on the opposing combatant.
    Attack {
        attacker: String,
        move_name: String,
        defender: String,
        damage: u32,
    },
    /// The hit was unusually effective or ineffective.
    Effectiveness { effectiveness: Effectiveness },
    /// A combatant's health reached zero.
    Faint { combatant: String },
    /// A side replaced its fainted combatant with the next one on the roster.
    SendOut { side_name: String, combatant: String },
    /// A side gave up the battle.
    Forfeit { side_name: String },
}

impl Display for TurnEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attack {
                attacker,
                move_name,
                defender,
                damage,
            } => write!(
                f,
                "{attacker} used {move_name} on {defender} for {damage} damage!"
            ),
            Self::Effectiveness { effectiveness } => match effectiveness {
                Effectiveness::SuperEffective => write!(f, "It's super effective!"),
                Effectiveness::NotVeryEffective => write!(f, "It's not very effective..."),
                Effectiveness::NoEffect => write!(f, "It had no effect!"),
            },
            Self::Faint { combatant } => write!(f, "{combatant} fainted!"),
            Self::SendOut {
                side_name,
                combatant,
            } => write!(f, "{side_name} sent out {combatant}!"),
            Self::Forfeit { side_name } => write!(f, "{side_name} forfeited the battle!"),
        }
    }
}

#[cfg(test)]
mod turn_event_test {
    use crate::log::{
        Effectiveness,
        TurnEvent,
    };

    #[test]
    fn notes_only_non_neutral_multipliers() {
        assert_eq!(Effectiveness::from_multiplier(1f32), None);
        assert_eq!(
            Effectiveness::from_multiplier(2f32),
            Some(Effectiveness::SuperEffective)
        );
        assert_eq!(
            Effectiveness::from_multiplier(4f32),
            Some(Effectiveness::SuperEffective)
        );
        assert_eq!(
            Effectiveness::from_multiplier(0.5),
            Some(Effectiveness::NotVeryEffective)
        );
        assert_eq!(
            Effectiveness::from_multiplier(0.25),
            Some(Effectiveness::NotVeryEffective)
        );
        assert_eq!(
            Effectiveness::from_multiplier(0f32),
            Some(Effectiveness::NoEffect)
        );
    }

    #[test]
    fn formats_events() {
        assert_eq!(
            TurnEvent::Attack {
                attacker: "Charmander".to_owned(),
                move_name: "Ember".to_owned(),
                defender: "Bulbasaur".to_owned(),
                damage: 37,
            }
            .to_string(),
            "Charmander used Ember on Bulbasaur for 37 damage!"
        );
        assert_eq!(
            TurnEvent::SendOut {
                side_name: "Opponent".to_owned(),
                combatant: "Squirtle".to_owned(),
            }
            .to_string(),
            "Opponent sent out Squirtle!"
        );
    }

    #[test]
    fn serializes_tagged() {
        assert_eq!(
            serde_json::to_string(&TurnEvent::Faint {
                combatant: "Pikachu".to_owned(),
            })
            .unwrap(),
            r#"{"type":"faint","combatant":"Pikachu"}"#
        );
        assert_eq!(
            serde_json::to_string(&TurnEvent::Effectiveness {
                effectiveness: Effectiveness::NoEffect,
            })
            .unwrap(),
            r#"{"type":"effectiveness","effectiveness":"no_effect"}"#
        );
    }
}
