use serde::{
    Deserialize,
    Serialize,
};
use skirmish_data::{
    MoveData,
    StatTable,
    Type,
};

/// A single combatant record, as handed over by a stat provider.
///
/// Stats are already scaled to the combatant's level; `stats.hp` is the maximum health.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatantData {
    /// Display name.
    pub name: String,
    /// Level, at least 1.
    pub level: u8,
    /// One or two distinct types.
    pub types: Vec<Type>,
    /// Leveled stats.
    pub stats: StatTable,
    /// Current health. Starts at maximum health when not given.
    #[serde(default)]
    pub health: Option<u16>,
    /// Up to four moves. A combatant with no moves knows Tackle.
    #[serde(default)]
    pub moves: Vec<MoveData>,
}

/// A team of combatants, in the order they are sent out.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamData {
    pub members: Vec<CombatantData>,
}

#[cfg(test)]
mod team_data_test {
    use skirmish_data::Type;

    use crate::teams::TeamData;

    #[test]
    fn deserializes_team() {
        let team: TeamData = serde_json::from_str(
            r#"{
                "members": [
                    {
                        "name": "Charmander",
                        "level": 50,
                        "types": ["Fire"],
                        "stats": {"hp": 139, "atk": 52, "def": 43, "spe": 65},
                        "moves": [{"name": "Ember", "type": "Fire", "power": 40}]
                    }
                ]
            }"#,
        )
        .unwrap();
        let member = &team.members[0];
        assert_eq!(member.name, "Charmander");
        assert_eq!(member.types, vec![Type::Fire]);
        assert_eq!(member.stats.hp, 139);
        assert_eq!(member.health, None);
        assert_eq!(member.moves[0].base_power, 40);
    }
}
