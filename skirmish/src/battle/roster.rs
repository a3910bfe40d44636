use crate::{
    battle::{
        Combatant,
        Side,
        SideData,
    },
    common::BattleError,
};

/// One side's ordered team of combatants.
///
/// The active index only moves forward, and it always points at a combatant that has not fainted
/// unless every member has fainted.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    side: Side,
    name: String,
    members: Vec<Combatant>,
    active: usize,
}

impl Roster {
    /// Creates a new roster.
    ///
    /// The first member that has not fainted starts out active. Fails if there is no such member.
    pub fn new(side: Side, name: String, members: Vec<Combatant>) -> Result<Self, BattleError> {
        let active = members
            .iter()
            .position(|member| !member.fainted())
            .ok_or(BattleError::IncompleteRoster { side })?;
        Ok(Self {
            side,
            name,
            members,
            active,
        })
    }

    /// Creates a new roster from raw side data, validating every combatant.
    pub fn from_data(side: Side, data: SideData) -> Result<Self, BattleError> {
        let name = data
            .name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| side.default_name().to_owned());
        let members = data
            .team
            .members
            .into_iter()
            .map(Combatant::new)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|error| BattleError::InvalidCombatant { side, error })?;
        Self::new(side, name, members)
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// The display name of the side.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All members, in their original order.
    pub fn members(&self) -> &[Combatant] {
        &self.members
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// The active combatant.
    ///
    /// Fails with [`BattleError::NoCombatantAvailable`] if every member has fainted.
    pub fn active(&self) -> Result<&Combatant, BattleError> {
        self.members
            .get(self.active)
            .filter(|member| !member.fainted())
            .ok_or(BattleError::NoCombatantAvailable)
    }

    pub(crate) fn active_mut(&mut self) -> Result<&mut Combatant, BattleError> {
        self.members
            .get_mut(self.active)
            .filter(|member| !member.fainted())
            .ok_or(BattleError::NoCombatantAvailable)
    }

    /// Number of members that have fainted.
    pub fn fainted_count(&self) -> usize {
        self.members.iter().filter(|member| member.fainted()).count()
    }

    /// Number of members still able to battle.
    pub fn remaining(&self) -> usize {
        self.members.len() - self.fainted_count()
    }

    /// Has every member fainted?
    pub fn is_defeated(&self) -> bool {
        self.remaining() == 0
    }

    /// Moves the active index to the next member that has not fainted, if the active member has
    /// fainted.
    ///
    /// Returns `true` if an active member is available afterwards, `false` if the roster is fully
    /// defeated.
    pub(crate) fn advance_if_fainted(&mut self) -> bool {
        if self
            .members
            .get(self.active)
            .is_some_and(|member| !member.fainted())
        {
            return true;
        }
        match self
            .members
            .iter()
            .enumerate()
            .skip(self.active + 1)
            .find(|(_, member)| !member.fainted())
        {
            Some((index, _)) => {
                self.active = index;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod roster_test {
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;
    use skirmish_data::{
        StatTable,
        Type,
    };

    use crate::{
        battle::{
            Combatant,
            Roster,
            Side,
            SideData,
        },
        common::BattleError,
        teams::{
            CombatantData,
            TeamData,
        },
    };

    fn data(name: &str, health: u16) -> CombatantData {
        CombatantData {
            name: name.to_owned(),
            level: 50,
            types: vec![Type::Normal],
            stats: StatTable {
                hp: 100,
                atk: 50,
                def: 50,
                spe: 50,
            },
            health: Some(health),
            moves: Vec::new(),
        }
    }

    fn combatant(name: &str, health: u16) -> Combatant {
        Combatant::new(data(name, health)).unwrap()
    }

    fn roster(members: Vec<Combatant>) -> Roster {
        Roster::new(Side::A, "Red".to_owned(), members).unwrap()
    }

    #[test]
    fn starts_at_first_healthy_member() {
        let roster = roster(vec![
            combatant("Rattata", 0),
            combatant("Pidgey", 10),
            combatant("Spearow", 10),
        ]);
        assert_eq!(roster.active_index(), 1);
        assert_eq!(roster.active().unwrap().name(), "Pidgey");
        assert_eq!(roster.fainted_count(), 1);
        assert_eq!(roster.remaining(), 2);
    }

    #[test]
    fn fails_without_healthy_member() {
        assert_matches!(
            Roster::new(Side::B, "Blue".to_owned(), Vec::new()),
            Err(BattleError::IncompleteRoster { side: Side::B })
        );
        assert_matches!(
            Roster::new(Side::A, "Red".to_owned(), vec![combatant("Rattata", 0)]),
            Err(BattleError::IncompleteRoster { side: Side::A })
        );
    }

    #[test]
    fn keeps_healthy_active_member() {
        let mut roster = roster(vec![combatant("Pidgey", 10), combatant("Spearow", 10)]);
        assert!(roster.advance_if_fainted());
        assert_eq!(roster.active_index(), 0);
    }

    #[test]
    fn skips_fainted_members_in_order() {
        let mut roster = roster(vec![
            combatant("Pidgey", 10),
            combatant("Rattata", 0),
            combatant("Spearow", 10),
        ]);
        roster.active_mut().unwrap().apply_damage(10);
        assert_matches!(roster.active(), Err(BattleError::NoCombatantAvailable));
        assert!(roster.advance_if_fainted());
        assert_eq!(roster.active_index(), 2);
        assert_eq!(roster.active().unwrap().name(), "Spearow");
    }

    #[test]
    fn reports_defeat() {
        let mut roster = roster(vec![combatant("Rattata", 0), combatant("Pidgey", 10)]);
        roster.active_mut().unwrap().apply_damage(100);
        assert!(!roster.advance_if_fainted());
        assert!(roster.is_defeated());
        assert_eq!(roster.active_index(), 1);
        assert_matches!(roster.active(), Err(BattleError::NoCombatantAvailable));
        assert_matches!(roster.active_mut(), Err(BattleError::NoCombatantAvailable));
    }

    #[test]
    fn builds_from_side_data() {
        let roster = Roster::from_data(
            Side::B,
            SideData {
                name: None,
                team: TeamData {
                    members: vec![data("Pidgey", 10)],
                },
            },
        )
        .unwrap();
        assert_eq!(roster.name(), "Team B");
        assert_eq!(roster.side(), Side::B);
    }

    #[test]
    fn rejects_invalid_members() {
        assert_matches!(
            Roster::from_data(
                Side::A,
                SideData {
                    name: Some("Red".to_owned()),
                    team: TeamData {
                        members: vec![CombatantData {
                            level: 0,
                            ..data("Pidgey", 10)
                        }],
                    },
                },
            ),
            Err(BattleError::InvalidCombatant { side: Side::A, error }) => {
                assert_eq!(
                    error.problems().collect::<Vec<_>>(),
                    vec!["Pidgey must be at least level 1"]
                );
            }
        );
    }
}
