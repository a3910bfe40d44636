use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use skirmish::{
    Battle,
    BattleMode,
    BattleStatus,
    BattleView,
    CombatantData,
    Match,
    Side,
    rng::MAX_OUTPUT,
};
use skirmish_test_utils::{
    TestBattleBuilder,
    assert_turn_logs_eq,
    get_controlled_rng_for_battle,
};

fn combatant(json: &str) -> CombatantData {
    serde_json::from_str(json).unwrap()
}

fn charmander() -> CombatantData {
    combatant(
        r#"{
            "name": "Charmander",
            "level": 50,
            "types": ["Fire"],
            "stats": {"hp": 120, "atk": 100, "def": 50, "spe": 100},
            "moves": [{"name": "Ember", "type": "Fire", "power": 40}]
        }"#,
    )
}

fn weakened_bulbasaur() -> CombatantData {
    combatant(
        r#"{
            "name": "Bulbasaur",
            "level": 50,
            "types": ["Grass", "Poison"],
            "stats": {"hp": 120, "atk": 50, "def": 50, "spe": 45},
            "health": 10,
            "moves": [{"name": "Tackle", "type": "Normal", "power": 40}]
        }"#,
    )
}

fn squirtle() -> CombatantData {
    combatant(
        r#"{
            "name": "Squirtle",
            "level": 50,
            "types": ["Water"],
            "stats": {"hp": 120, "atk": 50, "def": 65, "spe": 43},
            "moves": [{"name": "Water Gun", "type": "Water", "power": 40}]
        }"#,
    )
}

fn make_battle(side_b: Vec<CombatantData>) -> Battle {
    let mut builder = TestBattleBuilder::new()
        .with_seed(0)
        .with_mode(BattleMode::TwoPlayer)
        .with_controlled_rng(true)
        .with_side_name(Side::A, "Red")
        .with_side_name(Side::B, "Blue")
        .with_combatant(Side::A, charmander());
    for combatant in side_b {
        builder = builder.with_combatant(Side::B, combatant);
    }
    let mut battle = builder.build().unwrap();
    get_controlled_rng_for_battle(&mut battle)
        .unwrap()
        .insert_fake_value(1, MAX_OUTPUT);
    battle
}

#[test]
fn fainted_combatant_is_replaced_and_turn_passes() {
    let battle = make_battle(vec![weakened_bulbasaur(), squirtle()]);
    let battle = battle.resolve_turn(Side::A, Some(0)).unwrap();
    assert_turn_logs_eq(
        &battle,
        &[
            "Charmander used Ember on Bulbasaur for 74 damage!",
            "It's super effective!",
            "Bulbasaur fainted!",
            "Blue sent out Squirtle!",
        ],
    );
    assert_eq!(battle.status(), BattleStatus::AwaitingMove(Side::B));

    let roster = battle.roster(Side::B);
    assert_eq!(roster.active_index(), 1);
    assert_eq!(roster.fainted_count(), 1);
    assert_eq!(roster.members()[0].health(), 0);
    assert_eq!(roster.active().unwrap().name(), "Squirtle");
    assert_eq!(roster.active().unwrap().health(), 120);
}

#[test]
fn replacement_acts_next() {
    let battle = make_battle(vec![weakened_bulbasaur(), squirtle()]);
    let battle = battle
        .resolve_turn(Side::A, Some(0))
        .unwrap()
        .ongoing()
        .unwrap();
    let battle = battle.resolve_turn(Side::B, Some(0)).unwrap();
    let lines = battle.log().lines().collect::<Vec<_>>();
    assert!(
        lines[0].starts_with("Squirtle used Water Gun on Charmander for "),
        "{lines:?}"
    );
    assert_eq!(lines[1], "It's super effective!");
    assert_eq!(battle.status(), BattleStatus::AwaitingMove(Side::A));
}

#[test]
fn last_combatant_fainting_finishes_battle() {
    let battle = make_battle(vec![weakened_bulbasaur()]);
    let battle = battle.resolve_turn(Side::A, Some(0)).unwrap();
    assert_turn_logs_eq(
        &battle,
        &[
            "Charmander used Ember on Bulbasaur for 74 damage!",
            "It's super effective!",
            "Bulbasaur fainted!",
        ],
    );
    assert_eq!(battle.status(), BattleStatus::Finished(Side::A));
    assert_matches!(battle, Match::Finished(battle) => {
        assert_eq!(battle.winner(), Side::A);
        assert!(battle.roster(Side::B).is_defeated());
        assert_eq!(battle.roster(Side::B).members()[0].health(), 0);
    });
}

#[test]
fn skips_members_that_start_fainted() {
    let fainted_squirtle = CombatantData {
        health: Some(0),
        ..squirtle()
    };
    let pikachu = combatant(
        r#"{
            "name": "Pikachu",
            "level": 50,
            "types": ["Electric"],
            "stats": {"hp": 95, "atk": 55, "def": 40, "spe": 90}
        }"#,
    );
    let battle = make_battle(vec![weakened_bulbasaur(), fainted_squirtle, pikachu]);
    let battle = battle.resolve_turn(Side::A, Some(0)).unwrap();
    assert_eq!(
        battle.log().lines().last().as_deref(),
        Some("Blue sent out Pikachu!")
    );
    assert_eq!(battle.roster(Side::B).active_index(), 2);
    assert_eq!(
        battle.roster(Side::B).active().unwrap().moves()[0].name,
        "Tackle"
    );
}
