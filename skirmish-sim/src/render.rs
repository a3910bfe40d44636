use skirmish::{
    ActiveCombatantSnapshot,
    BattleSnapshot,
    BattleStatus,
    Combatant,
    Side,
    SideSnapshot,
};

fn combatant_line(active: &ActiveCombatantSnapshot) -> String {
    let types = active
        .types
        .iter()
        .map(|typ| typ.name())
        .collect::<Vec<_>>()
        .join("/");
    format!(
        "{} Lv{} [{types}] {}/{} HP",
        active.name, active.level, active.health, active.max_health
    )
}

/// Renders one side of the battle on a single line.
pub fn side_line(side: &SideSnapshot) -> String {
    let active = side
        .active
        .as_ref()
        .map(combatant_line)
        .unwrap_or_else(|| "nobody".to_owned());
    format!(
        "{}: {active} ({}/{} remaining)",
        side.name, side.remaining, side.total
    )
}

/// Renders the state of the battle between turns.
pub fn snapshot_lines(snapshot: &BattleSnapshot) -> Vec<String> {
    let status = match snapshot.status {
        BattleStatus::AwaitingMove(side) => {
            format!("Turn {}: {} to move", snapshot.turn + 1, snapshot.side(side).name)
        }
        BattleStatus::Finished(side) => format!("{} wins!", snapshot.side(side).name),
    };
    vec![
        side_line(snapshot.side(Side::A)),
        side_line(snapshot.side(Side::B)),
        status,
    ]
}

/// Renders the moves of the combatant about to act, numbered from 1.
pub fn move_lines(combatant: &Combatant) -> Vec<String> {
    combatant
        .moves()
        .iter()
        .enumerate()
        .map(|(index, mv)| {
            format!(
                "  {}. {} ({}, {})",
                index + 1,
                mv.name,
                mv.primary_type.name(),
                mv.base_power
            )
        })
        .chain([
            "  r. random move".to_owned(),
            "  f. forfeit".to_owned(),
        ])
        .collect()
}
