use skirmish_data::StatTable;

/// The level at which leveled stats equal base stats.
const BASELINE_LEVEL: u32 = 50;

/// Calculates a combatant's leveled stats from a species' base stats.
///
/// Every stat scales linearly with `level / 50`, truncated. Maximum health additionally gains
/// `2 * level` so that low-level combatants survive more than one hit.
pub fn calculate_combatant_stats(base_stats: &StatTable, level: u8) -> StatTable {
    let level = level as u32;
    let scale = |value: u16| value as u32 * level / BASELINE_LEVEL;
    let clamp = |value: u32| value.min(u16::MAX as u32) as u16;
    StatTable {
        hp: clamp(scale(base_stats.hp) + 2 * level),
        atk: clamp(scale(base_stats.atk)),
        def: clamp(scale(base_stats.def)),
        spe: clamp(scale(base_stats.spe)),
    }
}
