/// Inputs to a single damage calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageRoll {
    /// Attacker level.
    pub level: u8,
    /// Move base power.
    pub base_power: u8,
    /// Attacker attack stat.
    pub attack: u16,
    /// Defender defense stat.
    pub defense: u16,
    /// Random factor in `[0.85, 1.0]`.
    pub variance: f64,
    /// Type effectiveness multiplier.
    pub type_multiplier: f32,
}

/// Lower bound of the random damage factor.
pub const MIN_VARIANCE: f64 = 0.85;
/// Upper bound of the random damage factor.
pub const MAX_VARIANCE: f64 = 1.0;

/// Calculates the damage a hit deals.
///
/// ```text
/// floor(((2 * level / 5 + 2) * power * (attack / defense) / 50 + 2) * variance * multiplier)
/// ```
///
/// The arithmetic is real-valued, and only the final result is truncated. A defense of 0 is
/// treated as 1.
pub fn calculate_damage(roll: &DamageRoll) -> u32 {
    let level = roll.level as f64;
    let power = roll.base_power as f64;
    let ratio = roll.attack as f64 / roll.defense.max(1) as f64;
    let base = (2.0 * level / 5.0 + 2.0) * power * ratio / 50.0 + 2.0;
    let damage = base * roll.variance * roll.type_multiplier as f64;
    // Float to integer casts saturate, so a zero or negative product becomes 0.
    damage.floor() as u32
}
