use std::fmt;

use ahash::HashMap;
use serde::{
    Deserialize,
    Serialize,
    de::Visitor,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The type of a species or move, which determines weaknesses and resistances.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Type {
    #[string = "Normal"]
    #[default]
    Normal,
    #[string = "Fighting"]
    Fighting,
    #[string = "Flying"]
    Flying,
    #[string = "Poison"]
    Poison,
    #[string = "Ground"]
    Ground,
    #[string = "Rock"]
    Rock,
    #[string = "Bug"]
    Bug,
    #[string = "Ghost"]
    Ghost,
    #[string = "Steel"]
    Steel,
    #[string = "Fire"]
    Fire,
    #[string = "Water"]
    Water,
    #[string = "Grass"]
    Grass,
    #[string = "Electric"]
    Electric,
    #[string = "Psychic"]
    Psychic,
    #[string = "Ice"]
    Ice,
    #[string = "Dragon"]
    Dragon,
    #[string = "Dark"]
    Dark,
    #[string = "Fairy"]
    Fairy,
}

impl Type {
    /// Every type, in declaration order.
    pub const ALL: [Type; 18] = [
        Type::Normal,
        Type::Fighting,
        Type::Flying,
        Type::Poison,
        Type::Ground,
        Type::Rock,
        Type::Bug,
        Type::Ghost,
        Type::Steel,
        Type::Fire,
        Type::Water,
        Type::Grass,
        Type::Electric,
        Type::Psychic,
        Type::Ice,
        Type::Dragon,
        Type::Dark,
        Type::Fairy,
    ];

    /// The display name of the type.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Fighting => "Fighting",
            Self::Flying => "Flying",
            Self::Poison => "Poison",
            Self::Ground => "Ground",
            Self::Rock => "Rock",
            Self::Bug => "Bug",
            Self::Ghost => "Ghost",
            Self::Steel => "Steel",
            Self::Fire => "Fire",
            Self::Water => "Water",
            Self::Grass => "Grass",
            Self::Electric => "Electric",
            Self::Psychic => "Psychic",
            Self::Ice => "Ice",
            Self::Dragon => "Dragon",
            Self::Dark => "Dark",
            Self::Fairy => "Fairy",
        }
    }
}

/// Type effectiveness of one type against another.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TypeEffectiveness {
    /// No effect.
    None,
    /// Not very effective.
    Weak,
    /// Normal effectiveness.
    #[default]
    Normal,
    /// Super effective.
    Strong,
}

impl TypeEffectiveness {
    /// The damage multiplier for this effectiveness.
    pub fn multiplier(&self) -> f32 {
        match self {
            Self::None => 0f32,
            Self::Weak => 0.5,
            Self::Normal => 1f32,
            Self::Strong => 2f32,
        }
    }
}

impl From<f32> for TypeEffectiveness {
    fn from(value: f32) -> Self {
        if value < 0f32 || value.abs() < f32::EPSILON {
            Self::None
        } else if value < 0.5 || (value - 0.5).abs() < f32::EPSILON {
            Self::Weak
        } else if value < 1f32 || (value - 1f32).abs() < f32::EPSILON {
            Self::Normal
        } else {
            Self::Strong
        }
    }
}

impl From<TypeEffectiveness> for f32 {
    fn from(value: TypeEffectiveness) -> Self {
        value.multiplier()
    }
}

impl Serialize for TypeEffectiveness {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Weak => serializer.serialize_f32(self.multiplier()),
            _ => serializer.serialize_u32(self.multiplier() as u32),
        }
    }
}

struct TypeEffectivenessVisitor;

impl<'de> Visitor<'de> for TypeEffectivenessVisitor {
    type Value = TypeEffectiveness;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("one of the following values: 0, 0.5, 1, 2")
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Self::Value::from(v as f32))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Self::Value::from(v as f32))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Self::Value::from(v as f32))
    }
}

impl<'de> Deserialize<'de> for TypeEffectiveness {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_f32(TypeEffectivenessVisitor)
    }
}

/// A type table, which contains type effectiveness information for types against some other value.
///
/// The key here is the attacking type. Missing entries are [`TypeEffectiveness::Normal`].
pub type TypeTable<T> = HashMap<Type, HashMap<T, TypeEffectiveness>>;

/// Attacking types that double damage against the listed defending types.
const DOUBLES_DAMAGE_AGAINST: &[(Type, &[Type])] = &[
    (Type::Fire, &[Type::Grass, Type::Ice, Type::Bug, Type::Steel]),
    (Type::Water, &[Type::Fire, Type::Ground, Type::Rock]),
    (Type::Grass, &[Type::Water, Type::Ground, Type::Rock]),
    (Type::Electric, &[Type::Water, Type::Flying]),
    (
        Type::Ice,
        &[Type::Grass, Type::Ground, Type::Flying, Type::Dragon],
    ),
    (
        Type::Fighting,
        &[Type::Normal, Type::Ice, Type::Rock, Type::Dark, Type::Steel],
    ),
    (Type::Poison, &[Type::Grass, Type::Fairy]),
    (
        Type::Ground,
        &[
            Type::Fire,
            Type::Electric,
            Type::Poison,
            Type::Rock,
            Type::Steel,
        ],
    ),
    (Type::Flying, &[Type::Grass, Type::Fighting, Type::Bug]),
    (Type::Psychic, &[Type::Fighting, Type::Poison]),
    (Type::Bug, &[Type::Grass, Type::Psychic, Type::Dark]),
    (Type::Rock, &[Type::Fire, Type::Ice, Type::Flying, Type::Bug]),
    (Type::Ghost, &[Type::Psychic, Type::Ghost]),
    (Type::Dragon, &[Type::Dragon]),
    (Type::Dark, &[Type::Psychic, Type::Ghost]),
    (Type::Steel, &[Type::Ice, Type::Rock, Type::Fairy]),
    (Type::Fairy, &[Type::Fighting, Type::Dragon, Type::Dark]),
];

/// Attacking types that halve damage against the listed defending types.
const HALVES_DAMAGE_AGAINST: &[(Type, &[Type])] = &[
    (Type::Fire, &[Type::Fire, Type::Water, Type::Rock, Type::Dragon]),
    (Type::Water, &[Type::Water, Type::Grass, Type::Dragon]),
    (
        Type::Grass,
        &[
            Type::Fire,
            Type::Grass,
            Type::Poison,
            Type::Flying,
            Type::Bug,
            Type::Dragon,
            Type::Steel,
        ],
    ),
    (Type::Electric, &[Type::Electric, Type::Grass, Type::Dragon]),
    (Type::Ice, &[Type::Fire, Type::Water, Type::Ice, Type::Steel]),
    (
        Type::Fighting,
        &[
            Type::Poison,
            Type::Flying,
            Type::Psychic,
            Type::Bug,
            Type::Fairy,
        ],
    ),
    (
        Type::Poison,
        &[Type::Poison, Type::Ground, Type::Rock, Type::Ghost],
    ),
    (Type::Ground, &[Type::Grass, Type::Bug]),
    (Type::Flying, &[Type::Electric, Type::Rock, Type::Steel]),
    (Type::Psychic, &[Type::Psychic, Type::Steel]),
    (
        Type::Bug,
        &[
            Type::Fire,
            Type::Fighting,
            Type::Poison,
            Type::Flying,
            Type::Ghost,
            Type::Steel,
            Type::Fairy,
        ],
    ),
    (Type::Rock, &[Type::Fighting, Type::Ground, Type::Steel]),
    (Type::Ghost, &[Type::Dark]),
    (Type::Dragon, &[Type::Steel]),
    (Type::Dark, &[Type::Fighting, Type::Dark, Type::Fairy]),
    (
        Type::Steel,
        &[Type::Fire, Type::Water, Type::Electric, Type::Steel],
    ),
    (Type::Fairy, &[Type::Fire, Type::Poison, Type::Steel]),
];

/// Attacking types that have no effect on the listed defending types.
const NULLIFIES_DAMAGE_AGAINST: &[(Type, &[Type])] = &[
    (Type::Normal, &[Type::Ghost]),
    (Type::Electric, &[Type::Ground]),
    (Type::Fighting, &[Type::Ghost]),
    (Type::Poison, &[Type::Steel]),
    (Type::Ground, &[Type::Flying]),
    (Type::Psychic, &[Type::Dark]),
    (Type::Ghost, &[Type::Normal]),
    (Type::Dragon, &[Type::Fairy]),
];

/// A type chart, which contains all type effectiveness information for types against other types.
///
/// The key here is the attacking type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeChart {
    pub types: TypeTable<Type>,
}

impl TypeChart {
    /// Creates an empty type chart, where every matchup is neutral.
    pub fn new() -> Self {
        Self {
            types: TypeTable::default(),
        }
    }

    pub fn from_filled(types: TypeTable<Type>) -> Self {
        Self { types }
    }

    /// The standard type chart used by every battle unless a data store provides another one.
    pub fn standard() -> Self {
        let mut chart = Self::new();
        for (table, effectiveness) in [
            (DOUBLES_DAMAGE_AGAINST, TypeEffectiveness::Strong),
            (HALVES_DAMAGE_AGAINST, TypeEffectiveness::Weak),
            (NULLIFIES_DAMAGE_AGAINST, TypeEffectiveness::None),
        ] {
            for (attacking, defending) in table {
                let row = chart.types.entry(*attacking).or_default();
                row.extend(defending.iter().map(|defending| (*defending, effectiveness)));
            }
        }
        chart
    }

    /// Effectiveness of a single attacking type against a single defending type.
    pub fn matchup(&self, attacking: Type, defending: Type) -> TypeEffectiveness {
        self.types
            .get(&attacking)
            .and_then(|row| row.get(&defending))
            .copied()
            .unwrap_or_default()
    }

    /// Damage multiplier of an attacking type against a set of defending types.
    ///
    /// The result is one of 0, 0.25, 0.5, 1, 2, or 4. Any immunity makes the whole result 0.
    pub fn effectiveness(&self, attacking: Type, defending: &[Type]) -> f32 {
        let mut multiplier = 1f32;
        for defending in defending {
            match self.matchup(attacking, *defending) {
                TypeEffectiveness::None => return 0f32,
                effectiveness => multiplier *= effectiveness.multiplier(),
            }
        }
        multiplier
    }
}

impl Default for TypeChart {
    fn default() -> Self {
        Self::standard()
    }
}
