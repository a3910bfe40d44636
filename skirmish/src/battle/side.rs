use std::fmt::{
    self,
    Display,
};

use serde::{
    Deserialize,
    Serialize,
};

/// One of the two sides of a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Side {
    #[serde(rename = "a", alias = "A")]
    A,
    #[serde(rename = "b", alias = "B")]
    B,
}

impl Side {
    /// Both sides, in order.
    pub const BOTH: [Side; 2] = [Side::A, Side::B];

    /// The opposing side.
    pub fn foe(&self) -> Side {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    /// Index of the side, for array storage.
    pub fn index(&self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }

    /// The name used for the side when none is given.
    pub fn default_name(&self) -> &'static str {
        match self {
            Self::A => "Team A",
            Self::B => "Team B",
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "side A"),
            Self::B => write!(f, "side B"),
        }
    }
}
