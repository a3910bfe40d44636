mod move_data;

pub use move_data::{
    MAX_BASE_POWER,
    MAX_MOVES,
    MoveData,
};
