mod event;
mod turn_log;

pub use event::{
    Effectiveness,
    TurnEvent,
};
pub use turn_log::TurnLog;
