extern crate alloc;

pub mod battle;
pub mod common;
pub mod log;
pub mod teams;

pub mod data {
    pub use skirmish_data::*;
}

pub mod rng {
    pub use skirmish_prng::*;
}

pub use battle::*;
pub use common::*;
pub use teams::*;
