mod data_store;
mod log_assert;
mod rng;
mod setup;
mod test_battle_builder;

pub use data_store::{
    DATA_DIR_ENV,
    local_data_store,
    static_local_data_store,
};
pub use log_assert::assert_turn_logs_eq;
pub use rng::{
    ControlledRandomNumberGenerator,
    get_controlled_rng_for_battle,
};
pub use setup::setup_test_environment;
pub use test_battle_builder::TestBattleBuilder;
