mod error;
mod validation_error;

pub use error::BattleError;
pub use validation_error::ValidationError;
