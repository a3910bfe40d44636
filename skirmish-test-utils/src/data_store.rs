use std::{
    env,
    path::Path,
    sync::OnceLock,
};

use anyhow::Result;
use skirmish::data::LocalDataStore;

/// Environment variable that overrides the data directory used in tests.
pub const DATA_DIR_ENV: &str = "SKIRMISH_DATA_DIR";

fn data_dir() -> String {
    env::var(DATA_DIR_ENV).unwrap_or_else(|_| {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("data")
            .to_string_lossy()
            .into_owned()
    })
}

/// Loads a fresh [`LocalDataStore`] from the repository's data directory.
pub fn local_data_store() -> Result<LocalDataStore> {
    LocalDataStore::new(data_dir())
}

/// A [`LocalDataStore`] shared by every test in the binary.
///
/// Panics if the data directory cannot be loaded.
pub fn static_local_data_store() -> &'static LocalDataStore {
    static DATA: OnceLock<LocalDataStore> = OnceLock::new();
    DATA.get_or_init(|| match local_data_store() {
        Ok(data) => data,
        Err(error) => panic!("failed to load test data from {}: {error:#}", data_dir()),
    })
}
