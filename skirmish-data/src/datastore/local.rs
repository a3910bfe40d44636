use std::{
    env,
    fs::File,
    path::Path,
};

use ahash::HashMap;
use anyhow::{
    Context,
    Error,
    Result,
};
use log::info;
use serde::de::DeserializeOwned;

use crate::{
    DataStore,
    Id,
    MoveData,
    SpeciesData,
    TypeChart,
};

/// An implementation of [`DataStore`] that reads all data locally from disk.
///
/// Layout of the root directory:
/// - `type-chart.json`: optional; the standard chart is used when absent.
/// - `moves/*.json`: objects mapping move names to [`MoveData`].
/// - `mons/*.json`: objects mapping species names to [`SpeciesData`].
#[derive(Debug)]
pub struct LocalDataStore {
    root: String,
    pub type_chart: TypeChart,
    pub moves: HashMap<Id, MoveData>,
    pub species: HashMap<Id, SpeciesData>,
}

impl LocalDataStore {
    /// Type chart file name.
    pub const TYPE_CHART_FILE: &str = "type-chart.json";
    /// Moves directory name.
    pub const MOVES_DIR: &str = "moves";
    /// Species directory name.
    pub const SPECIES_DIR: &str = "mons";

    /// Creates a new instance of [`LocalDataStore`] that reads from the given root directory.
    ///
    /// Fails if the path does not exist, does not point to a directory, or contains malformed data.
    pub fn new<S>(root: S) -> Result<Self>
    where
        S: Into<String>,
    {
        let root = root.into();
        if !Path::new(&root).is_dir() {
            return Err(Error::msg(format!(
                "root directory for LocalDataStore ({root}) does not exist",
            )));
        }
        let mut store = Self {
            root,
            type_chart: TypeChart::standard(),
            moves: HashMap::default(),
            species: HashMap::default(),
        };
        store.initialize()?;
        Ok(store)
    }

    /// Creates a new instance of [`LocalDataStore`] that reads from the root directory at the given
    /// environment variable.
    pub fn new_from_env(env_var: &str) -> Result<Self> {
        Self::new(env::var(env_var).context(format!("{env_var} not defined"))?)
    }

    fn initialize(&mut self) -> Result<()> {
        let type_chart_path = Path::new(&self.root).join(Self::TYPE_CHART_FILE);
        if type_chart_path.is_file() {
            self.type_chart = serde_json::from_reader(
                File::open(type_chart_path).context("failed to read type chart")?,
            )
            .context("failed to parse type chart")?;
        } else {
            info!("{} not found, using the standard type chart", Self::TYPE_CHART_FILE);
        }

        self.moves = self.read_all_files_in_directory::<MoveData>(Self::MOVES_DIR)?;
        self.species = self.read_all_files_in_directory::<SpeciesData>(Self::SPECIES_DIR)?;

        info!(
            "loaded {} moves and {} species from {}",
            self.moves.len(),
            self.species.len(),
            self.root
        );
        Ok(())
    }

    fn read_all_files_in_directory<T: DeserializeOwned>(
        &self,
        dir: &str,
    ) -> Result<HashMap<Id, T>> {
        let tables = Path::new(&self.root)
            .join(dir)
            .read_dir()
            .context(format!("failed to read {dir} directory"))?
            .filter_map(|entry| Some(entry.ok()?.path()))
            .filter(|path| path.is_file())
            .map(|path| {
                let path_name = path.to_string_lossy().to_string();
                serde_json::from_reader::<File, HashMap<String, T>>(
                    File::open(path).context(format!("{path_name} could not be opened"))?,
                )
                .context(format!("failed to read {dir} data from {path_name}"))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(tables
            .into_iter()
            .flat_map(|table| table.into_iter())
            .map(|(name, value)| (Id::from(name), value))
            .collect())
    }
}

impl DataStore for LocalDataStore {
    fn all_species_ids(&self) -> Result<Vec<Id>> {
        let mut ids = self.species.keys().cloned().collect::<Vec<_>>();
        ids.sort();
        Ok(ids)
    }

    fn get_type_chart(&self) -> Result<TypeChart> {
        Ok(self.type_chart.clone())
    }

    fn get_move(&self, id: &Id) -> Result<Option<MoveData>> {
        Ok(self.moves.get(id).cloned())
    }

    fn get_species(&self, id: &Id) -> Result<Option<SpeciesData>> {
        Ok(self.species.get(id).cloned())
    }
}

#[cfg(test)]
mod local_data_store_test {
    use std::path::Path;

    use assert_matches::assert_matches;

    use crate::{
        DataStore,
        Id,
        LocalDataStore,
        Type,
        TypeChart,
    };

    fn data_dir() -> String {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../data")
            .to_string_lossy()
            .to_string()
    }

    #[test]
    fn fails_for_missing_directory() {
        assert_matches!(LocalDataStore::new("/path/that/does/not/exist"), Err(_));
    }

    #[test]
    fn fails_for_missing_env_var() {
        assert_matches!(
            LocalDataStore::new_from_env("SKIRMISH_DATA_DIR_THAT_IS_NEVER_SET"),
            Err(_)
        );
    }

    #[test]
    fn loads_bundled_data() {
        let store = LocalDataStore::new(data_dir()).unwrap();
        let species = store.get_species(&Id::from("Bulbasaur")).unwrap().unwrap();
        assert_eq!(species.name, "Bulbasaur");
        assert_eq!(species.types(), vec![Type::Grass, Type::Poison]);

        let ember = store.get_move(&Id::from("ember")).unwrap().unwrap();
        assert_eq!(ember.primary_type, Type::Fire);
        assert_eq!(ember.base_power, 40);

        assert_matches!(store.get_species(&Id::from("Missingno")), Ok(None));
    }

    #[test]
    fn bundled_type_chart_matches_standard_chart() {
        let store = LocalDataStore::new(data_dir()).unwrap();
        pretty_assertions::assert_eq!(store.get_type_chart().unwrap(), TypeChart::standard());
    }

    #[test]
    fn every_species_move_exists() {
        let store = LocalDataStore::new(data_dir()).unwrap();
        for id in store.all_species_ids().unwrap() {
            let species = store.get_species(&id).unwrap().unwrap();
            for mv in &species.moves {
                assert_matches!(
                    store.get_move(&Id::from(mv.as_str())),
                    Ok(Some(_)),
                    "{} knows unknown move {mv}",
                    species.name
                );
            }
        }
    }

    #[test]
    fn species_ids_are_sorted() {
        let store = LocalDataStore::new(data_dir()).unwrap();
        let ids = store.all_species_ids().unwrap();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
        assert!(!ids.is_empty());
    }
}
