use anyhow::Result;
use skirmish::{
    Battle,
    BattleEngineOptions,
    BattleError,
    BattleMode,
    BattleOptions,
    CombatantData,
    DataStoreStatProvider,
    Side,
    SideData,
    StatProvider,
    data::{
        DataStore,
        TypeChart,
    },
};

use crate::ControlledRandomNumberGenerator;

/// Battle builder object for integration tests.
pub struct TestBattleBuilder {
    options: BattleOptions,
    engine_options: BattleEngineOptions,
    controlled_rng: bool,
}

impl TestBattleBuilder {
    /// Creates a new [`TestBattleBuilder`].
    pub fn new() -> Self {
        Self {
            options: BattleOptions::default(),
            engine_options: BattleEngineOptions::default(),
            controlled_rng: false,
        }
    }

    /// Builds a new [`Battle`] from the battle builder.
    pub fn build(mut self) -> Result<Battle, BattleError> {
        if self.controlled_rng {
            self.engine_options.rng_factory =
                |seed: Option<u64>| Box::new(ControlledRandomNumberGenerator::new(seed));
        }
        Battle::new(self.options, self.engine_options)
    }

    fn side_mut(&mut self, side: Side) -> &mut SideData {
        match side {
            Side::A => &mut self.options.side_a,
            Side::B => &mut self.options.side_b,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.options.seed = Some(seed);
        self
    }

    pub fn with_mode(mut self, mode: BattleMode) -> Self {
        self.options.mode = mode;
        self
    }

    pub fn with_controlled_rng(mut self, controlled_rng: bool) -> Self {
        self.controlled_rng = controlled_rng;
        self
    }

    pub fn with_type_chart(mut self, type_chart: TypeChart) -> Self {
        self.engine_options.type_chart = type_chart;
        self
    }

    pub fn with_side_name(mut self, side: Side, name: &str) -> Self {
        self.side_mut(side).name = Some(name.to_owned());
        self
    }

    /// Appends a combatant to the side's team.
    pub fn with_combatant(mut self, side: Side, combatant: CombatantData) -> Self {
        self.side_mut(side).team.members.push(combatant);
        self
    }

    /// Appends the given species to the side's team, looked up in the data store and scaled to the
    /// level.
    pub fn with_species(
        mut self,
        side: Side,
        data: &dyn DataStore,
        ids: &[&str],
        level: u8,
    ) -> Result<Self> {
        let team = DataStoreStatProvider::new(data).team(ids, level)?;
        self.side_mut(side).team.members.extend(team.members);
        Ok(self)
    }
}

impl Default for TestBattleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
