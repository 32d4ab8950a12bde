use std::sync::Arc;
use parking_lot::RwLock;
use crate::config::structs::configuration::Configuration;
use crate::hidden::structs::hidden_set::HiddenSet;
use crate::item::structs::item_sharding::ItemSharding;
use crate::seeds::structs::seed_config_manager::SeedConfigManager;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::swarm::structs::swarm_manager::SwarmManager;

impl SwarmManager {
    #[tracing::instrument(level = "debug", skip(config))]
    pub fn new(config: Arc<Configuration>) -> SwarmManager
    {
        SwarmManager {
            items: Arc::new(ItemSharding::new()),
            hidden: Arc::new(HiddenSet::new(&config.core.hidden_passkey)),
            seeds: Arc::new(SeedConfigManager::new(&config.seeds)),
            stats: Arc::new(StatsAtomics::new()),
            items_updates: Arc::new(RwLock::new(Default::default())),
            hidden_updates: Arc::new(RwLock::new(Default::default())),
            config,
        }
    }
}
