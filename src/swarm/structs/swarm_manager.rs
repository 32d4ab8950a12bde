use std::sync::Arc;
use crate::config::structs::configuration::Configuration;
use crate::hidden::structs::hidden_set::HiddenSet;
use crate::item::structs::item_sharding::ItemSharding;
use crate::seeds::structs::seed_config_manager::SeedConfigManager;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::swarm::types::hidden_updates::HiddenUpdates;
use crate::swarm::types::items_updates::ItemsUpdates;

#[derive(Debug)]
pub struct SwarmManager {
    pub config: Arc<Configuration>,
    pub items: Arc<ItemSharding>,
    pub hidden: Arc<HiddenSet>,
    pub seeds: Arc<SeedConfigManager>,
    pub stats: Arc<StatsAtomics>,
    pub items_updates: ItemsUpdates,
    pub hidden_updates: HiddenUpdates,
}
