use serde::{Deserialize, Serialize};
use crate::config::structs::core_config::CoreConfig;
use crate::config::structs::persistence_config::PersistenceConfig;
use crate::config::structs::seed_generation_config::SeedGenerationConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Configuration {
    pub log_level: String,
    pub core: CoreConfig,
    pub seeds: SeedGenerationConfig,
    pub persistence: PersistenceConfig,
}
