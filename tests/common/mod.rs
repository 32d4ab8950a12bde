#![allow(dead_code)]
use rand::RngExt;
use std::sync::Arc;
use tempfile::TempDir;
use swarm_keeper::config::structs::configuration::Configuration;
use swarm_keeper::item::enums::item_state::ItemState;
use swarm_keeper::item::structs::item::Item;
use swarm_keeper::item::structs::item_id::ItemId;
use swarm_keeper::swarm::structs::swarm_manager::SwarmManager;

pub const TEST_PASSKEY: &str = "Integration-Passkey-7";

pub type TestManager = Arc<SwarmManager>;
pub type TestConfig = Arc<Configuration>;

pub fn create_test_config() -> TestConfig {
    let mut config: Configuration = Configuration::init();
    config.core.hidden_passkey = TEST_PASSKEY.to_string();
    config.persistence.enabled = false;
    Arc::new(config)
}

pub fn create_test_manager() -> TestManager {
    Arc::new(SwarmManager::new(create_test_config()))
}

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

pub fn random_item_id() -> ItemId {
    let mut rng = rand::rng();
    let bytes: [u8; 32] = rng.random();
    ItemId(bytes)
}

pub fn create_test_item(state: ItemState) -> Item {
    Item::new(random_item_id(), "test-item", 1_048_576).with_state(state)
}

/// Adds one item per state and returns their IDs in the same order.
pub fn add_items(manager: &SwarmManager, states: &[ItemState]) -> Vec<ItemId> {
    states.iter().map(|state| {
        let item = create_test_item(*state);
        let id = item.id;
        manager.add_item(item).expect("Failed to add test item");
        id
    }).collect()
}
