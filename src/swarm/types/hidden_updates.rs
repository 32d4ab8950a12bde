use std::sync::Arc;
use parking_lot::RwLock;
use crate::item::structs::item_id::ItemId;
use crate::persistence::enums::updates_action::UpdatesAction;
use crate::swarm::types::ahash_map::AHashMap;

pub type HiddenUpdates = Arc<RwLock<AHashMap<ItemId, UpdatesAction>>>;
