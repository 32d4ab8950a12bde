//! Sharded item storage for concurrent access.

use std::collections::BTreeMap;
use std::sync::Arc;
use parking_lot::RwLock;
use crate::item::structs::item_id::ItemId;
use crate::item::types::item_handle::ItemHandle;

/// Sharded storage for items with 256 shards.
///
/// Items are assigned to shards based on the first byte of their ID. A shard lock only
/// guards the ID to handle mapping; every item has its own lock inside its handle.
///
/// # Thread Safety
///
/// - Lookups take the shard read lock just long enough to clone a handle
/// - Insert and remove take the shard write lock for the map change only
/// - `list` never holds a shard lock while locking an item
#[derive(Debug)]
pub struct ItemSharding {
    /// Shard assignment: `shards[item_id.0[0]]`
    pub shards: [Arc<RwLock<BTreeMap<ItemId, ItemHandle>>>; 256],
}
