use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::sync::Arc;
use parking_lot::{Mutex, RwLock};
use crate::item::enums::item_state::ItemState;
use crate::item::errors::ItemError;
use crate::item::structs::item::Item;
use crate::item::structs::item_id::ItemId;
use crate::item::structs::item_sharding::ItemSharding;
use crate::item::structs::item_slot::ItemSlot;
use crate::item::types::item_handle::ItemHandle;

impl Default for ItemSharding {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemSharding {
    #[tracing::instrument(level = "debug")]
    pub fn new() -> ItemSharding {
        ItemSharding {
            shards: std::array::from_fn(|_| Arc::new(RwLock::new(BTreeMap::new()))),
        }
    }

    #[inline(always)]
    pub fn get_shard(&self, id: &ItemId) -> &Arc<RwLock<BTreeMap<ItemId, ItemHandle>>> {
        &self.shards[id.shard()]
    }

    pub fn handle(&self, id: &ItemId) -> Option<ItemHandle> {
        self.get_shard(id).read().get(id).cloned()
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.get_shard(id).read().contains_key(id)
    }

    pub fn get(&self, id: &ItemId) -> Result<Item, ItemError> {
        self.with_item(id, |item| item.clone())
    }

    /// Snapshot of every item, ordered by ID.
    ///
    /// Handles are collected one shard at a time and each item is cloned under its own
    /// lock, so every returned item is internally consistent while writers to other items
    /// keep running.
    pub fn list(&self) -> Vec<Item> {
        let mut items = Vec::with_capacity(self.len());
        for shard in self.shards.iter() {
            let handles: Vec<ItemHandle> = shard.read().values().cloned().collect();
            for handle in handles {
                let slot = handle.lock();
                if !slot.removed {
                    items.push(slot.item.clone());
                }
            }
        }
        items
    }

    pub fn insert(&self, mut item: Item) -> Result<(), ItemError> {
        item.refresh_ratio();
        let mut shard = self.get_shard(&item.id).write();
        match shard.entry(item.id) {
            Entry::Occupied(_) => Err(ItemError::AlreadyExists(item.id)),
            Entry::Vacant(entry) => {
                entry.insert(Arc::new(Mutex::new(ItemSlot { item, removed: false })));
                Ok(())
            }
        }
    }

    /// Removes the item and marks its slot as removed. Absent IDs are a no-op.
    pub fn remove(&self, id: &ItemId) -> Option<Item> {
        let handle = self.get_shard(id).write().remove(id)?;
        let mut slot = handle.lock();
        slot.removed = true;
        Some(slot.item.clone())
    }

    /// Sets the state of one item and returns the previous state.
    pub fn update_state(&self, id: &ItemId, state: ItemState) -> Result<ItemState, ItemError> {
        self.with_item_mut(id, |item| std::mem::replace(&mut item.state, state))
    }

    pub fn with_item<R>(&self, id: &ItemId, f: impl FnOnce(&Item) -> R) -> Result<R, ItemError> {
        let handle = self.handle(id).ok_or(ItemError::NotFound(*id))?;
        let slot = handle.lock();
        if slot.removed {
            return Err(ItemError::NotFound(*id));
        }
        Ok(f(&slot.item))
    }

    pub fn with_item_mut<R>(&self, id: &ItemId, f: impl FnOnce(&mut Item) -> R) -> Result<R, ItemError> {
        let handle = self.handle(id).ok_or(ItemError::NotFound(*id))?;
        let mut slot = handle.lock();
        if slot.removed {
            return Err(ItemError::NotFound(*id));
        }
        Ok(f(&mut slot.item))
    }

    pub fn len(&self) -> usize {
        self.shards.iter().map(|shard| shard.read().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.shards.iter().all(|shard| shard.read().is_empty())
    }
}
