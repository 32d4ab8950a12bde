use std::collections::BTreeSet;
use log::{error, info, warn};
use parking_lot::RwLock;
use crate::common::common::current_time;
use crate::hidden::structs::hidden_record::HiddenRecord;
use crate::item::errors::ItemError;
use crate::item::structs::item_id::ItemId;
use crate::persistence::enums::updates_action::UpdatesAction;
use crate::persistence::errors::PersistenceError;
use crate::persistence::traits::state_backend::StateBackend;
use crate::stats::enums::stats_event::StatsEvent;
use crate::swarm::structs::swarm_manager::SwarmManager;
use crate::swarm::types::ahash_map::AHashMap;
use crate::swarm::types::changes::{HiddenChanges, ItemChanges};

impl SwarmManager {
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn queue_item_update(&self, id: ItemId, action: UpdatesAction)
    {
        let pending = Self::queue_update(&self.items_updates, id, action);
        self.set_stats(StatsEvent::ItemsUpdates, pending as i64);
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn queue_hidden_update(&self, id: ItemId, action: UpdatesAction)
    {
        let pending = Self::queue_update(&self.hidden_updates, id, action);
        self.set_stats(StatsEvent::HiddenUpdates, pending as i64);
    }

    pub fn get_item_updates(&self) -> AHashMap<ItemId, UpdatesAction>
    {
        self.items_updates.read_recursive().clone()
    }

    pub fn get_hidden_updates(&self) -> AHashMap<ItemId, UpdatesAction>
    {
        self.hidden_updates.read_recursive().clone()
    }

    /// Coalesces with a pending change for the same ID and returns the queue length.
    ///
    /// `Update` never downgrades a pending `Add` or revives a pending `Remove`.
    fn queue_update(queue: &RwLock<AHashMap<ItemId, UpdatesAction>>, id: ItemId, action: UpdatesAction) -> usize
    {
        let mut lock = queue.write();
        let merged = match (lock.get(&id), action) {
            (Some(UpdatesAction::Add), UpdatesAction::Update) => UpdatesAction::Add,
            (Some(UpdatesAction::Remove), UpdatesAction::Update) => UpdatesAction::Remove,
            (_, action) => action,
        };
        lock.insert(id, merged);
        lock.len()
    }

    /// Puts drained entries back after a failed flush, keeping anything queued meanwhile.
    fn requeue(queue: &RwLock<AHashMap<ItemId, UpdatesAction>>, drained: AHashMap<ItemId, UpdatesAction>) -> usize
    {
        let mut lock = queue.write();
        for (id, action) in drained {
            lock.entry(id).or_insert(action);
        }
        lock.len()
    }

    /// Restores items, hidden records and seeds at startup.
    ///
    /// Hidden items come back from their records. A record whose entry and item disagree is
    /// dropped. Restored state is not queued for persistence again.
    #[tracing::instrument(level = "debug", skip(self, backend))]
    pub async fn load_state(&self, backend: &dyn StateBackend) -> Result<(), PersistenceError>
    {
        let items = backend.load_items().await?;
        let mut loaded = 0u64;
        for item in items {
            match self.items.insert(item) {
                Ok(_) => loaded += 1,
                Err(ItemError::AlreadyExists(id)) => warn!("[LOAD ITEMS] Skipped duplicate item {id}"),
                Err(error) => warn!("[LOAD ITEMS] {error}"),
            }
        }
        info!("[LOAD ITEMS] Loaded {loaded} items");

        let records = backend.load_hidden().await?;
        let mut hidden = Vec::with_capacity(records.len());
        for record in records {
            let id = record.entry.id;
            if record.item.id != id {
                warn!("[LOAD HIDDEN] Dropped hidden entry {id} carrying item {}", record.item.id);
                self.queue_hidden_update(id, UpdatesAction::Remove);
                continue;
            }
            if let Err(ItemError::AlreadyExists(_)) = self.items.insert(record.item) {
                warn!("[LOAD HIDDEN] {id} was also stored as visible, moving it back under seal");
                self.queue_item_update(id, UpdatesAction::Update);
            }
            hidden.push(record.entry);
        }
        let hidden_loaded = hidden.len();
        self.hidden.restore(hidden);
        self.set_stats(StatsEvent::Items, self.items.len() as i64);
        self.set_stats(StatsEvent::Hidden, self.hidden.count() as i64);
        info!("[LOAD HIDDEN] Loaded {hidden_loaded} hidden entries");

        match backend.load_seeds().await? {
            Some(seeds) => {
                info!("[LOAD SEEDS] Loaded {} seeds", seeds.seeds.len());
                self.seeds.restore(seeds);
            }
            None => {
                info!("[LOAD SEEDS] No persisted seeds, using the configured defaults");
            }
        }
        Ok(())
    }

    /// Splits the drained queues into visible item upserts, item removals and hidden record
    /// changes, reading the current state of every touched ID.
    ///
    /// A hidden item is removed from the visible collection and its record is rewritten in
    /// the hidden one, so progress on hidden items stays sealed too.
    fn collect_changes(
        &self,
        items_drained: &AHashMap<ItemId, UpdatesAction>,
        hidden_drained: &AHashMap<ItemId, UpdatesAction>,
    ) -> (ItemChanges, ItemChanges, HiddenChanges)
    {
        let mut upserts = ItemChanges::new();
        let mut removals = ItemChanges::new();
        let mut sealed = HiddenChanges::new();

        let ids: BTreeSet<ItemId> = items_drained.keys().chain(hidden_drained.keys()).copied().collect();
        for id in ids {
            match (self.items.get(&id).ok(), self.hidden.get(&id)) {
                (Some(item), Some(entry)) => {
                    removals.insert(id, (None, UpdatesAction::Remove));
                    sealed.insert(id, (Some(HiddenRecord { entry, item }), UpdatesAction::Update));
                }
                (Some(item), None) => {
                    let action = match items_drained.get(&id) {
                        Some(UpdatesAction::Add) => UpdatesAction::Add,
                        _ => UpdatesAction::Update,
                    };
                    upserts.insert(id, (Some(item), action));
                    if hidden_drained.contains_key(&id) {
                        sealed.insert(id, (None, UpdatesAction::Remove));
                    }
                }
                (None, _) => {
                    if items_drained.contains_key(&id) {
                        removals.insert(id, (None, UpdatesAction::Remove));
                    }
                    if hidden_drained.contains_key(&id) {
                        sealed.insert(id, (None, UpdatesAction::Remove));
                    }
                }
            }
        }
        (upserts, removals, sealed)
    }

    /// Writes visible upserts first and removals last, so an item moving between the
    /// visible and the hidden collection is always present in at least one of them.
    async fn flush_changes(
        &self,
        backend: &dyn StateBackend,
        upserts: ItemChanges,
        removals: ItemChanges,
        sealed: HiddenChanges,
    ) -> Result<(), PersistenceError>
    {
        if !upserts.is_empty() {
            let count = backend.save_items(upserts).await?;
            info!("[SYNC ITEMS UPDATES] Synced {count} items");
        }
        if !sealed.is_empty() {
            let count = backend.save_hidden(sealed).await?;
            info!("[SYNC HIDDEN UPDATES] Synced {count} hidden records");
        }
        if !removals.is_empty() {
            let count = backend.save_items(removals).await?;
            info!("[SYNC ITEMS UPDATES] Removed {count} items");
        }
        Ok(())
    }

    /// Flushes the pending queues to the backend.
    ///
    /// Queues are drained before any await. On failure the drained entries are queued again
    /// and the error is returned.
    #[tracing::instrument(level = "debug", skip(self, backend))]
    pub async fn save_updates(&self, backend: &dyn StateBackend) -> Result<(), PersistenceError>
    {
        let items_drained = std::mem::take(&mut *self.items_updates.write());
        let hidden_drained = std::mem::take(&mut *self.hidden_updates.write());
        self.set_stats(StatsEvent::ItemsUpdates, self.items_updates.read().len() as i64);
        self.set_stats(StatsEvent::HiddenUpdates, self.hidden_updates.read().len() as i64);

        let (upserts, removals, sealed) = self.collect_changes(&items_drained, &hidden_drained);
        if let Err(error) = self.flush_changes(backend, upserts, removals, sealed).await {
            error!(
                "[SYNC UPDATES] Unable to sync {} item and {} hidden changes: {error}",
                items_drained.len(),
                hidden_drained.len()
            );
            let pending = Self::requeue(&self.items_updates, items_drained);
            self.set_stats(StatsEvent::ItemsUpdates, pending as i64);
            let pending = Self::requeue(&self.hidden_updates, hidden_drained);
            self.set_stats(StatsEvent::HiddenUpdates, pending as i64);
            return Err(error);
        }

        if self.seeds.take_dirty() {
            if let Err(error) = backend.save_seeds(self.seeds.get()).await {
                error!("[SYNC SEEDS] Unable to sync the seed config: {error}");
                self.seeds.mark_dirty();
                return Err(error);
            }
            info!("[SYNC SEEDS] Synced the seed config");
        }

        self.set_stats(StatsEvent::TimestampSave, current_time());
        Ok(())
    }
}
