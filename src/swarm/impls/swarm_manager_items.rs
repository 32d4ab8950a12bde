use std::collections::BTreeSet;
use log::{debug, info};
use crate::item::enums::item_state::ItemState;
use crate::item::errors::ItemError;
use crate::item::structs::item::Item;
use crate::item::structs::item_id::ItemId;
use crate::item::structs::progress_update::ProgressUpdate;
use crate::persistence::enums::updates_action::UpdatesAction;
use crate::stats::enums::stats_event::StatsEvent;
use crate::swarm::structs::swarm_manager::SwarmManager;

impl SwarmManager {
    /// Registers a newly submitted item. Duplicate IDs are rejected.
    #[tracing::instrument(level = "debug", skip(self, item), fields(id = %item.id))]
    pub fn add_item(&self, item: Item) -> Result<(), ItemError>
    {
        let id = item.id;
        let name = item.name.clone();
        self.items.insert(item)?;
        self.update_stats(StatsEvent::Items, 1);
        self.queue_item_update(id, UpdatesAction::Add);
        info!("[ITEMS] Added {id} ({name})");
        Ok(())
    }

    /// Looks up a visible item. Hidden items read as not found.
    pub fn get_item(&self, id: &ItemId) -> Result<Item, ItemError>
    {
        if self.hidden.is_hidden(id) {
            return Err(ItemError::NotFound(*id));
        }
        self.items.get(id)
    }

    /// Snapshot of every item that is not hidden.
    ///
    /// Items are copied before the hidden set is read, so an item hidden meanwhile is left out.
    pub fn list_items(&self) -> Vec<Item>
    {
        let items = self.items.list();
        let hidden: BTreeSet<ItemId> = self.hidden.snapshot().into_iter().map(|entry| entry.id).collect();
        items.into_iter().filter(|item| !hidden.contains(&item.id)).collect()
    }

    pub fn items_count(&self) -> usize
    {
        self.items.len()
    }

    /// Applies a progress report from the protocol layer and returns the resulting state.
    #[tracing::instrument(level = "debug", skip(self, update))]
    pub fn report_progress(&self, id: &ItemId, update: ProgressUpdate) -> Result<ItemState, ItemError>
    {
        let state = self.items.with_item_mut(id, |item| {
            item.apply_progress(&update).map(|_| item.state)
        })??;
        self.update_stats(StatsEvent::ProgressReports, 1);
        self.queue_item_update(*id, UpdatesAction::Update);
        Ok(state)
    }

    /// Moves an item to `error` on behalf of the protocol layer.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn report_error(&self, id: &ItemId) -> Result<(), ItemError>
    {
        let previous = self.items.update_state(id, ItemState::Error)?;
        if previous != ItemState::Error {
            self.queue_item_update(*id, UpdatesAction::Update);
            info!("[ITEMS] {id} moved from {previous} to error");
        }
        Ok(())
    }

    /// Zeroes the upload counter of one item.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn reset_uploaded(&self, id: &ItemId) -> Result<(), ItemError>
    {
        self.items.with_item_mut(id, |item| item.reset_uploaded())?;
        self.queue_item_update(*id, UpdatesAction::Update);
        debug!("[ITEMS] Reset upload counter of {id}");
        Ok(())
    }
}
