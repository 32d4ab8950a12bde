use std::collections::BTreeSet;
use log::{debug, info, warn};
use crate::bulk::enums::bulk_action::BulkAction;
use crate::bulk::enums::item_outcome::ItemOutcome;
use crate::bulk::errors::BulkError;
use crate::bulk::structs::bulk_response::BulkResponse;
use crate::bulk::structs::bulk_tally::BulkTally;
use crate::hidden::structs::hidden_entry::HiddenEntry;
use crate::item::structs::item_id::ItemId;
use crate::machine::enums::item_action::ItemAction;
use crate::machine::enums::transition::Transition;
use crate::persistence::enums::updates_action::UpdatesAction;
use crate::stats::enums::stats_event::StatsEvent;
use crate::swarm::structs::swarm_manager::SwarmManager;

impl SwarmManager {
    /// Boundary entry point for every bulk action name.
    ///
    /// The passkey is only consulted for `unhide`; every other action ignores it.
    pub fn apply(&self, action: BulkAction, ids: &[ItemId], passkey: Option<&str>) -> Result<BulkResponse, BulkError>
    {
        match action {
            BulkAction::Item(action) => self.apply_action(action, ids),
            BulkAction::Unhide => self.unhide(ids, passkey),
        }
    }

    /// Applies `action` to every distinct ID, best effort per item.
    ///
    /// Per-item failures only show up in the response counters. The call itself fails
    /// only when `ids` is empty.
    #[tracing::instrument(level = "debug", skip(self, ids), fields(ids = ids.len()))]
    pub fn apply_action(&self, action: ItemAction, ids: &[ItemId]) -> Result<BulkResponse, BulkError>
    {
        let ids = Self::dedup_ids(ids)?;
        self.update_stats(StatsEvent::BulkCalls, 1);

        let tally: BulkTally = ids.iter().map(|id| self.apply_one(action, id)).collect();

        self.record_tally(&tally);
        let response = tally.into_response(action.as_str(), self.hidden.count());
        info!("[BULK] {}", response.message);
        Ok(response)
    }

    /// Applies `action` to a single item and reports the outcome.
    ///
    /// A hidden item reads as not found for `pause`, `archive` and `resume`, the same way
    /// `get_item` reports it. `hide` and `delete` still reach it.
    pub fn apply_one(&self, action: ItemAction, id: &ItemId) -> ItemOutcome
    {
        if action == ItemAction::Delete {
            return self.delete_one(id);
        }

        let Some(handle) = self.items.handle(id) else {
            return ItemOutcome::NotFound;
        };
        let mut slot = handle.lock();
        if slot.removed {
            return ItemOutcome::NotFound;
        }
        if action != ItemAction::Hide && self.hidden.is_hidden(id) {
            return ItemOutcome::NotFound;
        }

        match action.plan(&slot.item) {
            Err(error) => {
                debug!("[BULK] {error}");
                ItemOutcome::InvalidTransition
            }
            Ok(Transition::Hide) => {
                if self.hidden.hide(*id) {
                    self.queue_hidden_update(*id, UpdatesAction::Add);
                    self.set_stats(StatsEvent::Hidden, self.hidden.count() as i64);
                    ItemOutcome::Applied
                } else {
                    ItemOutcome::Unchanged
                }
            }
            Ok(transition) => {
                if transition.apply_to(&mut slot.item) {
                    self.queue_item_update(*id, UpdatesAction::Update);
                    ItemOutcome::Applied
                } else {
                    ItemOutcome::Unchanged
                }
            }
        }
    }

    /// Removes an item and its hidden entry. An absent ID counts as already processed.
    fn delete_one(&self, id: &ItemId) -> ItemOutcome
    {
        let removed = self.items.remove(id);
        if self.hidden.remove(id) {
            self.queue_hidden_update(*id, UpdatesAction::Remove);
            self.set_stats(StatsEvent::Hidden, self.hidden.count() as i64);
        }
        match removed {
            Some(item) => {
                self.update_stats(StatsEvent::Items, -1);
                self.queue_item_update(*id, UpdatesAction::Remove);
                debug!("[BULK] Deleted {id} ({})", item.name);
                ItemOutcome::Applied
            }
            None => ItemOutcome::AlreadyProcessed,
        }
    }

    /// Removes the listed IDs from the hidden set.
    ///
    /// All or nothing: with a rejected passkey nothing is removed. IDs that are not hidden
    /// count towards `remaining`.
    #[tracing::instrument(level = "debug", skip(self, ids, passkey), fields(ids = ids.len()))]
    pub fn unhide(&self, ids: &[ItemId], passkey: Option<&str>) -> Result<BulkResponse, BulkError>
    {
        let ids = Self::dedup_ids(ids)?;
        let ids: Vec<ItemId> = ids.into_iter().collect();
        let removed = self.hidden.unhide(&ids, passkey).inspect_err(|_| {
            self.update_stats(StatsEvent::Unauthorized, 1);
        })?;
        Ok(self.finish_unhide(ids.len(), removed))
    }

    /// Empties the hidden set.
    #[tracing::instrument(level = "debug", skip(self, passkey))]
    pub fn unhide_all(&self, passkey: Option<&str>) -> Result<BulkResponse, BulkError>
    {
        let removed = self.hidden.unhide_all(passkey).inspect_err(|_| {
            self.update_stats(StatsEvent::Unauthorized, 1);
        })?;
        Ok(self.finish_unhide(removed.len(), removed))
    }

    fn finish_unhide(&self, requested: usize, removed: Vec<HiddenEntry>) -> BulkResponse
    {
        self.update_stats(StatsEvent::BulkCalls, 1);
        for entry in &removed {
            self.queue_hidden_update(entry.id, UpdatesAction::Remove);
            if !self.items.contains(&entry.id) {
                warn!("[HIDDEN] Dropped orphan hidden entry {}", entry.id);
            }
        }
        let tally = BulkTally {
            requested,
            processed: removed.len(),
            not_found: requested - removed.len(),
            invalid: 0,
        };
        self.record_tally(&tally);
        let hidden = self.hidden.count();
        self.set_stats(StatsEvent::Hidden, hidden as i64);
        let response = tally.into_response("unhide", hidden);
        info!("[BULK] {}", response.message);
        response
    }

    fn dedup_ids(ids: &[ItemId]) -> Result<BTreeSet<ItemId>, BulkError>
    {
        if ids.is_empty() {
            return Err(BulkError::EmptyIds);
        }
        Ok(ids.iter().copied().collect())
    }

    fn record_tally(&self, tally: &BulkTally)
    {
        self.update_stats(StatsEvent::ItemsProcessed, tally.processed as i64);
        self.update_stats(StatsEvent::ItemsFailed, (tally.not_found + tally.invalid) as i64);
    }
}
