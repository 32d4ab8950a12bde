use std::collections::BTreeMap;
use std::fmt;
use log::{debug, warn};
use parking_lot::RwLock;
use crate::common::common::current_time;
use crate::hidden::errors::HiddenError;
use crate::hidden::structs::hidden_entry::HiddenEntry;
use crate::hidden::structs::hidden_set::HiddenSet;
use crate::item::structs::item_id::ItemId;
use crate::security::security::constant_time_eq;

impl HiddenSet {
    pub fn new(passkey: &str) -> HiddenSet {
        HiddenSet {
            entries: RwLock::new(BTreeMap::new()),
            passkey: passkey.to_string(),
        }
    }

    /// Number of hidden IDs. Never gated.
    pub fn count(&self) -> usize {
        self.entries.read().len()
    }

    /// Adds an ID. Returns `false` when it was already hidden.
    pub fn hide(&self, id: ItemId) -> bool {
        let mut lock = self.entries.write();
        if lock.contains_key(&id) {
            return false;
        }
        lock.insert(id, current_time());
        debug!("[HIDDEN] Hid {id}");
        true
    }

    pub fn verify_passkey(&self, passkey: Option<&str>) -> Result<(), HiddenError> {
        match passkey {
            Some(passkey) if !self.passkey.is_empty() && !passkey.is_empty() && constant_time_eq(passkey, &self.passkey) => Ok(()),
            _ => {
                warn!("[HIDDEN] Rejected request with an invalid or missing passkey");
                Err(HiddenError::Unauthorized)
            }
        }
    }

    /// Removes the listed IDs, skipping the ones not hidden. Returns the removed entries.
    ///
    /// Nothing is removed when the passkey is rejected.
    pub fn unhide(&self, ids: &[ItemId], passkey: Option<&str>) -> Result<Vec<HiddenEntry>, HiddenError> {
        self.verify_passkey(passkey)?;
        let mut lock = self.entries.write();
        Ok(ids.iter()
            .filter_map(|id| lock.remove(id).map(|hidden_at| HiddenEntry { id: *id, hidden_at }))
            .collect())
    }

    /// Empties the set and returns everything that was in it.
    pub fn unhide_all(&self, passkey: Option<&str>) -> Result<Vec<HiddenEntry>, HiddenError> {
        self.verify_passkey(passkey)?;
        let drained = std::mem::take(&mut *self.entries.write());
        Ok(drained.into_iter().map(|(id, hidden_at)| HiddenEntry { id, hidden_at }).collect())
    }

    pub fn entries(&self, passkey: Option<&str>) -> Result<Vec<HiddenEntry>, HiddenError> {
        self.verify_passkey(passkey)?;
        Ok(self.snapshot())
    }

    /// Ungated membership check, only for components inside the crate.
    pub(crate) fn is_hidden(&self, id: &ItemId) -> bool {
        self.entries.read().contains_key(id)
    }

    /// Ungated removal used when the backing item is deleted.
    pub(crate) fn remove(&self, id: &ItemId) -> bool {
        self.entries.write().remove(id).is_some()
    }

    /// Re-inserts persisted entries at startup, keeping their persisted timestamps.
    pub(crate) fn restore(&self, entries: Vec<HiddenEntry>) {
        let mut lock = self.entries.write();
        for entry in entries {
            lock.insert(entry.id, entry.hidden_at);
        }
    }

    pub(crate) fn snapshot(&self) -> Vec<HiddenEntry> {
        self.entries.read().iter().map(|(id, hidden_at)| HiddenEntry { id: *id, hidden_at: *hidden_at }).collect()
    }

    pub(crate) fn get(&self, id: &ItemId) -> Option<HiddenEntry> {
        self.entries.read().get(id).map(|hidden_at| HiddenEntry { id: *id, hidden_at: *hidden_at })
    }
}

impl fmt::Debug for HiddenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HiddenSet")
            .field("count", &self.count())
            .field("passkey", &"<redacted>")
            .finish()
    }
}
