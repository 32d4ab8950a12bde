use crate::hidden::errors::HiddenError;
use crate::hidden::structs::hidden_entry::HiddenEntry;
use crate::item::structs::item::Item;
use crate::stats::enums::stats_event::StatsEvent;
use crate::swarm::structs::swarm_manager::SwarmManager;

impl SwarmManager {
    /// Size of the hidden set. Never gated.
    pub fn hidden_count(&self) -> usize
    {
        self.hidden.count()
    }

    /// Hidden IDs with their timestamps.
    pub fn hidden_entries(&self, passkey: Option<&str>) -> Result<Vec<HiddenEntry>, HiddenError>
    {
        self.hidden.entries(passkey).inspect_err(|_| {
            self.update_stats(StatsEvent::Unauthorized, 1);
        })
    }

    /// Snapshots of the hidden items.
    pub fn hidden_items(&self, passkey: Option<&str>) -> Result<Vec<Item>, HiddenError>
    {
        Ok(self.hidden_entries(passkey)?
            .into_iter()
            .filter_map(|entry| self.items.get(&entry.id).ok())
            .collect())
    }
}
