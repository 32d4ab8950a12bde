use serde::{Deserialize, Serialize};

/// Enumeration of all trackable statistics events.
///
/// Used with `SwarmManager::update_stats()` to add to a counter and with
/// `SwarmManager::set_stats()` to overwrite one.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    Items,
    ItemsUpdates,
    Hidden,
    HiddenUpdates,
    BulkCalls,
    ItemsProcessed,
    ItemsFailed,
    Unauthorized,
    ProgressReports,
    SeedChanges,
    TimestampSave,
}
