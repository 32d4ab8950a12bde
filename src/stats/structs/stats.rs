use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub started: i64,
    pub timestamp_run_save: i64,
    pub items: i64,
    pub items_updates: i64,
    pub hidden: i64,
    pub hidden_updates: i64,
    pub bulk_calls: i64,
    pub items_processed: i64,
    pub items_failed: i64,
    pub unauthorized: i64,
    pub progress_reports: i64,
    pub seed_changes: i64,
}
