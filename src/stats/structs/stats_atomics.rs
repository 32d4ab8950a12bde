use std::sync::atomic::AtomicI64;

#[derive(Debug, Default)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub timestamp_run_save: AtomicI64,
    pub items: AtomicI64,
    pub items_updates: AtomicI64,
    pub hidden: AtomicI64,
    pub hidden_updates: AtomicI64,
    pub bulk_calls: AtomicI64,
    pub items_processed: AtomicI64,
    pub items_failed: AtomicI64,
    pub unauthorized: AtomicI64,
    pub progress_reports: AtomicI64,
    pub seed_changes: AtomicI64,
}
