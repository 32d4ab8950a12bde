use std::sync::atomic::{AtomicI64, Ordering};
use crate::common::common::current_time;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl StatsAtomics {
    pub fn new() -> StatsAtomics {
        let stats = StatsAtomics::default();
        stats.started.store(current_time(), Ordering::SeqCst);
        stats
    }

    pub fn counter(&self, event: StatsEvent) -> &AtomicI64 {
        match event {
            StatsEvent::Items => &self.items,
            StatsEvent::ItemsUpdates => &self.items_updates,
            StatsEvent::Hidden => &self.hidden,
            StatsEvent::HiddenUpdates => &self.hidden_updates,
            StatsEvent::BulkCalls => &self.bulk_calls,
            StatsEvent::ItemsProcessed => &self.items_processed,
            StatsEvent::ItemsFailed => &self.items_failed,
            StatsEvent::Unauthorized => &self.unauthorized,
            StatsEvent::ProgressReports => &self.progress_reports,
            StatsEvent::SeedChanges => &self.seed_changes,
            StatsEvent::TimestampSave => &self.timestamp_run_save,
        }
    }

    pub fn snapshot(&self) -> Stats {
        Stats {
            started: self.started.load(Ordering::SeqCst),
            timestamp_run_save: self.timestamp_run_save.load(Ordering::SeqCst),
            items: self.items.load(Ordering::SeqCst),
            items_updates: self.items_updates.load(Ordering::SeqCst),
            hidden: self.hidden.load(Ordering::SeqCst),
            hidden_updates: self.hidden_updates.load(Ordering::SeqCst),
            bulk_calls: self.bulk_calls.load(Ordering::SeqCst),
            items_processed: self.items_processed.load(Ordering::SeqCst),
            items_failed: self.items_failed.load(Ordering::SeqCst),
            unauthorized: self.unauthorized.load(Ordering::SeqCst),
            progress_reports: self.progress_reports.load(Ordering::SeqCst),
            seed_changes: self.seed_changes.load(Ordering::SeqCst),
        }
    }
}
