use std::sync::atomic::Ordering;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::swarm::structs::swarm_manager::SwarmManager;

impl SwarmManager {
    pub fn get_stats(&self) -> Stats
    {
        self.stats.snapshot()
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64) -> Stats
    {
        if value != 0 {
            self.stats.counter(event).fetch_add(value, Ordering::SeqCst);
        }
        self.get_stats()
    }

    pub fn set_stats(&self, event: StatsEvent, value: i64) -> Stats
    {
        self.stats.counter(event).store(value, Ordering::SeqCst);
        self.get_stats()
    }
}
