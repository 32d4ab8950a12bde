use crate::seeds::structs::seed_config::SeedConfig;
use crate::stats::enums::stats_event::StatsEvent;
use crate::swarm::structs::swarm_manager::SwarmManager;

impl SwarmManager {
    pub fn get_seed_config(&self) -> SeedConfig
    {
        self.seeds.get()
    }

    pub fn save_seed_config(&self, seeds: Vec<String>) -> SeedConfig
    {
        let config = self.seeds.save(seeds);
        self.update_stats(StatsEvent::SeedChanges, 1);
        config
    }

    pub fn auto_generate_seeds(&self) -> SeedConfig
    {
        let config = self.seeds.auto_generate();
        self.update_stats(StatsEvent::SeedChanges, 1);
        config
    }

    pub fn acknowledge_restart(&self) -> SeedConfig
    {
        self.seeds.acknowledge_restart()
    }
}
