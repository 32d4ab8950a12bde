use std::sync::atomic::{AtomicBool, Ordering};
use log::info;
use parking_lot::RwLock;
use crate::config::structs::seed_generation_config::SeedGenerationConfig;
use crate::seeds::generator::generate_seeds;
use crate::seeds::structs::seed_config::SeedConfig;
use crate::seeds::structs::seed_config_manager::SeedConfigManager;

impl SeedConfigManager {
    /// Starts from the configured default seeds and generation parameters, with no
    /// restart pending.
    pub fn new(generation: &SeedGenerationConfig) -> SeedConfigManager {
        SeedConfigManager {
            config: RwLock::new(SeedConfig {
                seeds: generation.default_seeds.clone(),
                seed_length: generation.seed_length,
                seed_count: generation.seed_count,
                restart_required: false,
            }),
            dirty: AtomicBool::new(false),
        }
    }

    pub fn get(&self) -> SeedConfig {
        self.config.read().clone()
    }

    /// Replaces the seed list. An empty list is valid and clears seeding.
    ///
    /// `seed_count` follows the new list, so the next `auto_generate` produces as many
    /// seeds as were saved. `seed_length` is left alone.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn save(&self, seeds: Vec<String>) -> SeedConfig {
        let mut lock = self.config.write();
        lock.seed_count = seeds.len();
        lock.seeds = seeds;
        lock.restart_required = true;
        self.dirty.store(true, Ordering::Release);
        info!("[SEEDS] Saved {} seeds, restart required", lock.seed_count);
        lock.clone()
    }

    /// Overwrites the list with `seed_count` fresh seeds of `seed_length` characters.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn auto_generate(&self) -> SeedConfig {
        let mut lock = self.config.write();
        lock.seeds = generate_seeds(lock.seed_count, lock.seed_length);
        lock.restart_required = true;
        self.dirty.store(true, Ordering::Release);
        info!("[SEEDS] Generated {} seeds of {} characters, restart required", lock.seed_count, lock.seed_length);
        lock.clone()
    }

    pub fn acknowledge_restart(&self) -> SeedConfig {
        let mut lock = self.config.write();
        if lock.restart_required {
            lock.restart_required = false;
            self.dirty.store(true, Ordering::Release);
            info!("[SEEDS] Restart acknowledged");
        }
        lock.clone()
    }

    /// Installs the persisted seed list at startup. The process restart that led here is
    /// the acknowledgement, so no restart is pending afterwards.
    pub(crate) fn restore(&self, mut config: SeedConfig) {
        config.restart_required = false;
        *self.config.write() = config;
    }

    /// Returns whether the config changed since the last call, clearing the marker.
    pub(crate) fn take_dirty(&self) -> bool {
        self.dirty.swap(false, Ordering::AcqRel)
    }

    pub(crate) fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::Release);
    }
}
