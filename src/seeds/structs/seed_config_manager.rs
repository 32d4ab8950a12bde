use std::sync::atomic::AtomicBool;
use parking_lot::RwLock;
use crate::seeds::structs::seed_config::SeedConfig;

/// Singleton seed config behind a single lock.
///
/// The record's `seed_length` and `seed_count` are the live generation parameters read by
/// `auto_generate`.
#[derive(Debug)]
pub struct SeedConfigManager {
    pub(crate) config: RwLock<SeedConfig>,
    pub(crate) dirty: AtomicBool,
}
