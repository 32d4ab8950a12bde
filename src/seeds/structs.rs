/// The seed list record handed to callers.
pub mod seed_config;

/// Owner of the process-wide seed config.
pub mod seed_config_manager;
