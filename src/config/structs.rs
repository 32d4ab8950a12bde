//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Core settings (hidden set passkey).
pub mod core_config;

/// Seed generation parameters and initial seeds.
pub mod seed_generation_config;

/// State persistence settings.
pub mod persistence_config;
