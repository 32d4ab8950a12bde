/// Configuration loading, saving and validation.
pub mod configuration;

/// Display implementation for configuration errors.
pub mod configuration_error;
