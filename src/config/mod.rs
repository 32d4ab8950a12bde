//! Configuration management module.
//!
//! Loads, parses and validates the `config.toml` file. The file holds four sections:
//!
//! - **log_level**: console logging verbosity
//! - **core**: the hidden set passkey
//! - **seeds**: seed generation parameters and the initial seed list
//! - **persistence**: where and how often state is flushed
//!
//! # Example
//!
//! ```rust,ignore
//! use swarm_keeper::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! ```

/// Configuration enumerations.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
