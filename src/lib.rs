//! # Swarm Keeper
//!
//! The in-memory control plane of a peer-to-peer transfer client. It keeps the authoritative
//! registry of transfer items (each identified by a 32-byte content hash), applies bulk user
//! actions across arbitrary sets of items, gates a "hidden" subset behind a shared passkey and
//! manages the seed list that bootstraps peer discovery.
//!
//! ## Overview
//!
//! - **Item Store**: 256-shard registry where every item owns its own lock
//! - **State Machine**: legal transitions for every bulk action
//! - **Hidden Set**: count is public, membership and removal need the passkey
//! - **Bulk Action Processor**: per-item best-effort batches folded into one summary
//! - **Seed Config**: seed list with a restart-required flag
//!
//! The transfer protocol, disk I/O and HTTP routing live outside this crate. They report progress
//! into the [`swarm`] manager and read its snapshots back.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use swarm_keeper::config::structs::configuration::Configuration;
//! use swarm_keeper::machine::enums::item_action::ItemAction;
//! use swarm_keeper::swarm::structs::swarm_manager::SwarmManager;
//!
//! let manager = SwarmManager::new(Arc::new(Configuration::init()));
//! manager.add_item(item)?;
//!
//! let response = manager.apply_action(ItemAction::Pause, &[item_id])?;
//! println!("{}", response.message);
//! ```
//!
//! ## Modules
//!
//! - [`bulk`] - Outcome folding and the bulk response shape
//! - [`common`] - Shared error type and time helpers
//! - [`config`] - TOML configuration loading and validation
//! - [`hidden`] - Passkey-gated hidden set
//! - [`item`] - Item data model and the sharded Item Store
//! - [`machine`] - Action transition table
//! - [`persistence`] - Load/persist collaborator and its JSON implementation
//! - [`security`] - Constant-time comparison and passkey helpers
//! - [`seeds`] - Seed list management and generation
//! - [`stats`] - Atomic counters
//! - [`swarm`] - The manager tying all components together

/// Bulk action outcomes and responses.
///
/// Holds the per-item outcome tags, the tally they are folded into and the summary
/// response handed back to the boundary layer.
pub mod bulk;

/// Common utilities and shared functionality.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, and validating configuration from TOML files.
pub mod config;

/// Hidden set controller.
///
/// Tracks hidden item IDs and enforces the passkey gate on membership and removal.
pub mod hidden;

/// Item data model and the sharded Item Store.
pub mod item;

/// Console logging setup.
pub mod logging;

/// Item state machine.
///
/// Decides, per action and current item state, which transition applies.
pub mod machine;

/// Persistence collaborator.
///
/// Defines the `StateBackend` trait used to restore state at startup and record
/// mutations, plus a JSON file implementation.
pub mod persistence;

/// Security helpers (constant-time comparison, passkey generation).
pub mod security;

/// Seed configuration management.
pub mod seeds;

/// Statistics tracking.
///
/// Atomic counters describing the store, the hidden set and bulk activity.
pub mod stats;

/// CLI argument parsing.
pub mod structs;

/// The swarm manager.
///
/// Owns the Item Store, Hidden Set and Seed Config Manager and implements the bulk action
/// processor and every boundary operation on top of them.
pub mod swarm;
