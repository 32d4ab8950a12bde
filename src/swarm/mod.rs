//! The swarm manager.
//!
//! `SwarmManager` owns the Item Store, the hidden set, the seed config manager and the
//! statistics, and implements every boundary operation on top of them:
//!
//! - item submission, lookup, visible listing and progress ingestion
//! - bulk actions (`pause`, `archive`, `delete`, `hide`, `resume`) and `unhide`
//! - seed config get/save/auto-generate
//! - update queues flushed to a `StateBackend`
//!
//! # Locking
//!
//! There is no manager-wide lock. A bulk call locks one item at a time. When an item lock
//! and the hidden set lock are both needed, the item lock is taken first.

/// Manager structure.
pub mod structs;

/// Manager operations, split by concern.
pub mod impls;

/// Update queue type aliases.
pub mod types;

/// Unit tests for the manager.
pub mod tests;
