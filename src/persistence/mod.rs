//! Persistence collaborator.
//!
//! The core never performs I/O itself. Mutations are queued per ID as `UpdatesAction`s and
//! a periodic flush hands the drained queues to a `StateBackend`. At startup the same
//! backend restores items, hidden entries and the seed list.
//!
//! `JsonStateBackend` keeps one versioned JSON document per collection in a directory:
//!
//! - `items.json` holds visible items only
//! - `hidden.json` holds hidden entries with their items, each record sealed with
//!   AES-256-GCM under a key derived from the hidden passkey with scrypt
//! - `seeds.json`

/// Update actions queued for the backend.
pub mod enums;

/// Backend structures and on-disk documents.
pub mod structs;

/// JSON backend implementation and record sealing.
pub mod impls;

/// The `StateBackend` trait.
pub mod traits;

/// Persistence errors.
pub mod errors;

/// Unit tests for the JSON backend.
pub mod tests;
