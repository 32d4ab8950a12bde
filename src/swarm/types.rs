//! Type aliases for the pending update queues.
//!
//! Queues are keyed by item ID so repeated changes to one item coalesce into a single
//! pending entry until the next flush.

/// `HashMap` with the `ahash` hasher.
pub mod ahash_map;

/// Pending item record changes.
pub mod items_updates;

/// Pending hidden set changes.
pub mod hidden_updates;

/// Change sets handed to the backend by one flush.
pub mod changes;
