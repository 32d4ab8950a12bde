//! Data structures for the item model and the Item Store.

/// 32-byte content hash identifying an item.
pub mod item_id;

/// Serde visitor parsing an `ItemId` from its hex form.
pub mod item_id_visitor;

/// A managed transfer and its progress counters.
pub mod item;

/// Summary of one peer connected to an item.
pub mod item_peer;

/// One constituent file of an item.
pub mod item_file;

/// Progress report pushed by the protocol layer.
pub mod progress_update;

/// Item record plus its removal marker, guarded by the per-item lock.
pub mod item_slot;

/// Sharded Item Store with 256 shards.
pub mod item_sharding;
