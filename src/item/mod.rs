//! Item data model and the sharded Item Store.
//!
//! An item is one managed transfer, identified by a 32-byte content hash. The store keeps
//! every item behind its own lock so that concurrent writers only contend when they touch
//! the same item.
//!
//! # Architecture
//!
//! - Items are distributed across 256 shards based on the first byte of the item ID
//! - Each shard maps IDs to an `ItemHandle` (`Arc<Mutex<ItemSlot>>`)
//! - Shard locks are held only long enough to find or clone a handle; all reads and writes
//!   of item fields happen under the per-item lock
//!
//! # Example
//!
//! ```rust,ignore
//! use swarm_keeper::item::structs::item::Item;
//! use swarm_keeper::item::structs::item_id::ItemId;
//! use swarm_keeper::item::structs::item_sharding::ItemSharding;
//!
//! let store = ItemSharding::new();
//! let id = ItemId([7u8; 32]);
//! store.insert(Item::new(id, "ubuntu.iso", 4096))?;
//! let snapshot = store.get(&id)?;
//! ```

/// Enumerations for item and peer lifecycle states.
pub mod enums;

/// Data structures for items, peers, files and the store.
pub mod structs;

/// Implementations for the item data structures.
pub mod impls;

/// Type aliases used by the store.
pub mod types;

/// Item Store errors.
pub mod errors;
