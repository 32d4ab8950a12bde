//! Content hash identifier for items.

/// A 32-byte item identifier.
///
/// The ID is the content hash of the transfer and never changes once the item exists.
/// It is rendered as 64 lowercase hex characters, and its first byte selects the store shard.
///
/// # Example
///
/// ```rust
/// use swarm_keeper::item::structs::item_id::ItemId;
///
/// let id: ItemId = "00".repeat(32).parse().unwrap();
/// assert_eq!(id, ItemId([0u8; 32]));
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct ItemId(pub [u8; 32]);
