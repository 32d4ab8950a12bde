use std::collections::BTreeMap;
use parking_lot::RwLock;
use crate::item::structs::item_id::ItemId;

/// Set of hidden item IDs behind a single lock.
///
/// Values are the `hidden_at` timestamps. The passkey is fixed for the lifetime of the set.
pub struct HiddenSet {
    pub(crate) entries: RwLock<BTreeMap<ItemId, i64>>,
    pub(crate) passkey: String,
}
