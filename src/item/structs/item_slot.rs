use crate::item::structs::item::Item;

/// The unit guarded by the per-item lock.
///
/// `removed` is set under the lock when the item is deleted, so a writer that cloned the
/// handle before the deletion sees it and treats the item as gone.
#[derive(Debug)]
pub struct ItemSlot {
    pub item: Item,
    pub removed: bool,
}
