use serde::{Deserialize, Serialize};
use crate::hidden::structs::hidden_entry::HiddenEntry;
use crate::item::structs::item::Item;

/// What gets persisted for a hidden item: the entry plus the full item record, which is
/// kept out of the visible item collection while hidden.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct HiddenRecord {
    pub entry: HiddenEntry,
    pub item: Item,
}
