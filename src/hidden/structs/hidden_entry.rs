use serde::{Deserialize, Serialize};
use crate::item::structs::item_id::ItemId;

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct HiddenEntry {
    pub id: ItemId,
    /// Unix timestamp in seconds.
    pub hidden_at: i64,
}
