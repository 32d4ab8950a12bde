use serde::{Deserialize, Serialize};
use crate::item::enums::item_state::ItemState;
use crate::item::structs::item_file::ItemFile;
use crate::item::structs::item_id::ItemId;
use crate::item::structs::item_peer::ItemPeer;

/// One managed transfer.
///
/// `downloaded` and `uploaded` never decrease (except for an explicit upload reset), and
/// `remaining` never increases. `ratio` is derived from the two counters and refreshed on
/// every change. `archived` is orthogonal to `state`.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub state: ItemState,
    #[serde(default)]
    pub archived: bool,
    pub downloaded: u64,
    pub uploaded: u64,
    pub ratio: f64,
    pub file_size: u64,
    pub remaining: u64,
    #[serde(default)]
    pub down_rate: u64,
    #[serde(default)]
    pub up_rate: u64,
    #[serde(default)]
    pub peers: Vec<ItemPeer>,
    #[serde(default)]
    pub files: Vec<ItemFile>,
}
