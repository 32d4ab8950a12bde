use serde::{Deserialize, Serialize};
use crate::item::structs::item_file::ItemFile;
use crate::item::structs::item_peer::ItemPeer;

/// Counters reported by the protocol layer for one item.
///
/// `peers` and `files` replace the stored lists when present and are left untouched when `None`.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProgressUpdate {
    pub downloaded: u64,
    pub uploaded: u64,
    pub remaining: u64,
    pub down_rate: u64,
    pub up_rate: u64,
    pub peers: Option<Vec<ItemPeer>>,
    pub files: Option<Vec<ItemFile>>,
}
