use serde::{Deserialize, Serialize};
use crate::item::enums::peer_state::PeerState;

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ItemPeer {
    pub id: String,
    pub state: PeerState,
    pub down_rate: u64,
    pub up_rate: u64,
}
