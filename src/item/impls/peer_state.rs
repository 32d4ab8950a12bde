use crate::item::enums::peer_state::PeerState;

impl PeerState {
    /// Whether the peer is currently exchanging data.
    pub fn is_connected(&self) -> bool {
        matches!(self, PeerState::Handshake | PeerState::Active)
    }
}
