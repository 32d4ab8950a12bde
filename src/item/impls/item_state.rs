use std::fmt;
use std::fmt::Formatter;
use crate::item::enums::item_state::ItemState;

impl ItemState {
    /// States owned by the protocol layer, which progress reports may move between.
    pub fn is_active(&self) -> bool {
        matches!(self, ItemState::Downloading | ItemState::Seeding | ItemState::Queued | ItemState::Stalled)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemState::Downloading => "downloading",
            ItemState::Seeding => "seeding",
            ItemState::Stopped => "stopped",
            ItemState::Paused => "paused",
            ItemState::Queued => "queued",
            ItemState::Stalled => "stalled",
            ItemState::Error => "error",
        }
    }
}

impl fmt::Display for ItemState {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
