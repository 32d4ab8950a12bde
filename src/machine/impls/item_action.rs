use std::fmt;
use std::fmt::Formatter;
use crate::item::enums::item_state::ItemState;
use crate::item::errors::ItemError;
use crate::item::structs::item::Item;
use crate::machine::enums::item_action::ItemAction;
use crate::machine::enums::transition::Transition;

impl ItemAction {
    pub const ALL: [ItemAction; 5] = [
        ItemAction::Pause,
        ItemAction::Archive,
        ItemAction::Delete,
        ItemAction::Hide,
        ItemAction::Resume,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemAction::Pause => "pause",
            ItemAction::Archive => "archive",
            ItemAction::Delete => "delete",
            ItemAction::Hide => "hide",
            ItemAction::Resume => "resume",
        }
    }

    /// Decides the transition for `item`, or rejects the action for its current state.
    ///
    /// An archived item never leaves `stopped` through an action: pausing it is a no-op and
    /// resuming it is rejected.
    pub fn plan(&self, item: &Item) -> Result<Transition, ItemError> {
        match (self, item.state) {
            (ItemAction::Pause, _) if item.archived => Ok(Transition::Unchanged),
            (ItemAction::Pause, ItemState::Error) => Err(self.invalid(item)),
            (ItemAction::Pause, ItemState::Paused) => Ok(Transition::Unchanged),
            (ItemAction::Pause, _) => Ok(Transition::SetState(ItemState::Paused)),

            (ItemAction::Archive, ItemState::Stopped) if item.archived => Ok(Transition::Unchanged),
            (ItemAction::Archive, ItemState::Seeding | ItemState::Stopped) => Ok(Transition::Archive),
            (ItemAction::Archive, _) => Err(self.invalid(item)),

            (ItemAction::Delete, _) => Ok(Transition::Remove),
            (ItemAction::Hide, _) => Ok(Transition::Hide),

            (ItemAction::Resume, _) if item.archived => Err(self.invalid(item)),
            (ItemAction::Resume, ItemState::Paused | ItemState::Stopped | ItemState::Error) => {
                Ok(Transition::SetState(item.derived_state()))
            }
            (ItemAction::Resume, _) => Ok(Transition::Unchanged),
        }
    }

    fn invalid(&self, item: &Item) -> ItemError {
        ItemError::InvalidTransition {
            id: item.id,
            action: *self,
            state: item.state,
        }
    }
}

impl fmt::Display for ItemAction {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ItemAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemAction::ALL
            .into_iter()
            .find(|action| action.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown action: {s}"))
    }
}
