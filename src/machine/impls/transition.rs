use crate::item::enums::item_state::ItemState;
use crate::item::structs::item::Item;
use crate::machine::enums::transition::Transition;

impl Transition {
    /// Applies the in-place part of the transition to the item record.
    ///
    /// `Remove` and `Hide` touch the store and the hidden set, which the caller handles.
    /// Returns whether the record changed.
    pub fn apply_to(&self, item: &mut Item) -> bool {
        match self {
            Transition::SetState(state) => {
                let changed = item.state != *state;
                item.state = *state;
                changed
            }
            Transition::Archive => {
                let changed = item.state != ItemState::Stopped || !item.archived;
                item.state = ItemState::Stopped;
                item.archived = true;
                changed
            }
            Transition::Unchanged | Transition::Remove | Transition::Hide => false,
        }
    }
}
