use crate::item::enums::item_state::ItemState;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Transition {
    /// Legal, but nothing changes (idempotent repeat).
    Unchanged,
    SetState(ItemState),
    /// Move to `stopped` and set the archived flag.
    Archive,
    /// Remove from the store and from the hidden set.
    Remove,
    /// Add to the hidden set; the state is left alone.
    Hide,
}
