use crate::machine::enums::item_action::ItemAction;

#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum BulkAction {
    Item(ItemAction),
    /// Inverse of `hide`, gated by the passkey.
    Unhide,
}
