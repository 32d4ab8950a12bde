use thiserror::Error;
use crate::item::enums::item_state::ItemState;
use crate::item::structs::item_id::ItemId;
use crate::machine::enums::item_action::ItemAction;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ItemError {
    #[error("Item not found: {0}")]
    NotFound(ItemId),

    #[error("Item already exists: {0}")]
    AlreadyExists(ItemId),

    #[error("Invalid transition: cannot {action} item {id} in state {state}")]
    InvalidTransition {
        id: ItemId,
        action: ItemAction,
        state: ItemState,
    },

    #[error("Counter regression on item {id}: {counter} went from {previous} to {reported}")]
    CounterRegression {
        id: ItemId,
        counter: &'static str,
        previous: u64,
        reported: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let error = ItemError::NotFound(ItemId([0xab; 32]));
        assert_eq!(format!("{}", error), format!("Item not found: {}", "ab".repeat(32)));
    }

    #[test]
    fn test_already_exists_display() {
        let error = ItemError::AlreadyExists(ItemId([0u8; 32]));
        assert!(format!("{}", error).starts_with("Item already exists: 0000"));
    }

    #[test]
    fn test_invalid_transition_display() {
        let error = ItemError::InvalidTransition {
            id: ItemId([1u8; 32]),
            action: ItemAction::Archive,
            state: ItemState::Downloading,
        };
        let message = format!("{}", error);
        assert!(message.starts_with("Invalid transition: cannot archive item 0101"));
        assert!(message.ends_with("in state downloading"));
    }

    #[test]
    fn test_counter_regression_display() {
        let error = ItemError::CounterRegression {
            id: ItemId([2u8; 32]),
            counter: "downloaded",
            previous: 100,
            reported: 50,
        };
        assert!(format!("{}", error).ends_with("downloaded went from 100 to 50"));
    }
}
