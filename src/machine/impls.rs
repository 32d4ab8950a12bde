pub mod item_action;
pub mod transition;
