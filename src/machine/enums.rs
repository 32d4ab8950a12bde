/// User-issued actions accepted by the bulk processor.
pub mod item_action;

/// The effect an action has on a single item.
pub mod transition;
