pub mod bulk_action;
pub mod item_outcome;
pub mod bulk_tally;
