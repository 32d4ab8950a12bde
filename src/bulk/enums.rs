/// What happened to one ID of a bulk call.
pub mod item_outcome;

/// Every action name accepted at the boundary, `unhide` included.
pub mod bulk_action;
