/// Counters folded from item outcomes.
pub mod bulk_tally;

/// Summary returned by every bulk call.
pub mod bulk_response;
