//! Bulk action outcomes and responses.
//!
//! Every ID of a bulk call produces one `ItemOutcome`. Outcomes are folded into a
//! `BulkTally`, which renders the `BulkResponse` returned to the caller. Per-item failures
//! never escape as errors; only an empty request or a rejected passkey fail the whole call.

/// Per-item outcome tags.
pub mod enums;

/// Tally and response structures.
pub mod structs;

/// Folding and rendering.
pub mod impls;

/// Whole-call errors.
pub mod errors;
