/// Lifecycle state of an item.
///
/// - `Downloading`, `Seeding`, `Queued`, `Stalled` - active states, driven by progress reports
/// - `Paused`, `Stopped` - set by user actions
/// - `Error` - set by the protocol layer
pub mod item_state;

/// Connection state of a peer attached to an item.
pub mod peer_state;
