/// Shared handle to one item and its lock.
pub mod item_handle;
