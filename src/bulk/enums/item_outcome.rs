#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum ItemOutcome {
    /// The transition changed the item.
    Applied,
    /// Legal no-op, e.g. pausing a paused item or hiding a hidden one.
    Unchanged,
    /// The ID is already gone, which `delete` and `unhide` treat as done.
    AlreadyProcessed,
    NotFound,
    InvalidTransition,
}
