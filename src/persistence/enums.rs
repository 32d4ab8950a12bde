/// Pending change kinds:
/// - `Add` - new record
/// - `Update` - modified record
/// - `Remove` - deleted record
pub mod updates_action;
