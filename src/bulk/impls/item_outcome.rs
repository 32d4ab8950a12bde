use crate::bulk::enums::item_outcome::ItemOutcome;

impl ItemOutcome {
    pub fn is_processed(&self) -> bool {
        matches!(self, ItemOutcome::Applied | ItemOutcome::Unchanged | ItemOutcome::AlreadyProcessed)
    }
}
