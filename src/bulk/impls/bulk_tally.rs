use crate::bulk::enums::item_outcome::ItemOutcome;
use crate::bulk::structs::bulk_response::BulkResponse;
use crate::bulk::structs::bulk_tally::BulkTally;
use crate::common::common::plural;

impl BulkTally {
    pub fn record(&mut self, outcome: ItemOutcome) {
        if outcome.is_processed() {
            self.processed += 1;
        } else if outcome == ItemOutcome::NotFound {
            self.not_found += 1;
        } else {
            self.invalid += 1;
        }
    }

    pub fn remaining(&self) -> usize {
        self.requested - self.processed
    }

    pub fn into_response(self, label: &str, hidden: usize) -> BulkResponse {
        let remaining = self.remaining();
        let mut message = format!("{label}: processed {}/{}", self.processed, plural(self.requested, "item"));
        if self.not_found > 0 {
            message.push_str(&format!(", {} not found", self.not_found));
        }
        if self.invalid > 0 {
            message.push_str(&format!(", {}", plural(self.invalid, "invalid transition")));
        }
        BulkResponse {
            processed: self.processed,
            hidden,
            remaining,
            successful: remaining == 0,
            message,
        }
    }
}

impl FromIterator<ItemOutcome> for BulkTally {
    fn from_iter<I: IntoIterator<Item = ItemOutcome>>(iter: I) -> Self {
        let mut tally = BulkTally::default();
        for outcome in iter {
            tally.requested += 1;
            tally.record(outcome);
        }
        tally
    }
}
