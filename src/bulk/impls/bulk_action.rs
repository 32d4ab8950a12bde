use std::fmt;
use std::fmt::Formatter;
use crate::bulk::enums::bulk_action::BulkAction;
use crate::machine::enums::item_action::ItemAction;

impl BulkAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            BulkAction::Item(action) => action.as_str(),
            BulkAction::Unhide => "unhide",
        }
    }
}

impl From<ItemAction> for BulkAction {
    fn from(action: ItemAction) -> Self {
        BulkAction::Item(action)
    }
}

impl fmt::Display for BulkAction {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BulkAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("unhide") {
            return Ok(BulkAction::Unhide);
        }
        s.parse::<ItemAction>().map(BulkAction::Item)
    }
}
