use std::collections::BTreeMap;
use crate::hidden::structs::hidden_record::HiddenRecord;
use crate::item::structs::item::Item;
use crate::item::structs::item_id::ItemId;
use crate::persistence::enums::updates_action::UpdatesAction;

pub type ItemChanges = BTreeMap<ItemId, (Option<Item>, UpdatesAction)>;
pub type HiddenChanges = BTreeMap<ItemId, (Option<HiddenRecord>, UpdatesAction)>;
