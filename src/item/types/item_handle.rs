use std::sync::Arc;
use parking_lot::Mutex;
use crate::item::structs::item_slot::ItemSlot;

pub type ItemHandle = Arc<Mutex<ItemSlot>>;
