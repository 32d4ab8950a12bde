use std::collections::BTreeMap;
use async_trait::async_trait;
use crate::hidden::structs::hidden_record::HiddenRecord;
use crate::item::structs::item::Item;
use crate::item::structs::item_id::ItemId;
use crate::persistence::enums::updates_action::UpdatesAction;
use crate::persistence::errors::PersistenceError;
use crate::seeds::structs::seed_config::SeedConfig;

#[async_trait]
pub trait StateBackend: Send + Sync {
    async fn load_items(&self) -> Result<Vec<Item>, PersistenceError>;

    /// Hidden entries with their items. Items returned here are absent from `load_items`.
    async fn load_hidden(&self) -> Result<Vec<HiddenRecord>, PersistenceError>;

    /// `None` when no seed list was ever persisted.
    async fn load_seeds(&self) -> Result<Option<SeedConfig>, PersistenceError>;

    /// `Remove` entries carry no record.
    async fn save_items(
        &self,
        items: BTreeMap<ItemId, (Option<Item>, UpdatesAction)>,
    ) -> Result<u64, PersistenceError>;

    async fn save_hidden(
        &self,
        hidden: BTreeMap<ItemId, (Option<HiddenRecord>, UpdatesAction)>,
    ) -> Result<u64, PersistenceError>;

    async fn save_seeds(&self, seeds: SeedConfig) -> Result<(), PersistenceError>;
}
