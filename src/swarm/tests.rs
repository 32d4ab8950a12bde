#[cfg(test)]
mod swarm_tests {
    use std::collections::BTreeMap;
    use std::sync::Arc;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use crate::bulk::errors::BulkError;
    use crate::config::structs::configuration::Configuration;
    use crate::hidden::structs::hidden_entry::HiddenEntry;
    use crate::hidden::structs::hidden_record::HiddenRecord;
    use crate::item::enums::item_state::ItemState;
    use crate::item::errors::ItemError;
    use crate::item::structs::item::Item;
    use crate::item::structs::item_id::ItemId;
    use crate::item::structs::progress_update::ProgressUpdate;
    use crate::machine::enums::item_action::ItemAction;
    use crate::persistence::enums::updates_action::UpdatesAction;
    use crate::persistence::errors::PersistenceError;
    use crate::persistence::traits::state_backend::StateBackend;
    use crate::seeds::structs::seed_config::SeedConfig;
    use crate::swarm::structs::swarm_manager::SwarmManager;

    const PASSKEY: &str = "Unit-Test-Passkey-1";

    fn id(byte: u8) -> ItemId {
        ItemId([byte; 32])
    }

    fn manager() -> SwarmManager {
        let mut config = Configuration::init();
        config.core.hidden_passkey = String::from(PASSKEY);
        SwarmManager::new(Arc::new(config))
    }

    fn add(manager: &SwarmManager, byte: u8, state: ItemState) {
        manager.add_item(Item::new(id(byte), "item", 100).with_state(state)).unwrap();
    }

    #[derive(Default)]
    struct RecordingBackend {
        fail: bool,
        items: Mutex<Vec<BTreeMap<ItemId, (Option<Item>, UpdatesAction)>>>,
        hidden: Mutex<Vec<BTreeMap<ItemId, (Option<HiddenRecord>, UpdatesAction)>>>,
        seeds: Mutex<Vec<SeedConfig>>,
    }

    #[async_trait]
    impl StateBackend for RecordingBackend {
        async fn load_items(&self) -> Result<Vec<Item>, PersistenceError> {
            Ok(vec![Item::new(id(1), "restored", 10)])
        }

        async fn load_hidden(&self) -> Result<Vec<HiddenRecord>, PersistenceError> {
            Ok(vec![
                HiddenRecord {
                    entry: HiddenEntry { id: id(2), hidden_at: 100 },
                    item: Item::new(id(2), "sealed", 20).with_state(ItemState::Seeding),
                },
                HiddenRecord {
                    entry: HiddenEntry { id: id(3), hidden_at: 200 },
                    item: Item::new(id(4), "mismatched", 30),
                },
            ])
        }

        async fn load_seeds(&self) -> Result<Option<SeedConfig>, PersistenceError> {
            Ok(None)
        }

        async fn save_items(&self, items: BTreeMap<ItemId, (Option<Item>, UpdatesAction)>) -> Result<u64, PersistenceError> {
            if self.fail {
                return Err(std::io::Error::other("disk full").into());
            }
            let count = items.len() as u64;
            self.items.lock().push(items);
            Ok(count)
        }

        async fn save_hidden(&self, hidden: BTreeMap<ItemId, (Option<HiddenRecord>, UpdatesAction)>) -> Result<u64, PersistenceError> {
            let count = hidden.len() as u64;
            self.hidden.lock().push(hidden);
            Ok(count)
        }

        async fn save_seeds(&self, seeds: SeedConfig) -> Result<(), PersistenceError> {
            self.seeds.lock().push(seeds);
            Ok(())
        }
    }

    #[test]
    fn test_add_item_rejects_duplicate() {
        let manager = manager();
        add(&manager, 1, ItemState::Queued);
        assert_eq!(
            manager.add_item(Item::new(id(1), "again", 1)),
            Err(ItemError::AlreadyExists(id(1)))
        );
        assert_eq!(manager.get_stats().items, 1);
    }

    #[test]
    fn test_empty_ids_rejected() {
        let manager = manager();
        assert_eq!(manager.apply_action(ItemAction::Pause, &[]), Err(BulkError::EmptyIds));
        assert_eq!(manager.unhide(&[], Some(PASSKEY)), Err(BulkError::EmptyIds));
    }

    #[test]
    fn test_duplicates_processed_once() {
        let manager = manager();
        add(&manager, 1, ItemState::Downloading);
        let response = manager.apply_action(ItemAction::Pause, &[id(1), id(1), id(1)]).unwrap();
        assert_eq!(response.processed, 1);
        assert_eq!(response.remaining, 0);
        assert!(response.successful);
    }

    #[test]
    fn test_archive_mixed_batch() {
        let manager = manager();
        add(&manager, 1, ItemState::Seeding);
        add(&manager, 2, ItemState::Downloading);

        let response = manager.apply_action(ItemAction::Archive, &[id(1), id(2)]).unwrap();
        assert_eq!(response.processed, 1);
        assert_eq!(response.remaining, 1);
        assert!(!response.successful);

        let archived = manager.get_item(&id(1)).unwrap();
        assert_eq!(archived.state, ItemState::Stopped);
        assert!(archived.archived);
        assert_eq!(manager.get_item(&id(2)).unwrap().state, ItemState::Downloading);
    }

    #[test]
    fn test_pause_not_found_counts_remaining() {
        let manager = manager();
        add(&manager, 1, ItemState::Downloading);
        let response = manager.apply_action(ItemAction::Pause, &[id(1), id(9)]).unwrap();
        assert_eq!((response.processed, response.remaining), (1, 1));
        assert!(response.message.contains("1 not found"));
    }

    #[test]
    fn test_delete_is_idempotent() {
        let manager = manager();
        add(&manager, 1, ItemState::Seeding);
        add(&manager, 2, ItemState::Paused);

        let first = manager.apply_action(ItemAction::Delete, &[id(1), id(2)]).unwrap();
        assert_eq!(first.processed, 2);
        let second = manager.apply_action(ItemAction::Delete, &[id(1), id(2)]).unwrap();
        assert_eq!(second.processed, 2);
        assert!(second.successful);
        assert_eq!(manager.items_count(), 0);
        assert_eq!(manager.get_stats().items, 0);
    }

    #[test]
    fn test_delete_clears_hidden_entry() {
        let manager = manager();
        add(&manager, 1, ItemState::Seeding);
        manager.apply_action(ItemAction::Hide, &[id(1)]).unwrap();
        assert_eq!(manager.hidden_count(), 1);

        let response = manager.apply_action(ItemAction::Delete, &[id(1)]).unwrap();
        assert_eq!(response.hidden, 0);
        assert_eq!(manager.hidden_count(), 0);
    }

    #[test]
    fn test_hide_unknown_id_not_found() {
        let manager = manager();
        let response = manager.apply_action(ItemAction::Hide, &[id(5)]).unwrap();
        assert_eq!(response.remaining, 1);
        assert_eq!(manager.hidden_count(), 0);
    }

    #[test]
    fn test_hidden_items_excluded_from_listing() {
        let manager = manager();
        add(&manager, 1, ItemState::Seeding);
        add(&manager, 2, ItemState::Seeding);
        manager.apply_action(ItemAction::Hide, &[id(2)]).unwrap();

        let visible: Vec<ItemId> = manager.list_items().into_iter().map(|item| item.id).collect();
        assert_eq!(visible, vec![id(1)]);
        assert_eq!(manager.get_item(&id(2)), Err(ItemError::NotFound(id(2))));
        assert_eq!(manager.hidden_items(Some(PASSKEY)).unwrap().len(), 1);
        assert!(manager.hidden_items(Some("bad")).is_err());
        assert_eq!(manager.get_stats().unauthorized, 1);
    }

    #[test]
    fn test_unhide_flow() {
        let manager = manager();
        add(&manager, 1, ItemState::Seeding);
        manager.apply_action(ItemAction::Hide, &[id(1)]).unwrap();

        assert_eq!(manager.unhide(&[id(1)], Some("wrong")), Err(BulkError::Unauthorized));
        assert_eq!(manager.hidden_count(), 1);

        let response = manager.unhide(&[id(1), id(2)], Some(PASSKEY)).unwrap();
        assert_eq!(response.processed, 1);
        assert_eq!(response.remaining, 1);
        assert_eq!(response.hidden, 0);
        assert_eq!(manager.get_item(&id(1)).unwrap().state, ItemState::Seeding);
    }

    #[test]
    fn test_unhide_all() {
        let manager = manager();
        add(&manager, 1, ItemState::Seeding);
        add(&manager, 2, ItemState::Paused);
        manager.apply_action(ItemAction::Hide, &[id(1), id(2)]).unwrap();

        let response = manager.unhide_all(Some(PASSKEY)).unwrap();
        assert_eq!(response.processed, 2);
        assert!(response.successful);
        assert_eq!(manager.list_items().len(), 2);
    }

    #[test]
    fn test_resume_after_pause() {
        let manager = manager();
        add(&manager, 1, ItemState::Downloading);
        manager.apply_action(ItemAction::Pause, &[id(1)]).unwrap();
        manager.apply_action(ItemAction::Resume, &[id(1)]).unwrap();
        assert_eq!(manager.get_item(&id(1)).unwrap().state, ItemState::Stalled);
    }

    #[test]
    fn test_progress_and_error_reports() {
        let manager = manager();
        add(&manager, 1, ItemState::Queued);
        let state = manager.report_progress(&id(1), ProgressUpdate { downloaded: 100, uploaded: 50, remaining: 0, ..Default::default() }).unwrap();
        assert_eq!(state, ItemState::Seeding);
        assert_eq!(manager.get_item(&id(1)).unwrap().ratio, 0.5);

        manager.report_error(&id(1)).unwrap();
        assert_eq!(manager.get_item(&id(1)).unwrap().state, ItemState::Error);
        manager.reset_uploaded(&id(1)).unwrap();
        assert_eq!(manager.get_item(&id(1)).unwrap().uploaded, 0);
        assert_eq!(manager.report_error(&id(2)), Err(ItemError::NotFound(id(2))));
    }

    #[test]
    fn test_update_queue_coalesces() {
        let manager = manager();
        add(&manager, 1, ItemState::Downloading);
        manager.apply_action(ItemAction::Pause, &[id(1)]).unwrap();
        assert_eq!(manager.get_item_updates().get(&id(1)), Some(&UpdatesAction::Add));

        manager.apply_action(ItemAction::Delete, &[id(1)]).unwrap();
        assert_eq!(manager.get_item_updates().get(&id(1)), Some(&UpdatesAction::Remove));
    }

    #[tokio::test]
    async fn test_load_state_restores_sealed_items() {
        let manager = manager();
        let backend = RecordingBackend::default();
        manager.load_state(&backend).await.unwrap();

        assert_eq!(manager.items_count(), 2);
        assert_eq!(manager.hidden_count(), 1);
        assert_eq!(manager.list_items().len(), 1);
        let hidden = manager.hidden_items(Some(PASSKEY)).unwrap();
        assert_eq!(hidden[0].name, "sealed");
        assert_eq!(manager.get_hidden_updates().get(&id(3)), Some(&UpdatesAction::Remove));
        assert!(manager.get_item_updates().is_empty(), "restored items are not queued again");
    }

    #[tokio::test]
    async fn test_save_updates_drains_queues() {
        let manager = manager();
        add(&manager, 1, ItemState::Seeding);
        manager.apply_action(ItemAction::Hide, &[id(1)]).unwrap();
        manager.auto_generate_seeds();

        let backend = RecordingBackend::default();
        manager.save_updates(&backend).await.unwrap();

        assert_eq!(backend.items.lock().len(), 1);
        assert_eq!(backend.hidden.lock().len(), 1);
        assert_eq!(backend.items.lock()[0].get(&id(1)), Some(&(None, UpdatesAction::Remove)), "hidden items leave the visible collection");
        let sealed = backend.hidden.lock()[0].get(&id(1)).cloned();
        assert!(matches!(sealed, Some((Some(HiddenRecord { .. }), UpdatesAction::Update))));
        assert_eq!(backend.seeds.lock().len(), 1);
        assert!(manager.get_item_updates().is_empty());
        assert!(manager.get_hidden_updates().is_empty());
        assert!(manager.get_stats().timestamp_run_save > 0);

        manager.save_updates(&backend).await.unwrap();
        assert_eq!(backend.items.lock().len(), 1, "nothing pending, nothing written");
        assert_eq!(backend.seeds.lock().len(), 1);
    }

    #[tokio::test]
    async fn test_save_updates_requeues_on_failure() {
        let manager = manager();
        add(&manager, 1, ItemState::Seeding);
        let backend = RecordingBackend { fail: true, ..Default::default() };

        assert!(manager.save_updates(&backend).await.is_err());
        assert_eq!(manager.get_item_updates().get(&id(1)), Some(&UpdatesAction::Add));
        assert_eq!(manager.get_stats().items_updates, 1);
    }

    #[tokio::test]
    async fn test_unhide_moves_record_back_to_visible() {
        let manager = manager();
        add(&manager, 1, ItemState::Seeding);
        manager.apply_action(ItemAction::Hide, &[id(1)]).unwrap();
        let backend = RecordingBackend::default();
        manager.save_updates(&backend).await.unwrap();

        manager.unhide(&[id(1)], Some(PASSKEY)).unwrap();
        manager.save_updates(&backend).await.unwrap();

        let items = backend.items.lock();
        let upsert = items.last().and_then(|changes| changes.get(&id(1))).cloned();
        assert!(matches!(upsert, Some((Some(_), UpdatesAction::Update))));
        assert_eq!(backend.hidden.lock().last().and_then(|changes| changes.get(&id(1))).cloned(), Some((None, UpdatesAction::Remove)));
    }

    #[test]
    fn test_archived_item_cannot_be_revived_through_pause() {
        let manager = manager();
        add(&manager, 1, ItemState::Seeding);
        manager.apply_action(ItemAction::Archive, &[id(1)]).unwrap();

        let paused = manager.apply_action(ItemAction::Pause, &[id(1)]).unwrap();
        assert_eq!(paused.processed, 1);
        let resumed = manager.apply_action(ItemAction::Resume, &[id(1)]).unwrap();
        assert_eq!((resumed.processed, resumed.remaining), (0, 1));

        let item = manager.get_item(&id(1)).unwrap();
        assert_eq!(item.state, ItemState::Stopped);
        assert!(item.archived);
    }

    #[test]
    fn test_hidden_items_read_as_not_found_for_state_actions() {
        let manager = manager();
        add(&manager, 1, ItemState::Downloading);
        manager.apply_action(ItemAction::Hide, &[id(1)]).unwrap();

        for action in [ItemAction::Pause, ItemAction::Archive, ItemAction::Resume] {
            let response = manager.apply_action(action, &[id(1)]).unwrap();
            assert_eq!((response.processed, response.remaining), (0, 1), "{action} on a hidden item");
            assert!(response.message.contains("1 not found"));
        }
        let hidden = manager.hidden_items(Some(PASSKEY)).unwrap();
        assert_eq!(hidden[0].state, ItemState::Downloading);

        assert_eq!(manager.apply_action(ItemAction::Hide, &[id(1)]).unwrap().processed, 1);
        assert_eq!(manager.apply_action(ItemAction::Delete, &[id(1)]).unwrap().processed, 1);
        assert_eq!(manager.hidden_count(), 0);
    }
}
