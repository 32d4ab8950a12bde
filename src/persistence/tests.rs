#[cfg(test)]
mod persistence_tests {
    use std::collections::BTreeMap;
    use crate::hidden::structs::hidden_entry::HiddenEntry;
    use crate::hidden::structs::hidden_record::HiddenRecord;
    use crate::item::structs::item::Item;
    use crate::item::structs::item_id::ItemId;
    use crate::persistence::enums::updates_action::UpdatesAction;
    use crate::persistence::errors::PersistenceError;
    use crate::persistence::impls::json_state_backend::{HIDDEN_FILE, ITEMS_FILE, SEEDS_FILE};
    use crate::persistence::structs::json_state_backend::JsonStateBackend;
    use crate::persistence::traits::state_backend::StateBackend;
    use crate::seeds::structs::seed_config::SeedConfig;

    const PASSKEY: &str = "Backend-Passkey-7";

    fn id(byte: u8) -> ItemId {
        ItemId([byte; 32])
    }

    fn hidden_record(byte: u8) -> HiddenRecord {
        HiddenRecord {
            entry: HiddenEntry { id: id(byte), hidden_at: 1_700_000_000 },
            item: Item::new(id(byte), "secret-name", 64),
        }
    }

    #[tokio::test]
    async fn test_empty_directory_loads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonStateBackend::new(dir.path(), PASSKEY).await.unwrap();
        assert!(backend.load_items().await.unwrap().is_empty());
        assert!(backend.load_hidden().await.unwrap().is_empty());
        assert!(backend.load_seeds().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_items_changes_are_merged() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonStateBackend::new(dir.path(), PASSKEY).await.unwrap();

        let mut changes = BTreeMap::new();
        changes.insert(id(1), (Some(Item::new(id(1), "one", 10)), UpdatesAction::Add));
        changes.insert(id(2), (Some(Item::new(id(2), "two", 20)), UpdatesAction::Add));
        assert_eq!(backend.save_items(changes).await.unwrap(), 2);

        let mut changes = BTreeMap::new();
        changes.insert(id(1), (None, UpdatesAction::Remove));
        let mut renamed = Item::new(id(2), "two-renamed", 20);
        renamed.downloaded = 5;
        changes.insert(id(2), (Some(renamed.clone()), UpdatesAction::Update));
        backend.save_items(changes).await.unwrap();

        let items = backend.load_items().await.unwrap();
        assert_eq!(items, vec![renamed]);
        assert!(!dir.path().join(format!("{ITEMS_FILE}.tmp")).exists());
    }

    #[tokio::test]
    async fn test_hidden_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonStateBackend::new(dir.path(), PASSKEY).await.unwrap();
        let record = hidden_record(3);

        let mut changes = BTreeMap::new();
        changes.insert(id(3), (Some(record.clone()), UpdatesAction::Add));
        changes.insert(id(4), (None, UpdatesAction::Remove));
        assert_eq!(backend.save_hidden(changes).await.unwrap(), 2);
        assert_eq!(backend.load_hidden().await.unwrap(), vec![record.clone()]);

        let mut changes = BTreeMap::new();
        changes.insert(id(5), (Some(hidden_record(5)), UpdatesAction::Add));
        backend.save_hidden(changes).await.unwrap();
        assert_eq!(backend.load_hidden().await.unwrap(), vec![record, hidden_record(5)]);
    }

    #[tokio::test]
    async fn test_hidden_file_is_sealed() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonStateBackend::new(dir.path(), PASSKEY).await.unwrap();
        let mut changes = BTreeMap::new();
        changes.insert(id(0xab), (Some(hidden_record(0xab)), UpdatesAction::Add));
        backend.save_hidden(changes).await.unwrap();

        let raw = std::fs::read_to_string(dir.path().join(HIDDEN_FILE)).unwrap();
        assert!(!raw.contains(&id(0xab).to_string()));
        assert!(!raw.contains("secret-name"));
        assert!(raw.contains("\"salt\""));
    }

    #[tokio::test]
    async fn test_hidden_wrong_passkey_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonStateBackend::new(dir.path(), PASSKEY).await.unwrap();
        let mut changes = BTreeMap::new();
        changes.insert(id(6), (Some(hidden_record(6)), UpdatesAction::Add));
        backend.save_hidden(changes).await.unwrap();

        let other = JsonStateBackend::new(dir.path(), "Another-Passkey-8").await.unwrap();
        assert!(matches!(other.load_hidden().await, Err(PersistenceError::Unseal)));
        let mut changes = BTreeMap::new();
        changes.insert(id(7), (Some(hidden_record(7)), UpdatesAction::Add));
        assert!(matches!(other.save_hidden(changes).await, Err(PersistenceError::Unseal)));
        assert_eq!(backend.load_hidden().await.unwrap(), vec![hidden_record(6)], "a rejected save leaves the file intact");
    }

    #[tokio::test]
    async fn test_hidden_requires_passkey() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonStateBackend::new(dir.path(), "").await.unwrap();
        assert!(backend.load_hidden().await.unwrap().is_empty());
        let mut changes = BTreeMap::new();
        changes.insert(id(8), (Some(hidden_record(8)), UpdatesAction::Add));
        assert!(matches!(backend.save_hidden(changes).await, Err(PersistenceError::MissingPasskey)));
    }

    #[tokio::test]
    async fn test_seeds_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonStateBackend::new(dir.path(), PASSKEY).await.unwrap();
        let seeds = SeedConfig {
            seeds: vec![String::from("abc")],
            seed_length: 3,
            seed_count: 1,
            restart_required: true,
        };
        backend.save_seeds(seeds.clone()).await.unwrap();
        assert_eq!(backend.load_seeds().await.unwrap(), Some(seeds));

        let raw = std::fs::read_to_string(dir.path().join(SEEDS_FILE)).unwrap();
        assert!(raw.contains("\"version\": 1"));
        assert!(raw.contains("\"restartRequired\": true"));
    }

    #[tokio::test]
    async fn test_unsupported_version_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(ITEMS_FILE), r#"{"version": 9, "data": []}"#).unwrap();
        let backend = JsonStateBackend::new(dir.path(), PASSKEY).await.unwrap();
        assert!(matches!(
            backend.load_items().await,
            Err(PersistenceError::UnsupportedVersion { found: 9, expected: 1, .. })
        ));
    }

    #[tokio::test]
    async fn test_corrupt_document_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(ITEMS_FILE), "not json").unwrap();
        let backend = JsonStateBackend::new(dir.path(), PASSKEY).await.unwrap();
        assert!(matches!(backend.load_items().await, Err(PersistenceError::Serialization(_))));
    }
}
