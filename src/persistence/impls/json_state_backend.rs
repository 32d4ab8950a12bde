use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use async_trait::async_trait;
use base64::prelude::*;
use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;
use crate::hidden::structs::hidden_record::HiddenRecord;
use crate::item::structs::item::Item;
use crate::item::structs::item_id::ItemId;
use crate::persistence::enums::updates_action::UpdatesAction;
use crate::persistence::errors::PersistenceError;
use crate::persistence::structs::json_state_backend::JsonStateBackend;
use crate::persistence::structs::seal_key::SealKey;
use crate::persistence::structs::sealed_document::{SealedDocument, SealedRecord};
use crate::persistence::structs::state_document::{StateDocument, STATE_VERSION};
use crate::persistence::traits::state_backend::StateBackend;
use crate::seeds::structs::seed_config::SeedConfig;

pub const ITEMS_FILE: &str = "items.json";
pub const HIDDEN_FILE: &str = "hidden.json";
pub const SEEDS_FILE: &str = "seeds.json";

impl JsonStateBackend {
    /// Opens (and creates) the state directory. Hidden records are sealed with a key derived
    /// from `passkey`.
    pub async fn new<P: AsRef<Path>>(path: P, passkey: &str) -> Result<JsonStateBackend, PersistenceError> {
        let path = path.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&path).await?;
        info!("[PERSIST] Using state directory {}", path.display());
        Ok(JsonStateBackend {
            path,
            passkey: passkey.to_string(),
            lock: Mutex::new(None),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn file(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }

    async fn read_document<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, PersistenceError> {
        let data = match tokio::fs::read(self.file(name)).await {
            Ok(data) => data,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error.into()),
        };
        let document: StateDocument<T> = serde_json::from_slice(&data)?;
        if document.version != STATE_VERSION {
            return Err(PersistenceError::UnsupportedVersion {
                file: name.to_string(),
                found: document.version,
                expected: STATE_VERSION,
            });
        }
        Ok(Some(document.data))
    }

    /// Writes to `<name>.tmp` first and renames over the target, so readers never see a
    /// partially written document.
    async fn write_document<T: Serialize>(&self, name: &str, data: &T) -> Result<(), PersistenceError> {
        let document = StateDocument {
            version: STATE_VERSION,
            data,
        };
        let bytes = serde_json::to_vec_pretty(&document)?;
        let tmp = self.file(&format!("{name}.tmp"));
        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, self.file(name)).await?;
        debug!("[PERSIST] Wrote {name}");
        Ok(())
    }

    /// Returns the key for `salt`, deriving it only when the cached key was made for another
    /// salt. Without a salt the cached key is reused, or a fresh salt is drawn.
    async fn seal_key(&self, cached: &mut Option<SealKey>, salt: Option<Vec<u8>>) -> Result<SealKey, PersistenceError> {
        match (cached.as_ref(), salt.as_ref()) {
            (Some(key), None) => return Ok(key.clone()),
            (Some(key), Some(salt)) if key.salt == *salt => return Ok(key.clone()),
            _ => {}
        }
        let passkey = self.passkey.clone();
        let salt = salt.unwrap_or_else(SealKey::generate_salt);
        let key = tokio::task::spawn_blocking(move || SealKey::derive(&passkey, salt))
            .await
            .map_err(|error| PersistenceError::Sealing(error.to_string()))??;
        debug!("[PERSIST] Derived the hidden record key");
        *cached = Some(key.clone());
        Ok(key)
    }

    async fn read_sealed(&self, cached: &mut Option<SealKey>) -> Result<BTreeMap<ItemId, HiddenRecord>, PersistenceError> {
        let Some(document) = self.read_document::<SealedDocument>(HIDDEN_FILE).await? else {
            return Ok(BTreeMap::new());
        };
        let salt = BASE64_STANDARD.decode(&document.salt).map_err(|_| PersistenceError::Unseal)?;
        let key = self.seal_key(cached, Some(salt)).await?;
        let mut records = BTreeMap::new();
        for sealed in &document.records {
            let record: HiddenRecord = serde_json::from_slice(&key.open(sealed)?)?;
            records.insert(record.entry.id, record);
        }
        Ok(records)
    }

    fn apply_changes<V>(
        current: &mut BTreeMap<ItemId, V>,
        changes: BTreeMap<ItemId, (Option<V>, UpdatesAction)>,
    ) -> u64 {
        let mut applied = 0u64;
        for (id, (record, action)) in changes {
            match (action, record) {
                (UpdatesAction::Remove, _) | (_, None) => {
                    current.remove(&id);
                }
                (UpdatesAction::Add | UpdatesAction::Update, Some(record)) => {
                    current.insert(id, record);
                }
            }
            applied += 1;
        }
        applied
    }
}

#[async_trait]
impl StateBackend for JsonStateBackend {
    async fn load_items(&self) -> Result<Vec<Item>, PersistenceError> {
        let _guard = self.lock.lock().await;
        Ok(self.read_document(ITEMS_FILE).await?.unwrap_or_default())
    }

    async fn load_hidden(&self) -> Result<Vec<HiddenRecord>, PersistenceError> {
        let mut cached = self.lock.lock().await;
        Ok(self.read_sealed(&mut cached).await?.into_values().collect())
    }

    async fn load_seeds(&self) -> Result<Option<SeedConfig>, PersistenceError> {
        let _guard = self.lock.lock().await;
        self.read_document(SEEDS_FILE).await
    }

    async fn save_items(
        &self,
        items: BTreeMap<ItemId, (Option<Item>, UpdatesAction)>,
    ) -> Result<u64, PersistenceError> {
        let _guard = self.lock.lock().await;
        let stored: Vec<Item> = self.read_document(ITEMS_FILE).await?.unwrap_or_default();
        let mut current: BTreeMap<ItemId, Item> = stored.into_iter().map(|item| (item.id, item)).collect();
        let applied = Self::apply_changes(&mut current, items);
        let records: Vec<&Item> = current.values().collect();
        self.write_document(ITEMS_FILE, &records).await?;
        Ok(applied)
    }

    async fn save_hidden(
        &self,
        hidden: BTreeMap<ItemId, (Option<HiddenRecord>, UpdatesAction)>,
    ) -> Result<u64, PersistenceError> {
        let mut cached = self.lock.lock().await;
        let mut current = self.read_sealed(&mut cached).await?;
        let applied = Self::apply_changes(&mut current, hidden);
        let key = self.seal_key(&mut cached, None).await?;
        let records = current.values()
            .map(|record| key.seal(&serde_json::to_vec(record)?))
            .collect::<Result<Vec<SealedRecord>, PersistenceError>>()?;
        let document = SealedDocument {
            salt: key.salt_base64(),
            records,
        };
        self.write_document(HIDDEN_FILE, &document).await?;
        Ok(applied)
    }

    async fn save_seeds(&self, seeds: SeedConfig) -> Result<(), PersistenceError> {
        let _guard = self.lock.lock().await;
        self.write_document(SEEDS_FILE, &seeds).await
    }
}
