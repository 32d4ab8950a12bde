use std::fmt;
use std::fmt::Formatter;
use std::path::PathBuf;
use tokio::sync::Mutex;
use crate::persistence::structs::seal_key::SealKey;

pub struct JsonStateBackend {
    pub(crate) path: PathBuf,
    pub(crate) passkey: String,
    /// Serializes read-modify-write cycles on the documents and caches the last derived
    /// hidden key.
    pub(crate) lock: Mutex<Option<SealKey>>,
}

impl fmt::Debug for JsonStateBackend {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonStateBackend")
            .field("path", &self.path)
            .field("passkey", &"<redacted>")
            .finish()
    }
}
