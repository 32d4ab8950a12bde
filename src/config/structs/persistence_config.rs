use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PersistenceConfig {
    pub enabled: bool,
    /// Directory holding the state documents.
    pub path: String,
    /// Seconds between update flushes.
    pub interval: u64,
}
