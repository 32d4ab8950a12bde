use serde::{Deserialize, Serialize};

/// On-disk shape of the hidden collection.
///
/// One scrypt salt per document. Every record is sealed separately under its own nonce, so
/// neither IDs nor item data appear in clear text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SealedDocument {
    pub salt: String,
    pub records: Vec<SealedRecord>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SealedRecord {
    pub nonce: String,
    pub ciphertext: String,
}
