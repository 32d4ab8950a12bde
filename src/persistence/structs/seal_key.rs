use std::fmt;
use std::fmt::Formatter;

pub const SALT_LENGTH: usize = 16;
pub const NONCE_LENGTH: usize = 12;
pub const KEY_LENGTH: usize = 32;

/// AES-256-GCM key derived from the hidden passkey and a document salt.
#[derive(Clone)]
pub struct SealKey {
    pub(crate) salt: Vec<u8>,
    pub(crate) key: [u8; KEY_LENGTH],
}

impl fmt::Debug for SealKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SealKey")
            .field("salt", &self.salt)
            .field("key", &"<redacted>")
            .finish()
    }
}
