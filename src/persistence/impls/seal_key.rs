use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use base64::prelude::*;
use rand::RngExt;
use crate::persistence::errors::PersistenceError;
use crate::persistence::structs::seal_key::{SealKey, KEY_LENGTH, NONCE_LENGTH, SALT_LENGTH};
use crate::persistence::structs::sealed_document::SealedRecord;

/// scrypt cost parameters: N = 2^15, r = 8, p = 1.
pub const SCRYPT_LOG_N: u8 = 15;
pub const SCRYPT_R: u32 = 8;
pub const SCRYPT_P: u32 = 1;

fn random_bytes(length: usize) -> Vec<u8> {
    let mut rng = rand::rng();
    (0..length).map(|_| rng.random()).collect()
}

impl SealKey {
    pub fn generate_salt() -> Vec<u8> {
        random_bytes(SALT_LENGTH)
    }

    /// Runs scrypt over the passkey. Blocks for a noticeable time, so async callers run it
    /// through `spawn_blocking`.
    pub fn derive(passkey: &str, salt: Vec<u8>) -> Result<SealKey, PersistenceError> {
        if passkey.is_empty() {
            return Err(PersistenceError::MissingPasskey);
        }
        let params = scrypt::Params::new(SCRYPT_LOG_N, SCRYPT_R, SCRYPT_P, KEY_LENGTH)
            .map_err(|error| PersistenceError::Sealing(error.to_string()))?;
        let mut key = [0u8; KEY_LENGTH];
        scrypt::scrypt(passkey.as_bytes(), &salt, &params, &mut key)
            .map_err(|error| PersistenceError::Sealing(error.to_string()))?;
        Ok(SealKey { salt, key })
    }

    pub fn salt_base64(&self) -> String {
        BASE64_STANDARD.encode(&self.salt)
    }

    fn cipher(&self) -> Result<Aes256Gcm, PersistenceError> {
        Aes256Gcm::new_from_slice(&self.key).map_err(|error| PersistenceError::Sealing(error.to_string()))
    }

    pub fn seal(&self, plain: &[u8]) -> Result<SealedRecord, PersistenceError> {
        let nonce = random_bytes(NONCE_LENGTH);
        let ciphertext = self.cipher()?
            .encrypt(Nonce::from_slice(&nonce), plain)
            .map_err(|error| PersistenceError::Sealing(error.to_string()))?;
        Ok(SealedRecord {
            nonce: BASE64_STANDARD.encode(&nonce),
            ciphertext: BASE64_STANDARD.encode(&ciphertext),
        })
    }

    /// Fails with `Unseal` on a wrong passkey or a tampered record.
    pub fn open(&self, record: &SealedRecord) -> Result<Vec<u8>, PersistenceError> {
        let nonce = BASE64_STANDARD.decode(&record.nonce).map_err(|_| PersistenceError::Unseal)?;
        if nonce.len() != NONCE_LENGTH {
            return Err(PersistenceError::Unseal);
        }
        let ciphertext = BASE64_STANDARD.decode(&record.ciphertext).map_err(|_| PersistenceError::Unseal)?;
        self.cipher()?
            .decrypt(Nonce::from_slice(&nonce), ciphertext.as_slice())
            .map_err(|_| PersistenceError::Unseal)
    }
}
