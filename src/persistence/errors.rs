use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unsupported state version {found} in {file}, expected {expected}")]
    UnsupportedVersion {
        file: String,
        found: u32,
        expected: u32,
    },

    #[error("A hidden passkey is required to seal hidden records")]
    MissingPasskey,

    #[error("Sealing error: {0}")]
    Sealing(String),

    #[error("Unable to unseal hidden records with the configured passkey")]
    Unseal,
}
