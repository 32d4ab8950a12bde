/// Directory-backed JSON implementation of `StateBackend`.
pub mod json_state_backend;

/// Versioned wrapper written around every persisted collection.
pub mod state_document;

/// Encrypted layout of the hidden collection.
pub mod sealed_document;

/// Passkey-derived key used to seal hidden records.
pub mod seal_key;
