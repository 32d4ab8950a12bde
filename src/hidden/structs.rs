/// One hidden ID and when it was hidden.
pub mod hidden_entry;

/// The passkey-gated hidden set.
pub mod hidden_set;

/// A hidden entry together with its item, as persisted.
pub mod hidden_record;
