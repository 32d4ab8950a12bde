//! Security helpers.
//!
//! Passkey comparison must not leak how many leading bytes matched, so every check
//! against the configured secret goes through `constant_time_eq`.

#[allow(clippy::module_inception)]
pub mod security;
