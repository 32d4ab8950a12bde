//! Seed configuration management.
//!
//! The seed list bootstraps peer discovery in the protocol layer, which only reads it at
//! startup. Every change therefore raises `restart_required` until the restart is
//! acknowledged.

/// Seed config structures.
pub mod structs;

/// Seed config manager operations.
pub mod impls;

/// Random seed generation.
pub mod generator;
