//! Common utilities and shared functionality.
//!
//! # Data Structures
//!
//! - `CustomError` - Free-form error used by the binary and configuration bootstrapping
//!
//! # Utilities
//!
//! - Unix timestamp helpers

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
