//! Hidden set controller.
//!
//! The number of hidden items is public. Listing or removing hidden IDs requires the
//! configured passkey, compared in constant time. An empty configured passkey disables
//! every gated operation.

/// Data structures for the hidden set.
pub mod structs;

/// Hidden set operations.
pub mod impls;

/// Hidden set errors.
pub mod errors;
