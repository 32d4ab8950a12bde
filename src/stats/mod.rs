//! Statistics tracking.
//!
//! Atomic counters describing the Item Store, the hidden set, bulk activity and the
//! persistence queues. Counters are updated without locking from any thread and read back
//! as a `Stats` snapshot.
//!
//! # Example
//!
//! ```rust,ignore
//! use swarm_keeper::stats::enums::stats_event::StatsEvent;
//!
//! manager.update_stats(StatsEvent::BulkCalls, 1);
//! let stats = manager.get_stats();
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters).
pub mod structs;
