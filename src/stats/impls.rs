pub mod stats_atomics;
pub mod swarm_manager;
