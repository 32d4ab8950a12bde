pub mod swarm_manager;
pub mod swarm_manager_items;
pub mod swarm_manager_actions;
pub mod swarm_manager_hidden;
pub mod swarm_manager_seeds;
pub mod swarm_manager_updates;
