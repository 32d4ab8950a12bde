/// The manager owning every core component.
pub mod swarm_manager;
