/// Load/persist collaborator used at startup and by the update flush.
pub mod state_backend;
