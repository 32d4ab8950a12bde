pub mod json_state_backend;
pub mod seal_key;
