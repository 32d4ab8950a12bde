pub mod item_id;
pub mod item_id_visitor;
pub mod item_state;
pub mod peer_state;
pub mod item;
pub mod item_sharding;
