use serde::{Deserialize, Serialize};

pub const STATE_VERSION: u32 = 1;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StateDocument<T> {
    pub version: u32,
    pub data: T,
}
