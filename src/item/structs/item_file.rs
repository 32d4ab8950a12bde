use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ItemFile {
    pub path: String,
    pub length: u64,
    pub remaining: u64,
}
