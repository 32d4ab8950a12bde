use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug)]
#[serde(rename_all = "lowercase")]
pub enum ItemAction {
    Pause,
    Archive,
    Delete,
    Hide,
    Resume,
}
