use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug)]
#[serde(rename_all = "lowercase")]
pub enum ItemState {
    Downloading,
    Seeding,
    Stopped,
    Paused,
    Queued,
    Stalled,
    Error,
}
