use serde::{Deserialize, Serialize};

/// Result of a bulk call.
///
/// `hidden` is the total size of the hidden set after the call. `message` is for display only.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
pub struct BulkResponse {
    pub processed: usize,
    pub hidden: usize,
    pub remaining: usize,
    pub successful: bool,
    pub message: String,
}
