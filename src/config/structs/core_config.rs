use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// Shared secret required to reveal or unhide hidden items. Empty disables unhide.
    pub hidden_passkey: String,
}

impl std::fmt::Debug for CoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoreConfig")
            .field("hidden_passkey", &"<redacted>")
            .finish()
    }
}
