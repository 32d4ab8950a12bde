use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SeedConfig {
    pub seeds: Vec<String>,
    pub seed_length: usize,
    pub seed_count: usize,
    #[serde(default)]
    pub restart_required: bool,
}
