use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SeedGenerationConfig {
    /// Characters per auto-generated seed.
    pub seed_length: usize,
    /// Number of seeds produced by auto-generation.
    pub seed_count: usize,
    /// Seed list used when nothing has been persisted yet.
    #[serde(default)]
    pub default_seeds: Vec<String>,
}
