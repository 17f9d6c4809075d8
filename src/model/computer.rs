use serde::{Deserialize, Serialize};

/// A finished computer. Produced only by a builder's `finish`; fields are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Computer {
    pub cpu: String,
    pub motherboard: String,
    pub memory: Vec<String>,
    pub storage: Vec<String>,
    pub gpu: Option<String>,
    pub power_supply: String,
    pub case: Option<String>,
}

impl Computer {
    /// Whether the machine has a discrete graphics card.
    pub fn has_gpu(&self) -> bool {
        self.gpu.is_some()
    }
}
