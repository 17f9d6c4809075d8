use serde::{Deserialize, Serialize};

/// Observable state of a television.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TvStatus {
    pub brand: String,
    pub powered: bool,
    pub channel: u32,
    pub volume: u8,
}
