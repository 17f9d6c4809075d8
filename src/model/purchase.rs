use serde::{Deserialize, Serialize};

/// A spending request routed through the approval chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    pub amount: f64,
    pub purpose: String,
}

impl PurchaseRequest {
    pub fn new(amount: f64, purpose: impl Into<String>) -> Self {
        Self {
            amount,
            purpose: purpose.into(),
        }
    }
}

/// Who signed off on a [`PurchaseRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Approval {
    pub approver: String,
    pub role: String,
    pub amount: f64,
}
