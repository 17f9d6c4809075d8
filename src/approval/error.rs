//! Error types for purchase approval.

use thiserror::Error;

/// Why a purchase request did not get approved.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApprovalError {
    /// Every approver in the chain declined; the request is reported, not escalated further.
    #[error("No approver can sign off {amount:.2} (last asked: {last})")]
    Rejected { amount: f64, last: String },

    /// The amount is negative or not a number.
    #[error("Invalid amount: {0}")]
    InvalidAmount(f64),

    /// The chain has no approvers at all.
    #[error("Approval chain is empty")]
    NoApprovers,
}
