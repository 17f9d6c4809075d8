//! # Purchase Approval
//!
//! A chain skin. Approvers are ordered by spending limit; the first one whose limit covers the
//! amount signs off. Limits are inclusive: a team leader approves exactly 500.
//!
//! | Role | Limit |
//! |------|-------|
//! | Team Leader | 500 |
//! | Department Manager | 5000 |
//! | General Manager | unlimited |
//!
//! ```rust
//! use pattern_recipe::approval::ApprovalDesk;
//!
//! let desk = ApprovalDesk::standard();
//! assert_eq!(desk.approve(3000.0, "laptops").unwrap().role, "Department Manager");
//! ```

pub mod error;

pub use error::*;

use crate::model::{Approval, PurchaseRequest};
use pattern_framework::{Chain, Dispatch, Disposition, Handler, Step};
use tracing::{info, instrument, warn};

/// A person in the approval chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Approver {
    pub name: String,
    pub role: String,
    /// Highest amount this approver may sign off; `None` means no limit.
    pub limit: Option<f64>,
}

impl Approver {
    pub fn new(name: impl Into<String>, role: impl Into<String>, limit: Option<f64>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            limit,
        }
    }

    pub fn team_leader(name: impl Into<String>) -> Self {
        Self::new(name, "Team Leader", Some(500.0))
    }

    pub fn department_manager(name: impl Into<String>) -> Self {
        Self::new(name, "Department Manager", Some(5000.0))
    }

    pub fn general_manager(name: impl Into<String>) -> Self {
        Self::new(name, "General Manager", None)
    }

    pub fn covers(&self, amount: f64) -> bool {
        self.limit.map_or(true, |limit| amount <= limit)
    }
}

impl Handler<PurchaseRequest> for Approver {
    type Output = Approval;

    fn name(&self) -> &str {
        &self.name
    }

    fn handle(&self, request: &PurchaseRequest) -> Step<Approval> {
        if self.covers(request.amount) {
            Step::Handled(Approval {
                approver: self.name.clone(),
                role: self.role.clone(),
                amount: request.amount,
            })
        } else {
            Step::Forward
        }
    }
}

/// The approval chain plus the rules around it.
pub struct ApprovalDesk {
    chain: Chain<PurchaseRequest, Approval>,
}

impl ApprovalDesk {
    pub fn new(chain: Chain<PurchaseRequest, Approval>) -> Self {
        Self { chain }
    }

    /// Team leader, department manager, general manager.
    pub fn standard() -> Self {
        Self::new(
            Chain::new("purchase")
                .then(Approver::team_leader("Alice"))
                .then(Approver::department_manager("Bob"))
                .then(Approver::general_manager("Carol")),
        )
    }

    /// The standard chain without a general manager, so large amounts go unapproved.
    pub fn without_general_manager() -> Self {
        Self::new(
            Chain::new("purchase")
                .then(Approver::team_leader("Alice"))
                .then(Approver::department_manager("Bob")),
        )
    }

    pub fn approvers(&self) -> Vec<&str> {
        self.chain.names()
    }

    /// Routes the request and keeps the full dispatch, trail included.
    pub fn route(&self, request: &PurchaseRequest) -> Dispatch<Approval> {
        self.chain.dispatch(request)
    }

    #[instrument(skip(self))]
    pub fn approve(&self, amount: f64, purpose: &str) -> Result<Approval, ApprovalError> {
        if amount.is_nan() || amount < 0.0 {
            warn!(amount, "Invalid amount");
            return Err(ApprovalError::InvalidAmount(amount));
        }
        if self.chain.is_empty() {
            return Err(ApprovalError::NoApprovers);
        }

        let dispatch = self.route(&PurchaseRequest::new(amount, purpose));
        let last = dispatch.trail.handlers().last().map(|name| name.to_string()).unwrap_or_default();
        match dispatch.disposition {
            Disposition::HandledBy { output, .. } => {
                info!(approver = %output.approver, role = %output.role, "Approved");
                Ok(output)
            }
            Disposition::Unhandled => Err(ApprovalError::Rejected { amount, last }),
        }
    }
}
