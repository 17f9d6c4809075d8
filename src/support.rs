//! # Support Ticket Escalation
//!
//! A chain skin with an audit trail. Tickets start at first-level support and move up until a
//! tier accepts them:
//!
//! - first-level support takes low and medium priority general questions
//! - technical support takes technical tickets that are not critical
//! - senior technical support takes anything
//!
//! Handlers only decide; [`SupportDesk::resolve`] writes the outcome back onto the ticket, one
//! note per tier that saw it.

use crate::model::{Priority, SupportTicket, TicketKind, TicketStatus};
use pattern_framework::{Chain, Dispatch, Disposition, Handler, Step, TrailAction};
use tracing::{info, instrument, warn};

/// Which tier resolved a ticket.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub agent: String,
}

/// One support tier: a named agent plus the tickets they accept.
pub struct SupportTier {
    label: String,
    accepts: fn(&SupportTicket) -> bool,
}

impl SupportTier {
    pub fn new(agent: &str, tier: &str, accepts: fn(&SupportTicket) -> bool) -> Self {
        Self {
            label: format!("{agent} ({tier})"),
            accepts,
        }
    }

    pub fn first_level(agent: &str) -> Self {
        Self::new(agent, "First-Level Support", |ticket| {
            matches!(ticket.priority, Priority::Low | Priority::Medium) && ticket.kind == TicketKind::General
        })
    }

    pub fn technical(agent: &str) -> Self {
        Self::new(agent, "Technical Support", |ticket| {
            ticket.kind == TicketKind::Technical && ticket.priority != Priority::Critical
        })
    }

    pub fn senior(agent: &str) -> Self {
        Self::new(agent, "Senior Technical Support", |_| true)
    }
}

impl Handler<SupportTicket> for SupportTier {
    type Output = Resolution;

    fn name(&self) -> &str {
        &self.label
    }

    fn handle(&self, ticket: &SupportTicket) -> Step<Resolution> {
        if (self.accepts)(ticket) {
            Step::Handled(Resolution {
                agent: self.label.clone(),
            })
        } else {
            Step::Forward
        }
    }
}

pub struct SupportDesk {
    chain: Chain<SupportTicket, Resolution>,
}

impl SupportDesk {
    pub fn new(chain: Chain<SupportTicket, Resolution>) -> Self {
        Self { chain }
    }

    /// First-level, technical and senior support, in that order.
    pub fn standard() -> Self {
        Self::new(
            Chain::new("support")
                .then(SupportTier::first_level("Li"))
                .then(SupportTier::technical("Wang"))
                .then(SupportTier::senior("Zhang")),
        )
    }

    /// Routes `ticket` and records every hop on it.
    ///
    /// Tiers that pass the ticket on leave an escalation note; the tier that takes it leaves an
    /// in-progress and a resolved note and the status ends as `Resolved`. If no tier takes it
    /// the ticket is only reported: the last tier leaves no note and the status is unchanged.
    ///
    /// Calling this again on the same ticket routes it again and appends a second set of notes.
    #[instrument(skip(self, ticket), fields(ticket = ticket.id))]
    pub fn resolve(&self, ticket: &mut SupportTicket) -> Dispatch<Resolution> {
        let dispatch = self.chain.dispatch(ticket);
        // The last tier of an unhandled ticket has nobody to pass it to.
        let passed_on = match dispatch.disposition {
            Disposition::Unhandled => dispatch.trail.len().saturating_sub(1),
            Disposition::HandledBy { .. } => dispatch.trail.len(),
        };

        for (position, entry) in dispatch.trail.entries().iter().enumerate() {
            match entry.action {
                TrailAction::Forwarded if position >= passed_on => {}
                TrailAction::Forwarded => {
                    ticket.add_note(format!("{} escalated the ticket", entry.handler));
                }
                TrailAction::Handled => {
                    ticket.status = TicketStatus::InProgress;
                    ticket.add_note(format!("{} is working on the ticket", entry.handler));
                    ticket.status = TicketStatus::Resolved;
                    ticket.add_note(format!("{} resolved the ticket", entry.handler));
                }
            }
        }

        match &dispatch.disposition {
            Disposition::HandledBy { handler, .. } => info!(%handler, "Ticket resolved"),
            Disposition::Unhandled => warn!(status = ?ticket.status, "No tier accepted the ticket"),
        }
        dispatch
    }
}
