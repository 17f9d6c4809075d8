use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketKind {
    Technical,
    Billing,
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
    Escalated,
}

/// A customer support ticket.
///
/// `notes` is the ticket's audit trail: every support tier that looks at the ticket leaves a
/// line, in the order they saw it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportTicket {
    pub id: u32,
    pub customer: String,
    pub description: String,
    pub priority: Priority,
    pub kind: TicketKind,
    pub status: TicketStatus,
    pub notes: Vec<String>,
}

impl SupportTicket {
    /// Opens a ticket with no notes.
    pub fn new(
        id: u32,
        customer: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
        kind: TicketKind,
    ) -> Self {
        Self {
            id,
            customer: customer.into(),
            description: description.into(),
            priority,
            kind,
            status: TicketStatus::Open,
            notes: Vec::new(),
        }
    }

    pub fn add_note(&mut self, note: impl Into<String>) {
        self.notes.push(note.into());
    }
}
