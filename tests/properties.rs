//! Property tests for the chain skins: routing depends only on the request, never on luck.

use pattern_recipe::approval::{ApprovalDesk, ApprovalError};
use pattern_recipe::model::{Priority, SupportTicket, TicketKind, TicketStatus};
use pattern_recipe::support::SupportDesk;
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn arb_priority() -> impl Strategy<Value = Priority> {
    prop_oneof![
        Just(Priority::Low),
        Just(Priority::Medium),
        Just(Priority::High),
        Just(Priority::Critical),
    ]
}

fn arb_kind() -> impl Strategy<Value = TicketKind> {
    prop_oneof![
        Just(TicketKind::Technical),
        Just(TicketKind::Billing),
        Just(TicketKind::General),
    ]
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// The first approver whose limit covers the amount signs it; limits are inclusive.
    #[test]
    fn approval_goes_to_lowest_sufficient_role(amount in 0.0f64..50_000.0) {
        let approval = ApprovalDesk::standard().approve(amount, "supplies").unwrap();
        let expected = if amount <= 500.0 {
            "Alice"
        } else if amount <= 5_000.0 {
            "Bob"
        } else {
            "Carol"
        };
        prop_assert_eq!(approval.approver.as_str(), expected);
        prop_assert_eq!(approval.amount, amount);
    }

    /// Without a general manager, anything above the manager's limit is rejected by the manager.
    #[test]
    fn large_amounts_rejected_without_general_manager(amount in 5_000.01f64..1_000_000.0) {
        let result = ApprovalDesk::without_general_manager().approve(amount, "car");
        prop_assert_eq!(result, Err(ApprovalError::Rejected { amount, last: "Bob".to_string() }));
    }

    /// Senior support closes the chain, so every ticket ends resolved with one final note.
    #[test]
    fn standard_desk_resolves_every_ticket(priority in arb_priority(), kind in arb_kind()) {
        let mut ticket = SupportTicket::new(1, "Customer", "issue", priority, kind);
        let dispatch = SupportDesk::standard().resolve(&mut ticket);

        prop_assert!(dispatch.is_handled());
        prop_assert_eq!(ticket.status, TicketStatus::Resolved);
        prop_assert_eq!(ticket.notes.len(), dispatch.trail.len() + 1);
        prop_assert!(ticket.notes.last().unwrap().ends_with("resolved the ticket"));
    }
}
