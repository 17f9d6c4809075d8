use pattern_recipe::cosmos;
use pattern_recipe::model::{Priority, SupportTicket, TicketKind, TicketStatus};
use pattern_recipe::support::SupportDesk;
use pattern_recipe::workshop::{assemble, barebones, OfficeBuilder};
use serde_json::json;

#[test]
fn test_barebones_computer_serializes_missing_parts_as_null() {
    let computer = assemble(&barebones(), OfficeBuilder::default()).unwrap();
    let value = serde_json::to_value(&computer).unwrap();

    assert_eq!(value["gpu"], serde_json::Value::Null);
    assert_eq!(value["case"], serde_json::Value::Null);
    assert_eq!(value["cpu"], json!(computer.cpu));
}

#[test]
fn test_resolved_ticket_keeps_its_notes() {
    let mut ticket = SupportTicket::new(
        7,
        "Chen",
        "Password reset",
        Priority::Low,
        TicketKind::General,
    );
    SupportDesk::standard().resolve(&mut ticket);

    let text = serde_json::to_string(&ticket).unwrap();
    let restored: SupportTicket = serde_json::from_str(&text).unwrap();
    assert_eq!(restored.status, TicketStatus::Resolved);
    assert_eq!(restored.notes, ticket.notes);
    assert_eq!(restored, ticket);
}

#[test]
fn test_solar_system_document() {
    let value = serde_json::to_value(cosmos::solar_system()).unwrap();
    assert_eq!(value["star"], json!("Sun"));
    assert_eq!(value["planets"].as_array().map(Vec::len), Some(8));
}
