use super::*;

fn ticket_json(status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "t-1",
        "ticket_number": "TCK-1001",
        "subject": "Printer offline",
        "status": status,
        "priority_name": "high",
        "priority_level": 3,
        "category_name": "Hardware",
        "category_color": "#ff4e50",
        "created_by_username": "alice",
        "assigned_to_username": null,
        "created_at": "2026-08-01T09:00:00Z",
        "updated_at": "2026-08-02T09:00:00Z",
        "comments_count": 2
    })
}

#[test]
fn known_status_deserializes_to_variant() {
    let ticket: TicketSummary = serde_json::from_value(ticket_json("in_progress")).unwrap();
    assert_eq!(ticket.status, TicketStatus::InProgress);
}

#[test]
fn unknown_status_is_preserved_verbatim() {
    let ticket: TicketSummary = serde_json::from_value(ticket_json("on_hold")).unwrap();
    assert_eq!(ticket.status, TicketStatus::Other("on_hold".to_owned()));
}

#[test]
fn status_serializes_back_to_wire_spelling() {
    assert_eq!(
        serde_json::to_value(TicketStatus::WaitingCustomer).unwrap(),
        serde_json::json!("waiting_customer")
    );
    assert_eq!(
        serde_json::to_value(TicketStatus::Other("on_hold".to_owned())).unwrap(),
        serde_json::json!("on_hold")
    );
}

#[test]
fn status_label_replaces_underscores() {
    assert_eq!(TicketStatus::InProgress.label(), "in progress");
    assert_eq!(TicketStatus::Other("on_hold".to_owned()).label(), "on hold");
    assert_eq!(TicketStatus::Open.label(), "open");
}

#[test]
fn open_and_in_progress_count_as_open() {
    assert!(TicketStatus::Open.counts_as_open());
    assert!(TicketStatus::InProgress.counts_as_open());
    assert!(!TicketStatus::Resolved.counts_as_open());
    assert!(!TicketStatus::Other("on_hold".to_owned()).counts_as_open());
}

#[test]
fn paginated_envelope_normalizes_to_rows() {
    let page: TicketPage =
        serde_json::from_value(serde_json::json!({ "results": [ticket_json("open")], "count": 1 }))
            .unwrap();
    let tickets = page.into_tickets();
    assert_eq!(tickets.len(), 1);
    assert_eq!(tickets[0].ticket_number, "TCK-1001");
}

#[test]
fn bare_array_normalizes_identically() {
    let page: TicketPage =
        serde_json::from_value(serde_json::json!([ticket_json("open")])).unwrap();
    assert_eq!(page.into_tickets().len(), 1);
}

#[test]
fn empty_envelope_normalizes_to_empty_list() {
    let page: TicketPage =
        serde_json::from_value(serde_json::json!({ "results": [] })).unwrap();
    assert!(page.into_tickets().is_empty());
}

#[test]
fn float_encoded_counts_deserialize() {
    let mut value = ticket_json("open");
    value["comments_count"] = serde_json::json!(3.0);
    value["priority_level"] = serde_json::json!(2.0);
    let ticket: TicketSummary = serde_json::from_value(value).unwrap();
    assert_eq!(ticket.comments_count, 3);
    assert_eq!(ticket.priority_level, 2);
}

#[test]
fn greeting_name_prefers_display_name() {
    let user = User {
        id: "u-1".to_owned(),
        username: "alice".to_owned(),
        display_name: Some("Alice L".to_owned()),
        email: None,
    };
    assert_eq!(user.greeting_name(), "Alice L");

    let bare = User { display_name: None, ..user };
    assert_eq!(bare.greeting_name(), "alice");
}
