use super::*;
use crate::net::types::{TicketStatus, User};

fn ticket(id: &str) -> TicketSummary {
    TicketSummary {
        id: id.to_owned(),
        ticket_number: format!("TCK-{id}"),
        subject: "subject".to_owned(),
        status: TicketStatus::Open,
        priority_name: "low".to_owned(),
        priority_level: 1,
        category_name: "General".to_owned(),
        category_color: "#888888".to_owned(),
        created_by_username: "alice".to_owned(),
        assigned_to_username: None,
        created_at: "2026-08-01T09:00:00Z".to_owned(),
        updated_at: "2026-08-02T09:00:00Z".to_owned(),
        comments_count: 0,
    }
}

#[test]
fn identity_key_is_the_user_id() {
    let auth = AuthState {
        user: Some(User {
            id: "u-7".to_owned(),
            username: "alice".to_owned(),
            display_name: None,
            email: None,
        }),
        loading: false,
    };
    assert_eq!(identity_key(&auth), Some("u-7".to_owned()));
    assert_eq!(identity_key(&AuthState::default()), None);
}

#[test]
fn recent_window_caps_at_display_limit() {
    let items: Vec<TicketSummary> = (0..9).map(|i| ticket(&i.to_string())).collect();
    let window = recent_window(&items);
    assert_eq!(window.len(), RECENT_DISPLAY_LIMIT);
    // Order is preserved: the fetch already sorts newest first.
    assert_eq!(window[0].id, "0");
    assert_eq!(window[3].id, "3");
}

#[test]
fn recent_window_of_short_list_keeps_everything() {
    let items = vec![ticket("1"), ticket("2")];
    assert_eq!(recent_window(&items).len(), 2);
}
