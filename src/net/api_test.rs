use super::*;

#[test]
fn recent_query_orders_newest_first_with_page_cap() {
    let query = TicketQuery::recent();
    assert_eq!(query.ordering, "-created_at");
    assert_eq!(query.page_size, 20);
}

#[test]
fn tickets_endpoint_formats_expected_path() {
    assert_eq!(
        tickets_endpoint(&TicketQuery::recent()),
        "/api/tickets/?ordering=-created_at&page_size=20"
    );
}

#[test]
fn ticket_request_failed_message_formats_status() {
    assert_eq!(ticket_request_failed_message(503), "ticket request failed: 503");
}

#[test]
fn login_failed_message_formats_status() {
    assert_eq!(login_failed_message(401), "login failed: 401");
}
