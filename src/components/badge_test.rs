use super::*;

#[test]
fn resolved_maps_to_success() {
    assert_eq!(BadgeVariant::for_status(&TicketStatus::Resolved), BadgeVariant::Success);
}

#[test]
fn unknown_status_falls_back_to_secondary() {
    let bogus = TicketStatus::Other("bogus-status".to_owned());
    assert_eq!(BadgeVariant::for_status(&bogus), BadgeVariant::Secondary);
}

#[test]
fn known_statuses_map_to_their_variants() {
    assert_eq!(BadgeVariant::for_status(&TicketStatus::Open), BadgeVariant::Destructive);
    assert_eq!(BadgeVariant::for_status(&TicketStatus::Assigned), BadgeVariant::Default);
    assert_eq!(BadgeVariant::for_status(&TicketStatus::InProgress), BadgeVariant::Warning);
    assert_eq!(BadgeVariant::for_status(&TicketStatus::WaitingCustomer), BadgeVariant::Secondary);
    assert_eq!(BadgeVariant::for_status(&TicketStatus::Closed), BadgeVariant::Secondary);
}

#[test]
fn class_names_are_scoped_to_the_badge_block() {
    assert_eq!(BadgeVariant::Success.class_name(), "badge--success");
    assert_eq!(BadgeVariant::Secondary.class_name(), "badge--secondary");
}
