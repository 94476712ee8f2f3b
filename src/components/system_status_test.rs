use super::*;

#[test]
fn health_maps_to_badge_variant() {
    assert_eq!(ServiceHealth::Operational.badge_variant(), BadgeVariant::Success);
    assert_eq!(ServiceHealth::Maintenance.badge_variant(), BadgeVariant::Warning);
}

#[test]
fn status_table_lists_the_four_monitored_services() {
    let names: Vec<&str> = SYSTEM_STATUS.iter().map(|(name, _)| *name).collect();
    assert_eq!(names, ["Email Service", "VPN Gateway", "File Server", "Support Portal"]);
}
