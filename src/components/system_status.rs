//! Static system-status panel for the dashboard sidebar.

#[cfg(test)]
#[path = "system_status_test.rs"]
mod system_status_test;

use leptos::prelude::*;

use crate::components::badge::{Badge, BadgeVariant};

/// Health of one monitored service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceHealth {
    Operational,
    Maintenance,
}

impl ServiceHealth {
    pub fn label(self) -> &'static str {
        match self {
            Self::Operational => "Operational",
            Self::Maintenance => "Maintenance",
        }
    }

    pub fn badge_variant(self) -> BadgeVariant {
        match self {
            Self::Operational => BadgeVariant::Success,
            Self::Maintenance => BadgeVariant::Warning,
        }
    }
}

/// Services shown in the system-status panel. Static content for now; a
/// status-page integration would replace this table.
pub const SYSTEM_STATUS: [(&str, ServiceHealth); 4] = [
    ("Email Service", ServiceHealth::Operational),
    ("VPN Gateway", ServiceHealth::Operational),
    ("File Server", ServiceHealth::Maintenance),
    ("Support Portal", ServiceHealth::Operational),
];

/// Sidebar card listing service health rows.
#[component]
pub fn SystemStatusPanel() -> impl IntoView {
    view! {
        <div class="panel-card">
            <h2 class="panel-card__title">"System Status"</h2>
            <div class="panel-card__body">
                {SYSTEM_STATUS
                    .into_iter()
                    .map(|(service, health)| {
                        view! {
                            <div class="panel-card__status-row">
                                <span class="panel-card__service">{service}</span>
                                <Badge
                                    variant=health.badge_variant()
                                    label=health.label().to_owned()
                                />
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
