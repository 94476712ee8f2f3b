//! Status badge component and its visual-category mapping.
//!
//! DESIGN
//! ======
//! Variants are a closed set of visual treatments; anything the mapping does
//! not recognize takes `Secondary` so an unknown ticket status degrades to a
//! muted badge instead of breaking the row.

#[cfg(test)]
#[path = "badge_test.rs"]
mod badge_test;

use leptos::prelude::*;

use crate::net::types::TicketStatus;

/// Visual category for a [`Badge`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeVariant {
    /// Urgent/attention treatment.
    Destructive,
    /// Neutral default treatment.
    Default,
    Warning,
    /// Muted treatment; also the fallback for unknown statuses.
    Secondary,
    Success,
}

impl BadgeVariant {
    /// Badge treatment for a ticket lifecycle state.
    pub fn for_status(status: &TicketStatus) -> Self {
        match status {
            TicketStatus::Open => Self::Destructive,
            TicketStatus::Assigned => Self::Default,
            TicketStatus::InProgress => Self::Warning,
            TicketStatus::WaitingCustomer | TicketStatus::Closed => Self::Secondary,
            TicketStatus::Resolved => Self::Success,
            TicketStatus::Other(_) => Self::Secondary,
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Self::Destructive => "badge--destructive",
            Self::Default => "badge--default",
            Self::Warning => "badge--warning",
            Self::Secondary => "badge--secondary",
            Self::Success => "badge--success",
        }
    }
}

/// A small labelled pill, colored by variant.
#[component]
pub fn Badge(variant: BadgeVariant, label: String) -> impl IntoView {
    view! { <span class=format!("badge {}", variant.class_name())>{label}</span> }
}
