//! Reusable row component for ticket list items on the dashboard.
//!
//! DESIGN
//! ======
//! Keeps ticket presentation consistent between the dashboard and other list
//! views while centralizing the navigation affordance to the detail route.

#[cfg(test)]
#[path = "ticket_row_test.rs"]
mod ticket_row_test;

use leptos::prelude::*;

use crate::components::badge::{Badge, BadgeVariant};
use crate::net::types::TicketSummary;
use crate::util::relative_time::format_timestamp;

fn ticket_href(id: &str) -> String {
    format!("/tickets/{id}")
}

/// Meta line under the subject: number, priority, and last-update age.
fn meta_line(ticket_number: &str, priority_name: &str, updated_label: &str) -> String {
    format!("{ticket_number} \u{2022} {priority_name} priority \u{2022} Updated {updated_label}")
}

/// The comment count renders only when there is something to count.
fn has_comment_badge(count: i64) -> bool {
    count > 0
}

/// A clickable row representing a ticket, linking to its detail page.
#[component]
pub fn TicketRow(ticket: TicketSummary) -> impl IntoView {
    let href = ticket_href(&ticket.id);
    let variant = BadgeVariant::for_status(&ticket.status);
    let status_label = ticket.status.label();
    let meta = meta_line(
        &ticket.ticket_number,
        &ticket.priority_name,
        &format_timestamp(&ticket.updated_at),
    );
    let comments = ticket.comments_count;
    let show_comments = has_comment_badge(comments);

    view! {
        <a class="ticket-row" href=href>
            <div class="ticket-row__main">
                <span class="ticket-row__subject">{ticket.subject}</span>
                <Badge variant=variant label=status_label/>
            </div>
            <span class="ticket-row__meta">{meta}</span>
            <Show when=move || show_comments>
                <span class="ticket-row__comments" title="Comments">
                    {comments}
                </span>
            </Show>
        </a>
    }
}
