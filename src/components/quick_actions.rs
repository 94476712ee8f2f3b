//! Static quick-action links for the dashboard sidebar.

use leptos::prelude::*;

/// Label/target pairs for the sidebar shortcuts.
pub const QUICK_ACTIONS: [(&str, &str); 3] = [
    ("Create New Ticket", "/tickets/new"),
    ("View My Tickets", "/tickets"),
    ("Browse Knowledge Base", "/knowledge-base"),
];

/// Sidebar card with shortcut links to the main ticket flows.
#[component]
pub fn QuickActions() -> impl IntoView {
    view! {
        <div class="panel-card">
            <h2 class="panel-card__title">"Quick Actions"</h2>
            <div class="panel-card__body">
                {QUICK_ACTIONS
                    .into_iter()
                    .map(|(label, href)| {
                        view! {
                            <a class="btn panel-card__action" href=href>
                                {label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
