//! Static "popular articles" panel for the dashboard sidebar.
//!
//! The article list is hardcoded; the knowledge-base backend has no
//! popularity endpoint yet, so the panel links into the listing route.

use leptos::prelude::*;

/// Article titles shown in the popular-articles panel.
pub const POPULAR_ARTICLES: [&str; 5] = [
    "How to reset your password",
    "Setting up VPN access",
    "Email troubleshooting guide",
    "Software installation process",
    "Hardware replacement requests",
];

/// Sidebar card listing popular knowledge-base articles.
#[component]
pub fn KnowledgeBasePanel() -> impl IntoView {
    view! {
        <div class="panel-card">
            <h2 class="panel-card__title">"Popular Articles"</h2>
            <div class="panel-card__body">
                {POPULAR_ARTICLES
                    .into_iter()
                    .map(|title| {
                        view! {
                            <a class="panel-card__article" href="/knowledge-base">
                                {title}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
