//! Aggregate stat card for the dashboard grid.

use leptos::prelude::*;

/// One headline number with a title above and a caption beneath.
#[component]
pub fn StatCard(title: &'static str, value: String, caption: &'static str) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__title">{title}</span>
            <span class="stat-card__value">{value}</span>
            <span class="stat-card__caption">{caption}</span>
        </div>
    }
}
