//! Dashboard page: stat cards, recent tickets, and informational panels.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. Once a user identity is present
//! it fetches one page of recent tickets over REST, derives the stat counters
//! client-side, and renders the overview layout. A fetch failure is logged
//! and swallowed; the page keeps its previous (possibly empty) data rather
//! than surfacing an error state.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::knowledge_base::KnowledgeBasePanel;
use crate::components::quick_actions::QuickActions;
use crate::components::stat_card::StatCard;
use crate::components::system_status::SystemStatusPanel;
use crate::components::ticket_row::TicketRow;
#[cfg(feature = "hydrate")]
use crate::net::api::TicketQuery;
use crate::net::types::TicketSummary;
use crate::state::auth::AuthState;
use crate::state::tickets::TicketsState;

/// How many of the fetched tickets the recent-tickets card displays.
const RECENT_DISPLAY_LIMIT: usize = 4;

/// The stable identity a fetch is keyed on: the current user's id.
fn identity_key(auth: &AuthState) -> Option<String> {
    auth.user.as_ref().map(|user| user.id.clone())
}

/// The displayed slice of the fetched page, newest first as returned.
fn recent_window(items: &[TicketSummary]) -> Vec<TicketSummary> {
    items.iter().take(RECENT_DISPLAY_LIMIT).cloned().collect()
}

/// Kick off a dashboard fetch for the current generation.
///
/// The generation captured here is checked again on completion, so a
/// response that lost the race to a newer request is dropped instead of
/// overwriting fresher state.
fn load_dashboard(tickets: RwSignal<TicketsState>) {
    let seq = tickets.try_update(TicketsState::begin_fetch).unwrap_or_default();
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_tickets(&TicketQuery::recent()).await;
        if let Err(err) = &result {
            leptos::logging::error!("failed to load dashboard tickets: {err}");
        }
        tickets.update(|s| s.finish_fetch(seq, result));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = seq;
}

/// Dashboard page: stats, recent tickets, and sidebar panels.
/// Redirects to `/login` if the user is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let tickets = expect_context::<RwSignal<TicketsState>>();
    let navigate = use_navigate();

    crate::util::auth::install_unauth_redirect(auth, navigate);

    // Fetch once per authenticated identity; a changed identity re-fetches.
    let fetched_for = RwSignal::new(None::<String>);
    Effect::new(move || {
        let Some(key) = identity_key(&auth.get()) else {
            return;
        };
        if fetched_for.get() == Some(key.clone()) {
            return;
        }
        fetched_for.set(Some(key));
        load_dashboard(tickets);
    });

    let greeting_name = move || {
        auth.get()
            .user
            .map(|user| user.greeting_name().to_owned())
            .unwrap_or_else(|| "there".to_owned())
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                auth.update(|a| a.user = None);
                if let Some(w) = web_sys::window() {
                    let _ = w.location().set_href("/login");
                }
            });
        }
    };

    view! {
        <Show
            when=move || !tickets.get().loading
            fallback=move || {
                view! {
                    <div class="dashboard-page dashboard-page--loading">
                        <div class="spinner" aria-label="Loading dashboard"></div>
                        <p>"Loading dashboard..."</p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <header class="dashboard-page__header">
                    <div>
                        <h1>"Dashboard"</h1>
                        <p class="dashboard-page__welcome">
                            "Welcome back, " {greeting_name}
                            "! Here's an overview of your support activity."
                        </p>
                    </div>
                    <a class="btn btn--primary" href="/tickets/new">
                        "Create New Ticket"
                    </a>
                    <button class="btn dashboard-page__logout" on:click=on_logout title="Logout">
                        "Logout"
                    </button>
                </header>

                {move || {
                    let stats = tickets.get().stats;
                    view! {
                        <div class="dashboard-page__stats">
                            <StatCard
                                title="My Tickets"
                                value=stats.total_tickets.to_string()
                                caption="Total tickets"
                            />
                            <StatCard
                                title="Open Issues"
                                value=stats.open_tickets.to_string()
                                caption="Awaiting response"
                            />
                            <StatCard
                                title="Resolved"
                                value=stats.resolved_tickets.to_string()
                                caption="Completed"
                            />
                            <StatCard
                                title="Response Time"
                                value=stats.avg_response_time
                                caption="Average response"
                            />
                        </div>
                    }
                }}

                <div class="dashboard-page__grid">
                    <div class="panel-card dashboard-page__recent">
                        <h2 class="panel-card__title">"Recent Tickets"</h2>
                        <div class="panel-card__body">
                            <Show when=move || tickets.get().items.is_empty()>
                                <p class="dashboard-page__empty">"No tickets found"</p>
                            </Show>
                            {move || {
                                recent_window(&tickets.get().items)
                                    .into_iter()
                                    .map(|ticket| view! { <TicketRow ticket=ticket/> })
                                    .collect::<Vec<_>>()
                            }}
                            <a class="btn dashboard-page__view-all" href="/tickets">
                                "View All Tickets"
                            </a>
                        </div>
                    </div>

                    <div class="dashboard-page__sidebar">
                        <QuickActions/>
                        <KnowledgeBasePanel/>
                        <SystemStatusPanel/>
                    </div>
                </div>
            </div>
        </Show>
    }
}
