//! Root application shell: routing, shared state, session bootstrap.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provides `AuthState` and `TicketsState` through context so routes and
//! components share one source of truth, then resolves the current session
//! once on startup. Pages never fetch identity themselves.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::dashboard::DashboardPage;
use crate::pages::login::LoginPage;
use crate::state::auth::AuthState;
use crate::state::tickets::TicketsState;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::bootstrapping());
    let tickets = RwSignal::new(TicketsState::default());
    provide_context(auth);
    provide_context(tickets);

    // Resolve the session once; routes react to the result through context.
    // On the server the state stays in its loading form so the shell renders
    // the neutral fallback and the browser makes the auth decision.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        auth.update(|a| {
            a.user = user;
            a.loading = false;
        });
    });

    view! {
        <Title text="Helpdesk"/>
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <p class="app__not-found">"Not found."</p> }>
                    <Route path=path!("/") view=DashboardPage/>
                    <Route path=path!("/login") view=LoginPage/>
                </Routes>
            </main>
        </Router>
    }
}
