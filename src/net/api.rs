//! REST API helpers for communicating with the helpdesk backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth/ticket
//! fetch failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{TicketSummary, User};
#[cfg(feature = "hydrate")]
use super::types::TicketPage;
#[cfg(feature = "hydrate")]
use serde::Deserialize;

/// Query parameters for the ticket list endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TicketQuery {
    /// Ordering key; a `-` prefix means descending.
    pub ordering: &'static str,
    /// Maximum number of rows to return.
    pub page_size: u32,
}

impl TicketQuery {
    /// The dashboard's query: newest tickets first, capped to one page.
    pub fn recent() -> Self {
        Self { ordering: "-created_at", page_size: 20 }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn tickets_endpoint(query: &TicketQuery) -> String {
    format!("/api/tickets/?ordering={}&page_size={}", query.ordering, query.page_size)
}

#[cfg(any(test, feature = "hydrate"))]
fn ticket_request_failed_message(status: u16) -> String {
    format!("ticket request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    format!("login failed: {status}")
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}

/// Fetch a page of tickets from `/api/tickets/`.
///
/// The backend answers with either a paginated `{"results": [...]}` envelope
/// or a bare array; both normalize to a plain row list here so callers never
/// see the difference.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails, the server responds
/// with a non-OK status, or the body does not parse as a ticket page.
pub async fn fetch_tickets(query: &TicketQuery) -> Result<Vec<TicketSummary>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = tickets_endpoint(query);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(ticket_request_failed_message(resp.status()));
        }
        let page: TicketPage = resp.json().await.map_err(|e| e.to_string())?;
        Ok(page.into_tickets())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err("not available on server".to_owned())
    }
}

#[cfg(feature = "hydrate")]
#[derive(Debug, Deserialize)]
struct LoginResponse {
    ok: bool,
}

/// Log in with username and password via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails, the server responds
/// with a non-OK status, or the credentials are rejected.
pub async fn login(username: &str, password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "username": username, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(login_failed_message(resp.status()));
        }
        let body: LoginResponse = resp.json().await.map_err(|e| e.to_string())?;
        if !body.ok {
            return Err("login failed".to_owned());
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err("not available on server".to_owned())
    }
}
