//! Ticket-list and dashboard-stat state.
//!
//! DESIGN
//! ======
//! Stats are derived from the currently loaded ticket page, not the full
//! backing store, and are recomputed on every successful fetch. A fetch
//! generation counter guards against a stale in-flight response overwriting
//! state written by a newer request.

#[cfg(test)]
#[path = "tickets_test.rs"]
mod tickets_test;

use crate::net::types::TicketSummary;

/// Placeholder shown in the "Response Time" stat card.
///
/// The backend does not expose response-time aggregates yet, so this is a
/// static display value rather than a computation over ticket data.
pub const AVG_RESPONSE_TIME_PLACEHOLDER: &str = "1.2h";

/// Derived counters for the dashboard stat cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_tickets: usize,
    /// Tickets with status `open` or `in_progress`.
    pub open_tickets: usize,
    /// Tickets with status `resolved`.
    pub resolved_tickets: usize,
    pub avg_response_time: String,
}

impl Default for DashboardStats {
    fn default() -> Self {
        Self {
            total_tickets: 0,
            open_tickets: 0,
            resolved_tickets: 0,
            avg_response_time: AVG_RESPONSE_TIME_PLACEHOLDER.to_owned(),
        }
    }
}

/// Derive stat counters from a loaded ticket page.
pub fn compute_stats(tickets: &[TicketSummary]) -> DashboardStats {
    DashboardStats {
        total_tickets: tickets.len(),
        open_tickets: tickets.iter().filter(|t| t.status.counts_as_open()).count(),
        resolved_tickets: tickets.iter().filter(|t| t.status.is_resolved()).count(),
        avg_response_time: AVG_RESPONSE_TIME_PLACEHOLDER.to_owned(),
    }
}

/// Shared ticket state backing the dashboard route.
#[derive(Clone, Debug)]
pub struct TicketsState {
    pub items: Vec<TicketSummary>,
    pub stats: DashboardStats,
    pub loading: bool,
    /// Generation of the most recently issued fetch. Responses carrying an
    /// older generation are dropped in [`TicketsState::finish_fetch`].
    pub fetch_seq: u64,
}

impl Default for TicketsState {
    fn default() -> Self {
        // The page starts in the loading state until the first fetch resolves.
        Self {
            items: Vec::new(),
            stats: DashboardStats::default(),
            loading: true,
            fetch_seq: 0,
        }
    }
}

impl TicketsState {
    /// Mark a new fetch as started and return its generation.
    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_seq += 1;
        self.loading = true;
        self.fetch_seq
    }

    /// Apply a completed fetch, unless a newer one has been issued since.
    ///
    /// On success the ticket list is replaced and stats recomputed. On
    /// failure the previous list and stats are kept untouched, so a transient
    /// backend error renders the same as "no change". Either way the loading
    /// flag clears.
    pub fn finish_fetch(&mut self, seq: u64, result: Result<Vec<TicketSummary>, String>) {
        if seq != self.fetch_seq {
            return;
        }
        if let Ok(items) = result {
            self.stats = compute_stats(&items);
            self.items = items;
        }
        self.loading = false;
    }
}
