//! Wire DTOs for the helpdesk REST API.
//!
//! DESIGN
//! ======
//! These types mirror the backend's ticket payloads so serde round-trips stay
//! lossless. Numeric fields use tolerant deserializers because the API has
//! been observed emitting float-encoded integers.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Lifecycle state of a ticket.
///
/// The backend speaks snake_case strings; anything outside the known set is
/// preserved verbatim in [`TicketStatus::Other`] so an unrecognized status
/// still renders (with the default badge treatment) instead of failing
/// deserialization of the whole page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    Assigned,
    InProgress,
    WaitingCustomer,
    Resolved,
    Closed,
    #[serde(untagged)]
    Other(String),
}

impl TicketStatus {
    /// Human-readable label: the wire spelling with underscores as spaces.
    pub fn label(&self) -> String {
        match self {
            Self::Open => "open".to_owned(),
            Self::Assigned => "assigned".to_owned(),
            Self::InProgress => "in progress".to_owned(),
            Self::WaitingCustomer => "waiting customer".to_owned(),
            Self::Resolved => "resolved".to_owned(),
            Self::Closed => "closed".to_owned(),
            Self::Other(raw) => raw.replace('_', " "),
        }
    }

    /// Whether this ticket counts toward the dashboard "open" stat.
    pub fn counts_as_open(&self) -> bool {
        matches!(self, Self::Open | Self::InProgress)
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved)
    }
}

/// A ticket row as returned by the ticket list endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TicketSummary {
    /// Unique ticket identifier (UUID string).
    pub id: String,
    /// Human-facing ticket number (e.g. `"TCK-1042"`).
    pub ticket_number: String,
    /// Short subject line.
    pub subject: String,
    /// Lifecycle state; unknown values fall to [`TicketStatus::Other`].
    pub status: TicketStatus,
    /// Priority display name (e.g. `"high"`).
    pub priority_name: String,
    /// Numeric priority level; higher is more urgent.
    #[serde(deserialize_with = "deserialize_i32_from_number")]
    pub priority_level: i32,
    /// Category display name.
    pub category_name: String,
    /// Category accent color (hex).
    pub category_color: String,
    /// Username of the ticket creator.
    pub created_by_username: String,
    /// Username of the current assignee, if assigned.
    pub assigned_to_username: Option<String>,
    /// Creation timestamp (ISO 8601).
    pub created_at: String,
    /// Last-update timestamp (ISO 8601).
    pub updated_at: String,
    /// Number of comments on the ticket.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub comments_count: i64,
}

/// Ticket list response in either of the two shapes the backend produces.
///
/// Paginated endpoints wrap rows in a `{"results": [...]}` envelope; some
/// deployments return a bare array. Both normalize via [`TicketPage::into_tickets`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TicketPage {
    Paginated { results: Vec<TicketSummary> },
    Bare(Vec<TicketSummary>),
}

impl TicketPage {
    pub fn into_tickets(self) -> Vec<TicketSummary> {
        match self {
            Self::Paginated { results } => results,
            Self::Bare(tickets) => tickets,
        }
    }
}

/// An authenticated user as returned by the `/api/auth/me` endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Login name.
    pub username: String,
    /// Preferred display name, if the profile has one.
    pub display_name: Option<String>,
    /// Contact email, if shared.
    pub email: Option<String>,
}

impl User {
    /// Name to greet the user with: display name when set, else username.
    pub fn greeting_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.username)
    }
}

fn deserialize_i32_from_number<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserialize_i64_from_number(deserializer)?;
    i32::try_from(value).map_err(|_| D::Error::custom(format!("value {value} out of range for i32")))
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
