//! Shared client state provided through Leptos context.
//!
//! DESIGN
//! ======
//! Session identity and ticket data live in separate states so auth flow and
//! dashboard data can evolve independently.

pub mod auth;
pub mod tickets;
