//! Network layer: REST helpers and wire DTOs.
//!
//! SYSTEM CONTEXT
//! ==============
//! All backend traffic is plain HTTP against the `/api` prefix; pages call
//! through `api` and never touch `gloo-net` directly.

pub mod api;
pub mod types;
