//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and list surfaces while reading shared
//! state from Leptos context providers.

pub mod badge;
pub mod knowledge_base;
pub mod quick_actions;
pub mod stat_card;
pub mod system_status;
pub mod ticket_row;
