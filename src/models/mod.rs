//! Data models for the Freshdesk API.
//!
//! This module contains the ticket record and the static code tables used to
//! label its status, priority and source.

mod codes;
mod ticket;

pub use codes::*;
pub use ticket::*;
