//! Numeric code tables used by the Freshdesk ticket API.
//!
//! Freshdesk reports status, priority and source as small integers. Each table
//! is a closed enum; codes outside the table have no variant and are rendered
//! by the caller's fallback.

use std::borrow::Cow;

/// Ticket status.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketStatus {
    Open,
    Pending,
    Resolved,
    Closed,
    WaitingOnCustomer,
    WaitingOnThirdParty,
    WaitingOnEngineering,
    Cancelled,
    InProgress,
}

impl TicketStatus {
    /// Every known status, in code order.
    pub const ALL: [TicketStatus; 9] = [
        TicketStatus::Open,
        TicketStatus::Pending,
        TicketStatus::Resolved,
        TicketStatus::Closed,
        TicketStatus::WaitingOnCustomer,
        TicketStatus::WaitingOnThirdParty,
        TicketStatus::WaitingOnEngineering,
        TicketStatus::Cancelled,
        TicketStatus::InProgress,
    ];

    /// Looks up a status by its API code.
    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.code() == code)
    }

    /// The API code.
    pub fn code(self) -> u32 {
        match self {
            TicketStatus::Open => 2,
            TicketStatus::Pending => 3,
            TicketStatus::Resolved => 4,
            TicketStatus::Closed => 5,
            TicketStatus::WaitingOnCustomer => 6,
            TicketStatus::WaitingOnThirdParty => 7,
            TicketStatus::WaitingOnEngineering => 8,
            TicketStatus::Cancelled => 9,
            TicketStatus::InProgress => 10,
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            TicketStatus::Open => "Open",
            TicketStatus::Pending => "Pending",
            TicketStatus::Resolved => "Resolved",
            TicketStatus::Closed => "Closed",
            TicketStatus::WaitingOnCustomer => "Waiting on Customer",
            TicketStatus::WaitingOnThirdParty => "Waiting on Third Party",
            TicketStatus::WaitingOnEngineering => "Waiting on Engineering",
            TicketStatus::Cancelled => "Cancelled",
            TicketStatus::InProgress => "In Progress",
        }
    }
}

/// Ticket priority.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl TicketPriority {
    /// Every known priority, in code order.
    pub const ALL: [TicketPriority; 4] = [
        TicketPriority::Low,
        TicketPriority::Medium,
        TicketPriority::High,
        TicketPriority::Urgent,
    ];

    /// Looks up a priority by its API code.
    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|priority| priority.code() == code)
    }

    /// The API code.
    pub fn code(self) -> u32 {
        match self {
            TicketPriority::Low => 1,
            TicketPriority::Medium => 2,
            TicketPriority::High => 3,
            TicketPriority::Urgent => 4,
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            TicketPriority::Low => "Low",
            TicketPriority::Medium => "Medium",
            TicketPriority::High => "High",
            TicketPriority::Urgent => "Urgent",
        }
    }
}

/// Channel through which a ticket was created.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketSource {
    Email,
    Portal,
    Phone,
    Forum,
    Twitter,
    Facebook,
    Chat,
    Mobihelp,
    FeedbackWidget,
    OutboundEmail,
}

impl TicketSource {
    /// Every known source, in code order.
    pub const ALL: [TicketSource; 10] = [
        TicketSource::Email,
        TicketSource::Portal,
        TicketSource::Phone,
        TicketSource::Forum,
        TicketSource::Twitter,
        TicketSource::Facebook,
        TicketSource::Chat,
        TicketSource::Mobihelp,
        TicketSource::FeedbackWidget,
        TicketSource::OutboundEmail,
    ];

    /// Looks up a source by its API code.
    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|source| source.code() == code)
    }

    /// The API code.
    pub fn code(self) -> u32 {
        match self {
            TicketSource::Email => 1,
            TicketSource::Portal => 2,
            TicketSource::Phone => 3,
            TicketSource::Forum => 4,
            TicketSource::Twitter => 5,
            TicketSource::Facebook => 6,
            TicketSource::Chat => 7,
            TicketSource::Mobihelp => 8,
            TicketSource::FeedbackWidget => 9,
            TicketSource::OutboundEmail => 10,
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            TicketSource::Email => "Email",
            TicketSource::Portal => "Portal",
            TicketSource::Phone => "Phone",
            TicketSource::Forum => "Forum",
            TicketSource::Twitter => "Twitter",
            TicketSource::Facebook => "Facebook",
            TicketSource::Chat => "Chat",
            TicketSource::Mobihelp => "Mobihelp",
            TicketSource::FeedbackWidget => "Feedback Widget",
            TicketSource::OutboundEmail => "Outbound Email",
        }
    }
}

/// Status label, or the raw code for statuses outside the table.
pub fn status_label(code: u32) -> Cow<'static, str> {
    match TicketStatus::from_code(code) {
        Some(status) => Cow::Borrowed(status.label()),
        None => Cow::Owned(code.to_string()),
    }
}

/// Priority label, or the raw code for priorities outside the table.
pub fn priority_label(code: u32) -> Cow<'static, str> {
    match TicketPriority::from_code(code) {
        Some(priority) => Cow::Borrowed(priority.label()),
        None => Cow::Owned(code.to_string()),
    }
}

/// Source label, or `"Unknown"` for sources outside the table.
pub fn source_label(code: u32) -> &'static str {
    TicketSource::from_code(code).map_or("Unknown", TicketSource::label)
}
