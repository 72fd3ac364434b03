//! Ticket model for the Freshdesk v2 API.
//!
//! Only the fields freshview displays are captured; everything else in the
//! API response is ignored during deserialization.

use std::borrow::Cow;

use serde::Deserialize;

use super::codes::{priority_label, source_label, status_label};

/// Placeholder shown for a name or email the API left out.
pub const NOT_AVAILABLE: &str = "N/A";

/// The contact who raised a ticket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Requester {
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,

    /// Primary email address.
    #[serde(default)]
    pub email: Option<String>,
}

impl Requester {
    /// Returns the name if present, otherwise `"N/A"`.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// Returns the email if present, otherwise `"N/A"`.
    pub fn display_email(&self) -> &str {
        self.email.as_deref().unwrap_or(NOT_AVAILABLE)
    }
}

/// A single Freshdesk ticket as returned by `GET /api/v2/tickets`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Ticket {
    /// Unique ticket ID.
    pub id: u64,

    /// Subject line.
    pub subject: String,

    /// Status code (see [`TicketStatus`](super::TicketStatus)).
    pub status: u32,

    /// Priority code (see [`TicketPriority`](super::TicketPriority)).
    pub priority: u32,

    /// Source code (see [`TicketSource`](super::TicketSource)).
    pub source: u32,

    /// Requester details, when embedded in the response.
    #[serde(default)]
    pub requester: Option<Requester>,

    /// ID of the assigned agent.
    #[serde(default)]
    pub responder_id: Option<u64>,

    /// Name of the assigned agent.
    #[serde(default)]
    pub responder_name: Option<String>,

    /// ID of the assigned group.
    #[serde(default)]
    pub group_id: Option<u64>,

    /// Name of the assigned group.
    #[serde(default)]
    pub group_name: Option<String>,

    /// Resolution due timestamp.
    #[serde(default)]
    pub due_by: Option<String>,

    /// Tags attached to the ticket.
    #[serde(default)]
    pub tags: Option<Vec<String>>,

    /// Plain-text description.
    #[serde(default)]
    pub description_text: Option<String>,

    /// Creation timestamp, as sent by the API.
    pub created_at: String,

    /// Last update timestamp, as sent by the API.
    pub updated_at: String,
}

/// Treats `None` and `Some("")` alike.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl Ticket {
    /// Status label, or the raw code if unknown.
    pub fn status_label(&self) -> Cow<'static, str> {
        status_label(self.status)
    }

    /// Priority label, or the raw code if unknown.
    pub fn priority_label(&self) -> Cow<'static, str> {
        priority_label(self.priority)
    }

    /// Source label, or `"Unknown"`.
    pub fn source_label(&self) -> &'static str {
        source_label(self.source)
    }

    /// Name of the assigned agent, if the ticket is assigned.
    ///
    /// A zero or missing `responder_id` means unassigned. An assigned ticket
    /// without a `responder_name` yields `"N/A"`.
    pub fn assignee(&self) -> Option<&str> {
        match self.responder_id {
            Some(id) if id != 0 => Some(self.responder_name.as_deref().unwrap_or(NOT_AVAILABLE)),
            _ => None,
        }
    }

    /// Name of the assigned group, with the same rules as [`Ticket::assignee`].
    pub fn group(&self) -> Option<&str> {
        match self.group_id {
            Some(id) if id != 0 => Some(self.group_name.as_deref().unwrap_or(NOT_AVAILABLE)),
            _ => None,
        }
    }

    /// Due-by timestamp, unless missing or empty.
    pub fn due_by(&self) -> Option<&str> {
        non_empty(&self.due_by)
    }

    /// Tags, unless missing or empty.
    pub fn tags(&self) -> Option<&[String]> {
        self.tags.as_deref().filter(|tags| !tags.is_empty())
    }

    /// Description text, unless missing or empty.
    pub fn description(&self) -> Option<&str> {
        non_empty(&self.description_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_json() -> serde_json::Value {
        serde_json::json!({
            "id": 7,
            "subject": "Printer on fire",
            "status": 2,
            "priority": 1,
            "source": 3,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-02T00:00:00Z"
        })
    }

    #[test]
    fn test_deserialize_minimal_ticket() {
        let ticket: Ticket = serde_json::from_value(minimal_json()).unwrap();
        assert_eq!(ticket.id, 7);
        assert_eq!(ticket.subject, "Printer on fire");
        assert!(ticket.requester.is_none());
        assert!(ticket.assignee().is_none());
        assert!(ticket.group().is_none());
        assert!(ticket.due_by().is_none());
        assert!(ticket.tags().is_none());
        assert!(ticket.description().is_none());
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields_and_nulls() {
        let mut json = minimal_json();
        json["cc_emails"] = serde_json::json!(["a@example.com"]);
        json["responder_id"] = serde_json::Value::Null;
        json["tags"] = serde_json::Value::Null;
        json["fr_due_by"] = serde_json::json!("2024-01-03T00:00:00Z");

        let ticket: Ticket = serde_json::from_value(json).unwrap();
        assert!(ticket.responder_id.is_none());
        assert!(ticket.tags.is_none());
    }

    #[test]
    fn test_deserialize_rejects_missing_required_field() {
        let mut json = minimal_json();
        json.as_object_mut().unwrap().remove("subject");
        assert!(serde_json::from_value::<Ticket>(json).is_err());
    }

    #[test]
    fn test_labels() {
        let ticket: Ticket = serde_json::from_value(minimal_json()).unwrap();
        assert_eq!(ticket.status_label(), "Open");
        assert_eq!(ticket.priority_label(), "Low");
        assert_eq!(ticket.source_label(), "Phone");
    }

    #[test]
    fn test_assignee_requires_non_zero_id() {
        let mut ticket: Ticket = serde_json::from_value(minimal_json()).unwrap();
        ticket.responder_name = Some("Ada".to_string());

        ticket.responder_id = Some(0);
        assert_eq!(ticket.assignee(), None);

        ticket.responder_id = Some(1001);
        assert_eq!(ticket.assignee(), Some("Ada"));

        ticket.responder_name = None;
        assert_eq!(ticket.assignee(), Some("N/A"));
    }

    #[test]
    fn test_group_falls_back_to_placeholder() {
        let mut ticket: Ticket = serde_json::from_value(minimal_json()).unwrap();
        ticket.group_id = Some(55);
        assert_eq!(ticket.group(), Some("N/A"));
        ticket.group_name = Some("Tier 2".to_string());
        assert_eq!(ticket.group(), Some("Tier 2"));
    }

    #[test]
    fn test_empty_values_count_as_absent() {
        let mut ticket: Ticket = serde_json::from_value(minimal_json()).unwrap();
        ticket.due_by = Some(String::new());
        ticket.tags = Some(Vec::new());
        ticket.description_text = Some(String::new());
        assert!(ticket.due_by().is_none());
        assert!(ticket.tags().is_none());
        assert!(ticket.description().is_none());
    }

    #[test]
    fn test_deserialize_embedded_requester() {
        let mut json = minimal_json();
        json["requester"] = serde_json::json!({
            "id": 3001,
            "name": "Jane Doe",
            "email": "jane@example.com",
            "mobile": null
        });

        let ticket: Ticket = serde_json::from_value(json).unwrap();
        assert_eq!(
            ticket.requester,
            Some(Requester {
                name: Some("Jane Doe".to_string()),
                email: Some("jane@example.com".to_string()),
            })
        );
    }

    #[test]
    fn test_requester_placeholders() {
        let requester = Requester {
            name: Some("Jane Doe".to_string()),
            email: None,
        };
        assert_eq!(requester.display_name(), "Jane Doe");
        assert_eq!(requester.display_email(), "N/A");
    }
}
