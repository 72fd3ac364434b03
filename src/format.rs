//! Console rendering of fetched tickets.
//!
//! Rendering is pure: the functions here build a `String` and the binary
//! decides where to print it.

use crate::freshdesk_client::FetchOutcome;
use crate::models::Ticket;

/// Width of the `=` rule that opens and closes each ticket block.
const SEPARATOR_WIDTH: usize = 70;

/// Descriptions longer than this are cut.
const MAX_DESCRIPTION_CHARS: usize = 100;

/// Marker appended to a cut description.
const ELLIPSIS: &str = "...";

/// Shortens `text` to at most `max_chars` characters, ending in `...` when cut.
///
/// Counts chars rather than bytes so multi-byte text is never split.
fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Formats the tickets from a fetch.
///
/// `NoData` renders as an empty string, the same as an empty ticket list.
pub fn format_ticket_data(outcome: &FetchOutcome) -> String {
    match outcome.tickets() {
        Some(tickets) => format_tickets(tickets),
        None => String::new(),
    }
}

/// Formats tickets as delimited blocks, in the order given.
pub fn format_tickets(tickets: &[Ticket]) -> String {
    let mut output = String::new();
    for ticket in tickets {
        write_ticket(&mut output, ticket);
    }
    output
}

/// Appends one ticket block to `output`.
fn write_ticket(output: &mut String, ticket: &Ticket) {
    let separator = "=".repeat(SEPARATOR_WIDTH);

    output.push('\n');
    output.push_str(&separator);
    output.push('\n');
    output.push_str(&format!("Ticket ID: {}\n", ticket.id));
    output.push_str(&format!("Subject: {}\n", ticket.subject));

    output.push_str(&format!("Status: {}\n", ticket.status_label()));
    output.push_str(&format!("Priority: {}\n", ticket.priority_label()));
    output.push_str(&format!("Source: {}\n", ticket.source_label()));

    if let Some(requester) = &ticket.requester {
        output.push_str(&format!(
            "Requester: {} ({})\n",
            requester.display_name(),
            requester.display_email()
        ));
    }
    if let Some(assignee) = ticket.assignee() {
        output.push_str(&format!("Assigned To: {}\n", assignee));
    }
    if let Some(group) = ticket.group() {
        output.push_str(&format!("Group: {}\n", group));
    }
    if let Some(due_by) = ticket.due_by() {
        output.push_str(&format!("Due By: {}\n", due_by));
    }
    if let Some(tags) = ticket.tags() {
        output.push_str(&format!("Tags: {}\n", tags.join(", ")));
    }

    if let Some(description) = ticket.description() {
        output.push_str(&format!(
            "\nDescription: {}\n",
            truncate_text(description, MAX_DESCRIPTION_CHARS)
        ));
    }

    output.push_str(&format!("\nCreated At: {}\n", ticket.created_at));
    output.push_str(&format!("Updated At: {}\n", ticket.updated_at));
    output.push_str(&separator);
    output.push('\n');
}
