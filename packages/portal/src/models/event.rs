//! Campus event records.

use serde::{Deserialize, Serialize};

use super::Department;

/// Event category, shown as a tab on the events page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    Academic,
    Cultural,
    Club,
    Staff,
}

impl EventType {
    pub const ALL: [EventType; 4] = [
        EventType::Academic,
        EventType::Cultural,
        EventType::Club,
        EventType::Staff,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EventType::Academic => "Academic",
            EventType::Cultural => "Cultural",
            EventType::Club => "Club",
            EventType::Staff => "Staff",
        }
    }

    /// Case-insensitive parse, so tab values like `"academic"` resolve.
    pub fn parse(s: &str) -> Option<EventType> {
        EventType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
    }
}

/// A scheduled event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Display date, e.g. `"Oct 15, 2025"`.
    pub date: String,
    /// Display time range, e.g. `"10:00 AM - 12:00 PM"`.
    pub time: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: EventType,
    pub organizer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,
}

/// Input for creating an event; the id is assigned on creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub kind: EventType,
    pub organizer: String,
    pub department: Option<Department>,
}

/// Tab filter on the events page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EventFilter {
    #[default]
    All,
    Only(EventType),
}

impl EventFilter {
    /// `"all"` or an event type tag, case-insensitive. Unknown tags are `None`.
    pub fn parse(tag: &str) -> Option<EventFilter> {
        if tag.eq_ignore_ascii_case("all") {
            Some(EventFilter::All)
        } else {
            EventType::parse(tag).map(EventFilter::Only)
        }
    }

    pub fn matches(self, event: &Event) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Only(kind) => event.kind == kind,
        }
    }
}
