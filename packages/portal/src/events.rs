//! # Event board
//!
//! Starts from a fixed set of campus events; events created locally are
//! appended and the whole list is written back under the events key. Once that
//! key exists it is the only source, so the seed list is read only on a fresh
//! install.

use store::json::{read_json, write_json};
use store::{Collection, KeyValueStore, StorageKeys};

use crate::error::{PortalError, Result};
use crate::models::{Department, Event, EventDraft, EventFilter, EventType};

/// Events shown before anything has been created locally.
pub fn seed_events() -> Vec<Event> {
    let event = |id: &str,
                 title: &str,
                 description: &str,
                 date: &str,
                 time: &str,
                 location: &str,
                 kind: EventType,
                 organizer: &str| Event {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        location: location.to_string(),
        kind,
        organizer: organizer.to_string(),
        department: None,
    };

    let mut coding = event(
        "4",
        "Coding Competition",
        "Test your programming skills and win prizes",
        "Nov 1, 2025",
        "9:00 AM - 4:00 PM",
        "Computer Science Building",
        EventType::Club,
        "Coding Club",
    );
    coding.department = Some(Department::ComputerScience);

    vec![
        event(
            "1",
            "New Student Orientation",
            "Welcome session for new students",
            "Oct 15, 2025",
            "10:00 AM - 12:00 PM",
            "Main Auditorium",
            EventType::Academic,
            "Student Affairs Office",
        ),
        event(
            "2",
            "Tech Career Fair",
            "Connect with tech companies for internships and job opportunities",
            "Oct 20, 2025",
            "1:00 PM - 5:00 PM",
            "Student Center",
            EventType::Academic,
            "Career Services",
        ),
        event(
            "3",
            "Campus Music Festival",
            "Annual music festival featuring student bands and performers",
            "Oct 25, 2025",
            "5:00 PM - 10:00 PM",
            "Campus Grounds",
            EventType::Cultural,
            "Student Activities Board",
        ),
        coding,
        event(
            "5",
            "Campus Cleanup Day",
            "Volunteer event to clean campus grounds",
            "Nov 5, 2025",
            "9:00 AM - 12:00 PM",
            "Campus Grounds",
            EventType::Staff,
            "Facilities Management",
        ),
    ]
}

#[derive(Clone, Debug)]
pub struct EventBoard<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> EventBoard<S> {
    pub fn new(store: S, keys: &StorageKeys) -> Self {
        Self {
            store,
            key: keys.key(Collection::Events),
        }
    }

    pub fn all(&self) -> Vec<Event> {
        read_json(&self.store, &self.key).unwrap_or_else(seed_events)
    }

    pub fn by_type(&self, filter: EventFilter) -> Vec<Event> {
        self.all().into_iter().filter(|e| filter.matches(e)).collect()
    }

    /// Events whose title or description contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Vec<Event> {
        search_events(&self.all(), query)
    }

    /// `"all"` followed by each event type present, lower-cased, first-seen order.
    pub fn types(&self) -> Vec<String> {
        let mut types = vec!["all".to_string()];
        for event in self.all() {
            let tag = event.kind.as_str().to_lowercase();
            if !types.contains(&tag) {
                types.push(tag);
            }
        }
        types
    }

    pub fn get(&self, id: &str) -> Option<Event> {
        self.all().into_iter().find(|e| e.id == id)
    }

    pub fn create(&self, draft: EventDraft) -> Result<Event> {
        validate_draft(&draft)?;
        let mut events = self.all();
        let next_id = events
            .iter()
            .filter_map(|e| e.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;

        let event = Event {
            id: next_id.to_string(),
            title: draft.title.trim().to_string(),
            description: draft.description.trim().to_string(),
            date: draft.date.trim().to_string(),
            time: draft.time.trim().to_string(),
            location: draft.location.trim().to_string(),
            kind: draft.kind,
            organizer: draft.organizer.trim().to_string(),
            department: draft.department,
        };
        events.push(event.clone());
        write_json(&self.store, &self.key, &events)?;
        tracing::info!(id = %event.id, title = %event.title, "event created");
        Ok(event)
    }
}

/// Case-insensitive match on title or description.
pub fn search_events(events: &[Event], query: &str) -> Vec<Event> {
    let query = query.to_lowercase();
    events
        .iter()
        .filter(|e| {
            e.title.to_lowercase().contains(&query) || e.description.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

fn validate_draft(draft: &EventDraft) -> Result<()> {
    let required = [
        ("Title", &draft.title),
        ("Date", &draft.date),
        ("Time", &draft.time),
        ("Location", &draft.location),
        ("Organizer", &draft.organizer),
    ];
    for (label, value) in required {
        if value.trim().is_empty() {
            return Err(PortalError::validation(format!("{label} is required")));
        }
    }
    Ok(())
}
