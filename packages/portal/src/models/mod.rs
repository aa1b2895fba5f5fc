//! Data models for the portal.

mod campus;
mod event;
mod user;

pub use campus::{
    Club, Faq, FaqCategory, LocationType, MapLocation, Notification, NotificationKind, Point,
    Subject,
};
pub use event::{Event, EventDraft, EventFilter, EventType};
pub use user::{Affiliation, Department, Major, Role, StaffType, User};
