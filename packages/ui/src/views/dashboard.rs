//! Role dashboards.

use dioxus::prelude::*;
use portal::catalog::{self, NotificationFeed};
use portal::models::Event;
use portal::{DashboardView, Session};

use crate::session::{use_portal, use_session};

const UPCOMING_LIMIT: usize = 3;

/// Picks the dashboard for the current session's role.
#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    let Some(current) = session() else {
        return rsx! {};
    };

    match current.view().dashboard {
        DashboardView::Student => rsx! { StudentDashboard { session: current } },
        DashboardView::Faculty => rsx! { FacultyDashboard { session: current } },
        DashboardView::Staff => rsx! { StaffDashboard { session: current } },
        DashboardView::Admin => rsx! { AdminDashboard { session: current } },
        DashboardView::InvalidRole(tag) => rsx! {
            div { class: "page", "Invalid user role: {tag}" }
        },
    }
}

#[component]
fn ProfileCard(session: Session) -> Element {
    let user = &session.user;
    rsx! {
        div {
            class: "card",
            h2 { class: "card-title", "Welcome back, {user.first_name()}" }
            p { "{user.email}" }
            p { class: "muted", "Roll number {user.roll_number}" }
            if let Some(detail) = user.affiliation.detail() {
                p { class: "muted", "{detail}" }
            }
        }
    }
}

#[component]
fn UpcomingEvents(events: Vec<Event>) -> Element {
    rsx! {
        div {
            class: "card",
            h2 { class: "card-title", "Upcoming Events" }
            for event in events.iter().take(UPCOMING_LIMIT) {
                div {
                    key: "{event.id}",
                    class: "list-row",
                    strong { "{event.title}" }
                    span { class: "muted", " {event.date} at {event.time}, {event.location}" }
                }
            }
            Link { class: "card-link", to: "/events", "All events" }
        }
    }
}

#[component]
fn StudentDashboard(session: Session) -> Element {
    let portal = use_portal();
    let events = portal.events().all();
    let unread = NotificationFeed::default().unread_count();

    rsx! {
        div {
            class: "page",
            h1 { class: "page-title", "Student Dashboard" }
            div {
                class: "card-grid",
                ProfileCard { session: session.clone() }
                div {
                    class: "card",
                    h2 { class: "card-title", "My Courses" }
                    for subject in catalog::subjects() {
                        div {
                            key: "{subject.code}",
                            class: "list-row",
                            strong { "{subject.code}" }
                            span { " {subject.name}" }
                        }
                    }
                }
                UpcomingEvents { events }
                div {
                    class: "card",
                    h2 { class: "card-title", "Announcements" }
                    p { "{unread} unread notifications" }
                    Link { class: "card-link", to: "/notifications", "Open notifications" }
                }
            }
        }
    }
}

#[component]
fn FacultyDashboard(session: Session) -> Element {
    let portal = use_portal();
    let department = session.user.affiliation.detail();
    let events: Vec<Event> = portal
        .events()
        .all()
        .into_iter()
        .filter(|e| e.department.is_none() || e.department.map(|d| d.as_str()) == department)
        .collect();

    rsx! {
        div {
            class: "page",
            h1 { class: "page-title", "Faculty Dashboard" }
            div {
                class: "card-grid",
                ProfileCard { session: session.clone() }
                UpcomingEvents { events }
            }
        }
    }
}

#[component]
fn StaffDashboard(session: Session) -> Element {
    let portal = use_portal();
    let events = portal.events().all();
    let total = events.len();

    rsx! {
        div {
            class: "page",
            h1 { class: "page-title", "Staff Dashboard" }
            div {
                class: "card-grid",
                ProfileCard { session: session.clone() }
                div {
                    class: "card",
                    h2 { class: "card-title", "Events on the board" }
                    p { class: "stat", "{total}" }
                }
                UpcomingEvents { events }
            }
        }
    }
}

#[component]
fn AdminDashboard(session: Session) -> Element {
    let portal = use_portal();
    let users = portal.directory().all().len();
    let settings = portal.settings().load();

    rsx! {
        div {
            class: "page",
            h1 { class: "page-title", "Admin Dashboard" }
            div {
                class: "card-grid",
                ProfileCard { session: session.clone() }
                div {
                    class: "card",
                    h2 { class: "card-title", "Users" }
                    p { class: "stat", "{users}" }
                    Link { class: "card-link", to: "/admin/users", "Manage users" }
                }
                div {
                    class: "card",
                    h2 { class: "card-title", "Site" }
                    p { "{settings.site_name}" }
                    if settings.maintenance_mode {
                        p { class: "badge warning", "Maintenance mode is on" }
                    }
                    Link { class: "card-link", to: "/admin/settings", "Settings" }
                }
                div {
                    class: "card",
                    h2 { class: "card-title", "System Logs" }
                    Link { class: "card-link", to: "/admin/logs", "View logs" }
                }
            }
        }
    }
}
