//! Event board: type tabs, search and the create form.

use dioxus::prelude::*;
use portal::events::search_events;
use portal::models::{Department, EventDraft, EventFilter, EventType};

use crate::notices::{notify, use_notices, NoticeLevel};
use crate::session::use_portal;

#[component]
pub fn EventsView() -> Element {
    let portal = use_portal();
    let mut tab = use_signal(|| "all".to_string());
    let mut query = use_signal(String::new);
    let mut show_create = use_signal(|| false);
    // Bumped after a create so the list is re-read.
    let mut revision = use_signal(|| 0u32);
    let _ = revision();

    let board = portal.events();
    let types = board.types();
    let filter = EventFilter::parse(&tab()).unwrap_or_default();
    let events = search_events(&board.by_type(filter), &query());

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                h1 { class: "page-title", "Campus Events" }
                button {
                    class: "btn primary",
                    onclick: move |_| show_create.set(!show_create()),
                    if show_create() { "Cancel" } else { "+ Create Event" }
                }
            }

            if show_create() {
                CreateEventForm {
                    on_created: move |_| {
                        show_create.set(false);
                        revision += 1;
                    },
                }
            }

            input {
                class: "search",
                r#type: "search",
                placeholder: "Search events...",
                value: "{query}",
                oninput: move |evt: FormEvent| query.set(evt.value()),
            }

            div {
                class: "tabs",
                for t in types {
                    button {
                        key: "{t}",
                        class: if t == tab() { "tab active" } else { "tab" },
                        onclick: {
                            let t = t.clone();
                            move |_| tab.set(t.clone())
                        },
                        "{t}"
                    }
                }
            }

            if events.is_empty() {
                p { class: "muted", "No events found" }
            }
            div {
                class: "card-grid",
                for event in events {
                    div {
                        key: "{event.id}",
                        class: "card",
                        span { class: "badge", {event.kind.as_str()} }
                        h2 { class: "card-title", "{event.title}" }
                        p { "{event.description}" }
                        p { class: "muted", "{event.date}, {event.time}" }
                        p { class: "muted", "{event.location}" }
                        p { class: "muted", "Organized by {event.organizer}" }
                    }
                }
            }
        }
    }
}

#[component]
fn CreateEventForm(on_created: EventHandler<()>) -> Element {
    let portal = use_portal();
    let mut notices = use_notices();
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut date = use_signal(String::new);
    let mut time = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut organizer = use_signal(String::new);
    let mut kind = use_signal(|| EventType::Academic);
    let mut department = use_signal(|| Option::<Department>::None);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let draft = EventDraft {
            title: title(),
            description: description(),
            date: date(),
            time: time(),
            location: location(),
            kind: kind(),
            organizer: organizer(),
            department: department(),
        };
        match portal.events().create(draft) {
            Ok(event) => {
                notify(&mut notices, NoticeLevel::Success, &format!("Created event {}", event.title));
                on_created.call(());
            }
            Err(e) => notify(&mut notices, NoticeLevel::Error, &e.to_string()),
        }
    };

    rsx! {
        form {
            class: "card form",
            onsubmit: onsubmit,
            label { "Title" }
            input { value: "{title}", oninput: move |evt: FormEvent| title.set(evt.value()) }
            label { "Description" }
            textarea { value: "{description}", oninput: move |evt: FormEvent| description.set(evt.value()) }
            label { "Date" }
            input { placeholder: "Oct 15, 2025", value: "{date}", oninput: move |evt: FormEvent| date.set(evt.value()) }
            label { "Time" }
            input { placeholder: "10:00 AM - 12:00 PM", value: "{time}", oninput: move |evt: FormEvent| time.set(evt.value()) }
            label { "Location" }
            input { value: "{location}", oninput: move |evt: FormEvent| location.set(evt.value()) }
            label { "Organizer" }
            input { value: "{organizer}", oninput: move |evt: FormEvent| organizer.set(evt.value()) }
            label { "Type" }
            select {
                onchange: move |evt: FormEvent| {
                    if let Some(t) = EventType::parse(&evt.value()) {
                        kind.set(t);
                    }
                },
                for t in EventType::ALL {
                    option { value: t.as_str(), selected: kind() == t, {t.as_str()} }
                }
            }
            label { "Department" }
            select {
                onchange: move |evt: FormEvent| department.set(Department::parse(&evt.value())),
                option { value: "", "None" }
                for d in Department::ALL {
                    option { value: d.as_str(), {d.as_str()} }
                }
            }
            button { class: "btn primary", r#type: "submit", "Create" }
        }
    }
}
