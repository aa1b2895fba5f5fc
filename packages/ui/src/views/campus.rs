//! Display-only campus pages.

use dioxus::prelude::*;
use portal::catalog::{self, NotificationFeed};
use portal::models::{FaqCategory, LocationType, MapLocation};

#[component]
pub fn MapView() -> Element {
    let mut query = use_signal(String::new);
    let mut kind = use_signal(|| Option::<LocationType>::None);
    let mut selected = use_signal(|| Option::<MapLocation>::None);

    let all = catalog::map_locations();
    let shown = catalog::find_locations(&all, &query(), kind());

    rsx! {
        div {
            class: "page",
            h1 { class: "page-title", "Campus Map" }
            div {
                class: "toolbar",
                input {
                    class: "search",
                    r#type: "search",
                    placeholder: "Search locations...",
                    value: "{query}",
                    oninput: move |evt: FormEvent| query.set(evt.value()),
                }
                select {
                    onchange: move |evt: FormEvent| kind.set(LocationType::parse(&evt.value())),
                    option { value: "", "All types" }
                    for t in LocationType::ALL {
                        option { value: t.as_str(), {t.as_str()} }
                    }
                }
            }
            div {
                class: "campus-map",
                for location in shown.clone() {
                    button {
                        key: "{location.id}",
                        class: "map-marker",
                        style: "left: {location.coordinates.x}%; top: {location.coordinates.y}%;",
                        title: "{location.name}",
                        onclick: {
                            let location = location.clone();
                            move |_| selected.set(Some(location.clone()))
                        },
                        "\u{25CF}"
                    }
                }
            }
            if shown.is_empty() {
                p { class: "muted", "No locations match your search" }
            }
            if let Some(location) = selected() {
                div {
                    class: "card",
                    span { class: "badge", {location.kind.as_str()} }
                    h2 { class: "card-title", "{location.name}" }
                    p { "{location.description}" }
                }
            }
        }
    }
}

#[component]
pub fn ClubsView() -> Element {
    let mut query = use_signal(String::new);
    let clubs = catalog::search_clubs(&catalog::clubs(), &query());

    rsx! {
        div {
            class: "page",
            h1 { class: "page-title", "Clubs" }
            input {
                class: "search",
                r#type: "search",
                placeholder: "Search clubs...",
                value: "{query}",
                oninput: move |evt: FormEvent| query.set(evt.value()),
            }
            div {
                class: "card-grid",
                for club in clubs {
                    div {
                        key: "{club.id}",
                        class: "card",
                        h2 { class: "card-title", "{club.name}" }
                        p { class: "muted", "{club.category}, {club.member_count} members" }
                        p { "{club.description}" }
                        div {
                            class: "tags",
                            for tag in club.tags.iter() {
                                span { class: "badge", "{tag}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SubjectsView() -> Element {
    rsx! {
        div {
            class: "page",
            h1 { class: "page-title", "Subjects" }
            p { class: "muted", "View your enrolled subjects and academic materials" }
            div {
                class: "card-grid",
                for subject in catalog::subjects() {
                    div {
                        key: "{subject.code}",
                        class: "card",
                        h2 { class: "card-title", "{subject.name}" }
                        p { class: "muted", "{subject.code}" }
                        p { "{subject.description}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn NotificationsView() -> Element {
    let mut feed = use_signal(NotificationFeed::default);
    let unread = feed.read().unread_count();
    let items = feed.read().items().to_vec();

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                h1 { class: "page-title", "Notifications" }
                button {
                    class: "btn",
                    disabled: unread == 0,
                    onclick: move |_| feed.write().mark_all_read(),
                    "Mark all as read"
                }
            }
            p { class: "muted", "{unread} unread" }
            for note in items {
                div {
                    key: "{note.id}",
                    class: if note.read { "card" } else { "card unread" },
                    h2 { class: "card-title", "{note.title}" }
                    p { "{note.message}" }
                    p { class: "muted", "{note.date}" }
                    if !note.read {
                        button {
                            class: "btn small",
                            onclick: {
                                let id = note.id.clone();
                                move |_| {
                                    feed.write().mark_read(&id);
                                }
                            },
                            "Mark as read"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SupportView() -> Element {
    let mut query = use_signal(String::new);
    let mut category = use_signal(|| Option::<FaqCategory>::None);
    let faqs = catalog::search_faqs(&catalog::faqs(), &query(), category());

    rsx! {
        div {
            class: "page",
            h1 { class: "page-title", "Help & Support" }
            div {
                class: "toolbar",
                input {
                    class: "search",
                    r#type: "search",
                    placeholder: "Search FAQs...",
                    value: "{query}",
                    oninput: move |evt: FormEvent| query.set(evt.value()),
                }
                div {
                    class: "tabs",
                    button {
                        class: if category().is_none() { "tab active" } else { "tab" },
                        onclick: move |_| category.set(None),
                        "all"
                    }
                    for c in FaqCategory::ALL {
                        button {
                            class: if category() == Some(c) { "tab active" } else { "tab" },
                            onclick: move |_| category.set(Some(c)),
                            {c.as_str()}
                        }
                    }
                }
            }
            for faq in faqs {
                details {
                    key: "{faq.id}",
                    class: "card",
                    summary { "{faq.question}" }
                    p { "{faq.answer}" }
                }
            }
        }
    }
}
